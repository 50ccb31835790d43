//! Recording test doubles shared by the application-layer unit tests.

use std::sync::Mutex;

use super::host::{Console, HostError, Notifier};

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<String>>,
    pub should_fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notice(&self, message: &str) -> Result<(), HostError> {
        if self.should_fail {
            return Err(HostError::Notice("injected failure".to_string()));
        }
        self.notices.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingConsole {
    pub logs: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl RecordingConsole {
    pub fn logs(&self) -> Vec<String> {
        self.logs.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Console for RecordingConsole {
    fn log(&self, line: &str) {
        self.logs.lock().unwrap().push(line.to_string());
    }

    fn error(&self, line: &str) {
        self.errors.lock().unwrap().push(line.to_string());
    }
}
