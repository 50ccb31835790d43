//! [`Notifier`] adapter printing notices to a terminal stream.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::application::host::{HostError, Notifier};

pub struct TerminalNotifier<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalNotifier<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W: Write + Send> Notifier for TerminalNotifier<W> {
    fn notice(&self, message: &str) -> Result<(), HostError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| HostError::Notice("notice stream poisoned".to_string()))?;
        writeln!(out, "[notice] {message}")
            .and_then(|()| out.flush())
            .map_err(|e| HostError::Notice(e.to_string()))
    }
}
