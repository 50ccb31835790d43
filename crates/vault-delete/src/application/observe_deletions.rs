//! DeletionObserver: reacts to every file deletion the host reports.
//!
//! The observer does not care what removed the file (one of the plugin's
//! commands, the host's own UI, a sync tool).  For each deletion it performs
//! two independent side effects:
//!
//! 1. a notice `File deleted: <path>`, only when `showDeleteNotification` is on;
//! 2. a diagnostic line `File deleted: <path> at <local time>`, always.
//!
//! A failing notice is logged and never suppresses the diagnostic line.

use std::sync::Arc;

use chrono::Local;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};
use vault_delete_core::{messages, VaultEvent, VaultFile};

use super::host::{Console, Notifier};
use super::SharedSettings;

pub struct DeletionObserver {
    settings: SharedSettings,
    notifier: Arc<dyn Notifier>,
    console: Arc<dyn Console>,
}

impl DeletionObserver {
    pub fn new(
        settings: SharedSettings,
        notifier: Arc<dyn Notifier>,
        console: Arc<dyn Console>,
    ) -> Self {
        Self {
            settings,
            notifier,
            console,
        }
    }

    /// Handles one vault event.
    pub async fn handle(&self, event: &VaultEvent) {
        match event {
            VaultEvent::Delete(file) => self.on_delete(file).await,
        }
    }

    /// Emits the notice (if enabled) and the diagnostic line for `file`.
    pub async fn on_delete(&self, file: &VaultFile) {
        let show_notice = self.settings.read().await.show_delete_notification;

        if show_notice {
            if let Err(e) = self.notifier.notice(&messages::file_deleted_notice(&file.path)) {
                warn!(path = %file.path, "deletion notice failed: {e}");
            }
        }

        self.console
            .log(&messages::file_deleted_log_line(&file.path, &Local::now()));
    }

    /// Feeds events from `events` into the observer until `shutdown` fires or
    /// the host closes the channel.
    ///
    /// Events already queued when `shutdown` fires are still handled.
    pub async fn run(
        self: Arc<Self>,
        mut events: mpsc::UnboundedReceiver<VaultEvent>,
        mut shutdown: oneshot::Receiver<()>,
    ) {
        loop {
            tokio::select! {
                biased;

                received = events.recv() => match received {
                    Some(event) => self.handle(&event).await,
                    None => {
                        debug!("vault event channel closed");
                        break;
                    }
                },
                _ = &mut shutdown => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{RecordingConsole, RecordingNotifier};
    use tokio::sync::RwLock;
    use vault_delete_core::PluginSettings;

    fn observer(
        show: bool,
        notifier: Arc<RecordingNotifier>,
        console: Arc<RecordingConsole>,
    ) -> DeletionObserver {
        let settings = PluginSettings {
            show_delete_notification: show,
            ..PluginSettings::default()
        };
        DeletionObserver::new(Arc::new(RwLock::new(settings)), notifier, console)
    }

    fn file(path: &str) -> VaultFile {
        VaultFile::new(path).unwrap()
    }

    #[tokio::test]
    async fn test_enabled_notifications_emit_one_notice_and_one_log_line() {
        // Arrange
        let notifier = Arc::new(RecordingNotifier::default());
        let console = Arc::new(RecordingConsole::default());
        let observer = observer(true, Arc::clone(&notifier), Arc::clone(&console));

        // Act
        observer.on_delete(&file("notes/a.md")).await;

        // Assert
        assert_eq!(notifier.notices(), vec!["File deleted: notes/a.md".to_string()]);
        let logs = console.logs();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].starts_with("File deleted: notes/a.md at "));
    }

    #[tokio::test]
    async fn test_disabled_notifications_only_log() {
        let notifier = Arc::new(RecordingNotifier::default());
        let console = Arc::new(RecordingConsole::default());
        let observer = observer(false, Arc::clone(&notifier), Arc::clone(&console));

        observer.on_delete(&file("notes/a.md")).await;

        assert!(notifier.notices().is_empty());
        assert_eq!(console.logs().len(), 1);
    }

    #[tokio::test]
    async fn test_failing_notice_does_not_suppress_log_line() {
        let notifier = Arc::new(RecordingNotifier::failing());
        let console = Arc::new(RecordingConsole::default());
        let observer = observer(true, notifier, Arc::clone(&console));

        observer.on_delete(&file("notes/a.md")).await;

        assert_eq!(console.logs().len(), 1);
    }

    #[tokio::test]
    async fn test_setting_change_applies_to_next_event() {
        // Arrange
        let notifier = Arc::new(RecordingNotifier::default());
        let console = Arc::new(RecordingConsole::default());
        let settings: SharedSettings = Arc::new(RwLock::new(PluginSettings::default()));
        let observer = DeletionObserver::new(
            Arc::clone(&settings),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
            Arc::clone(&console) as Arc<dyn Console>,
        );

        // Act
        observer.on_delete(&file("a.md")).await;
        settings.write().await.show_delete_notification = false;
        observer.on_delete(&file("b.md")).await;

        // Assert
        assert_eq!(notifier.notices(), vec!["File deleted: a.md".to_string()]);
        assert_eq!(console.logs().len(), 2);
    }

    #[tokio::test]
    async fn test_run_drains_queued_events_before_shutdown() {
        // Arrange
        let notifier = Arc::new(RecordingNotifier::default());
        let console = Arc::new(RecordingConsole::default());
        let observer = Arc::new(observer(true, Arc::clone(&notifier), Arc::clone(&console)));
        let (tx, rx) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = oneshot::channel();

        tx.send(VaultEvent::Delete(file("a.md"))).unwrap();
        tx.send(VaultEvent::Delete(file("b.md"))).unwrap();
        stop_tx.send(()).unwrap();

        // Act
        observer.run(rx, stop_rx).await;

        // Assert
        assert_eq!(notifier.notices().len(), 2);
        assert_eq!(console.logs().len(), 2);
    }

    #[tokio::test]
    async fn test_run_stops_when_channel_closes() {
        let console = Arc::new(RecordingConsole::default());
        let observer = Arc::new(observer(
            true,
            Arc::new(RecordingNotifier::default()),
            Arc::clone(&console),
        ));
        let (tx, rx) = mpsc::unbounded_channel::<VaultEvent>();
        let (_stop_tx, stop_rx) = oneshot::channel();
        drop(tx);

        observer.run(rx, stop_rx).await;

        assert!(console.logs().is_empty());
    }

    #[tokio::test]
    async fn test_run_handles_every_event_of_a_large_burst() {
        // Arrange
        let notifier = Arc::new(RecordingNotifier::default());
        let console = Arc::new(RecordingConsole::default());
        let observer = Arc::new(observer(true, Arc::clone(&notifier), Arc::clone(&console)));
        let (tx, rx) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = oneshot::channel();

        for n in 0..1000 {
            tx.send(VaultEvent::Delete(file(&format!("big/{n}.md")))).unwrap();
        }
        stop_tx.send(()).unwrap();

        // Act
        observer.run(rx, stop_rx).await;

        // Assert
        assert_eq!(notifier.notices().len(), 1000);
        assert_eq!(console.logs().len(), 1000);
    }
}
