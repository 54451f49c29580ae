use std::io::{self, Write};
use std::sync::Mutex;

use sv_core::ports::NotificationPort;
use sv_core::Notification;

/// Writes notifications as single lines, stderr by default so they never
/// mix with rendered results.
pub struct TerminalNotifier {
    out: Mutex<Box<dyn Write + Send>>,
}

impl TerminalNotifier {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stderr() -> Self {
        Self::new(Box::new(io::stderr()))
    }
}

impl NotificationPort for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        let message = notification.message();
        tracing::debug!(%message, "notification");
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(err) = writeln!(out, "{message}") {
            tracing::warn!(error = %err, "failed to write notification");
        }
    }
}
