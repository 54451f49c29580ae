use log::{info, warn};
use sv_core::ports::NotificationPort;
use sv_core::Notification;

/// Routes notifications into the log instead of in front of the user.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationPort for LogNotifier {
    fn notify(&self, notification: Notification) {
        match &notification {
            Notification::MalformedResponse { .. } => warn!("{}", notification.message()),
            Notification::TitleCopied { .. } => info!("{}", notification.message()),
        }
    }
}
