use crate::presentation::Notification;

/// Transient, fire-and-forget user notifications.
pub trait NotificationPort: Send + Sync {
    fn notify(&self, notification: Notification);
}
