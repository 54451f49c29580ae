use anyhow::Result;

/// Shared plain-text clipboard.
///
/// Only the synchronous secondary action writes to it; background tasks
/// never do.
pub trait ClipboardPort: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}
