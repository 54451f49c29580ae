use anyhow::Result;

/// Opens an external URL with whatever the platform uses for that.
pub trait UrlOpenerPort: Send + Sync {
    fn open_url(&self, url: &str) -> Result<()>;
}
