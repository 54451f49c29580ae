use async_trait::async_trait;

use crate::thumbnail::{FetchError, Thumbnail};

/// Retrieves and decodes one thumbnail.
///
/// Implementations must not retry, and must fail with
/// [`FetchError::InvalidUrl`] without any network traffic when the URL is
/// malformed.
#[async_trait]
pub trait ThumbnailFetcherPort: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Thumbnail, FetchError>;
}
