//! Thumbnail values and per-entry thumbnail state.

use std::sync::Arc;

use thiserror::Error;

/// Decoded thumbnail, RGBA8 pixels in row-major order.
#[derive(Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub pixels: Arc<[u8]>,
}

impl Thumbnail {
    pub fn new(width: u32, height: u32, pixels: impl Into<Arc<[u8]>>) -> Self {
        Self {
            width,
            height,
            pixels: pixels.into(),
        }
    }
}

impl std::fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thumbnail")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixels_len", &self.pixels.len())
            .finish()
    }
}

/// Entry-level thumbnail failure. Never surfaced as a user-facing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The URL was absent or malformed; no request was made.
    #[error("invalid thumbnail url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to fetch thumbnail `{url}`: {reason}")]
    NetworkError { url: String, reason: String },

    #[error("failed to decode thumbnail `{url}`: {reason}")]
    DecodeError { url: String, reason: String },
}

impl FetchError {
    /// Short label for placeholders and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "invalid url",
            Self::NetworkError { .. } => "network error",
            Self::DecodeError { .. } => "decode error",
        }
    }
}

/// Visual state of one entry's thumbnail slot.
///
/// `Pending` moves to exactly one of the terminal states per fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailState {
    Pending,
    Loaded(Thumbnail),
    Failed(FetchError),
}

impl From<Result<Thumbnail, FetchError>> for ThumbnailState {
    fn from(result: Result<Thumbnail, FetchError>) -> Self {
        match result {
            Ok(thumbnail) => Self::Loaded(thumbnail),
            Err(err) => Self::Failed(err),
        }
    }
}
