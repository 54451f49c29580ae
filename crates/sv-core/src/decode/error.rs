use thiserror::Error;

/// Response-level failure. The only decode error surfaced to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("malformed search response: {reason}")]
    MalformedResponse { reason: String },
}

impl ResponseError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }
}

/// Why a single result element was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("element is not an object")]
    NotAnObject,

    #[error("element has no header block")]
    MissingHeader,

    #[error("header has no index id")]
    MissingIndexId,

    #[error("header index id is not an integer: {0}")]
    InvalidIndexId(String),
}

/// Diagnostic record of a skipped element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Position of the element in the payload's `results` array.
    pub position: usize,
    pub reason: SkipReason,
}
