//! Values handed to the rendering layer.

use crate::ids::{EntryId, IndexId};
use crate::metadata::{resolve_metadata, resolve_source_name, resolve_title};
use crate::results::ResultEntry;

/// Everything the rendering layer needs to draw one entry, apart from its
/// thumbnail which arrives later through the view port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub id: EntryId,
    pub index_id: IndexId,
    pub source_name: String,
    pub similarity: String,
    pub title: String,
    pub metadata: String,
    /// Target of the primary action. `None` disables it.
    pub primary_url: Option<String>,
}

impl ResultCard {
    pub fn from_entry(id: EntryId, entry: &ResultEntry) -> Self {
        Self {
            id,
            index_id: entry.index_id(),
            source_name: resolve_source_name(entry.index_id()),
            similarity: entry.similarity().display(),
            title: resolve_title(entry),
            metadata: resolve_metadata(entry),
            primary_url: entry.primary_url().map(str::to_string),
        }
    }
}

/// Transient user notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The payload could not be decoded at all.
    MalformedResponse { reason: String },
    /// The secondary action copied a title.
    TitleCopied { title: String },
}

impl Notification {
    /// Text shown to the user.
    pub fn message(&self) -> String {
        match self {
            Self::MalformedResponse { reason } => format!("Unable to parse results: {reason}"),
            Self::TitleCopied { title } if title.is_empty() => {
                "Title copied to clipboard (empty)".to_string()
            }
            Self::TitleCopied { title } => format!("Title copied to clipboard: {title}"),
        }
    }
}
