use serde::{Deserialize, Serialize};

/// Identity of one entry inside a [`ResultSet`](crate::ResultSet).
///
/// The id is the entry's zero-based position in display order. A result set
/// never reorders its entries, so the position is stable for the lifetime of
/// a presentation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(usize);

impl EntryId {
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    pub fn position(&self) -> usize {
        self.0
    }

    /// One-based number, as shown to users.
    pub fn display_number(&self) -> usize {
        self.0 + 1
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entry#{}", self.0)
    }
}
