use super::ResultEntry;
use crate::decode::SkippedEntry;
use crate::ids::EntryId;

/// Ordered, immutable collection of decoded entries.
///
/// Display order is payload order, which is relevance order from the origin
/// API. There are no mutating methods: a result set is built once by the
/// decoder and dropped with the presentation session that owns it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<ResultEntry>,
    skipped: Vec<SkippedEntry>,
}

impl ResultSet {
    pub fn new(entries: Vec<ResultEntry>, skipped: Vec<SkippedEntry>) -> Self {
        Self { entries, skipped }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&ResultEntry> {
        self.entries.get(id.position())
    }

    /// Entries paired with their identity, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &ResultEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (EntryId::new(position), entry))
    }

    /// Payload elements that could not be decoded.
    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}
