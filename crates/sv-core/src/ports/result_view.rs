use crate::ids::EntryId;
use crate::presentation::ResultCard;
use crate::thumbnail::ThumbnailState;

/// Rendering layer for one presentation session.
///
/// Cards are rendered in display order from the presenting task. Thumbnail
/// updates arrive from fetch tasks in any order and possibly concurrently,
/// so implementations must only touch the slot named by `id`.
pub trait ResultViewPort: Send + Sync {
    /// Explicit empty state. Never followed by cards in the same session.
    fn show_no_results(&self);

    fn render_card(&self, card: &ResultCard);

    fn update_thumbnail(&self, id: EntryId, state: &ThumbnailState);
}
