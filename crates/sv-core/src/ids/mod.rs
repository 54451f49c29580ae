//! ID type wrappers for type safety.

mod entry_id;
mod index_id;

pub use entry_id::EntryId;
pub use index_id::IndexId;
