//! Result model: one [`ResultEntry`] per search hit, grouped in an immutable
//! [`ResultSet`].

pub(crate) mod entry;
mod result_set;
mod similarity;

pub use entry::{EntryData, EntryHeader, ResultEntry};
pub use result_set::ResultSet;
pub use similarity::Similarity;
