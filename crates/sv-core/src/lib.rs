//! # sv-core
//!
//! Core domain models and business logic for SauceView.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! the result model, the response decoder, the per-index metadata rules and
//! the port traits implemented by the infra/platform layers.

pub mod config;
pub mod decode;
pub mod ids;
pub mod metadata;
pub mod ports;
pub mod presentation;
pub mod results;
pub mod thumbnail;

// Re-export commonly used types at the crate root
pub use config::ViewerConfig;
pub use decode::{decode_results, decode_results_str, ResponseError, SkipReason, SkippedEntry};
pub use ids::{EntryId, IndexId};
pub use presentation::{Notification, ResultCard};
pub use results::{EntryData, EntryHeader, ResultEntry, ResultSet, Similarity};
pub use thumbnail::{FetchError, Thumbnail, ThumbnailState};
