//! # sv-infra
//!
//! Infrastructure adapters for SauceView: the HTTP thumbnail fetcher and
//! the raw payload reader.

pub mod payload;
pub mod thumbnail;

pub use payload::{read_payload, PayloadSource};
pub use thumbnail::HttpThumbnailFetcher;
