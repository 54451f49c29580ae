//! Viewer configuration domain model.

mod viewer_config;

pub use viewer_config::{LoggingConfig, ThumbnailConfig, ViewerConfig};
