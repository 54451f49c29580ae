//! # Configuration Loader
//!
//! Reads a TOML file and maps it onto [`ViewerConfig`]. Missing keys keep
//! their defaults; values are taken as they are.

use anyhow::Context;
use std::path::Path;
use sv_core::config::ViewerConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<ViewerConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    ViewerConfig::from_toml(&toml_value)
}
