use serde::{Deserialize, Serialize};

/// Viewer configuration.
///
/// Plain data. Missing TOML keys keep their defaults; values are not
/// validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub thumbnail: ThumbnailConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailConfig {
    /// Upper bound for one thumbnail request, in seconds.
    pub timeout_secs: u64,
    /// Longest edge of a delivered thumbnail; 0 keeps the original size.
    pub max_edge: u32,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Also write logs to a file under the data directory.
    pub file: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            thumbnail: ThumbnailConfig::default(),
            logging: LoggingConfig { file: true },
        }
    }
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            max_edge: 0,
            user_agent: concat!("sauceview/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ViewerConfig {
    /// Create a config from a TOML value, keeping defaults for missing keys.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let thumbnail = toml_value.get("thumbnail");
        let logging = toml_value.get("logging");

        Ok(Self {
            thumbnail: ThumbnailConfig {
                timeout_secs: thumbnail
                    .and_then(|t| t.get("timeout_secs"))
                    .and_then(|v| v.as_integer())
                    .map(|v| v.max(0) as u64)
                    .unwrap_or(defaults.thumbnail.timeout_secs),
                max_edge: thumbnail
                    .and_then(|t| t.get("max_edge"))
                    .and_then(|v| v.as_integer())
                    .map(|v| v.clamp(0, u32::MAX as i64) as u32)
                    .unwrap_or(defaults.thumbnail.max_edge),
                user_agent: thumbnail
                    .and_then(|t| t.get("user_agent"))
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
                    .unwrap_or(defaults.thumbnail.user_agent),
            },
            logging: LoggingConfig {
                file: logging
                    .and_then(|l| l.get("file"))
                    .and_then(|v| v.as_bool())
                    .unwrap_or(defaults.logging.file),
            },
        })
    }
}
