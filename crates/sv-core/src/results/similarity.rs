use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Percentage-like similarity score as sent by the origin API.
///
/// The upstream service sends either a string (`"95.12"`) or a number; both
/// are kept verbatim and only formatted for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Similarity(Option<String>);

impl Similarity {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self(None)
        } else {
            Self(Some(trimmed.to_string()))
        }
    }

    pub fn absent() -> Self {
        Self(None)
    }

    /// Reads a similarity from a header value. Anything that is not a string
    /// or a number is treated as absent.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => Self::new(s.as_str()),
            Some(Value::Number(n)) => Self::new(n.to_string()),
            _ => Self(None),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Display form: `"95.12"` becomes `"95.12%"`, an existing `%` is kept,
    /// absent scores render as an empty string.
    pub fn display(&self) -> String {
        match self.0.as_deref() {
            None => String::new(),
            Some(raw) if raw.ends_with('%') => raw.to_string(),
            Some(raw) => format!("{raw}%"),
        }
    }
}

impl std::fmt::Display for Similarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
