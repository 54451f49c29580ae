use serde_json::{Map, Value};

use super::Similarity;
use crate::ids::IndexId;

/// Fixed header block of a search hit.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryHeader {
    pub index_id: IndexId,
    pub similarity: Similarity,
    /// Absolute thumbnail URL. May be absent, and is not validated here.
    pub thumbnail_url: Option<String>,
}

/// Index-specific data block of a search hit.
///
/// `external_urls` is split out of the raw mapping because it drives the
/// primary action; every other field stays in `fields` and is interpreted
/// by the metadata rules for the entry's index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryData {
    external_urls: Vec<String>,
    fields: Map<String, Value>,
}

impl EntryData {
    pub fn new(external_urls: Vec<String>, fields: Map<String, Value>) -> Self {
        Self {
            external_urls,
            fields,
        }
    }

    pub fn external_urls(&self) -> &[String] {
        &self.external_urls
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.external_urls.is_empty() && self.fields.is_empty()
    }

    /// Display text of a field.
    ///
    /// Scalars are stringified, arrays of scalars are joined with `", "`.
    /// Null, objects and blank strings yield `None`.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::Array(items) => {
                let parts: Vec<String> = items.iter().filter_map(scalar_text).collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(", "))
                }
            }
            other => scalar_text(other),
        }
    }
}

/// Stringifies a scalar JSON value; non-scalars and blank strings yield `None`.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// One decoded search hit. Immutable once decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    header: EntryHeader,
    data: EntryData,
}

impl ResultEntry {
    pub fn new(header: EntryHeader, data: EntryData) -> Self {
        Self { header, data }
    }

    pub fn data(&self) -> &EntryData {
        &self.data
    }

    pub fn index_id(&self) -> IndexId {
        self.header.index_id
    }

    pub fn similarity(&self) -> &Similarity {
        &self.header.similarity
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.header.thumbnail_url.as_deref()
    }

    /// Navigation target of the primary action: the first external URL.
    pub fn primary_url(&self) -> Option<&str> {
        self.data.external_urls.first().map(String::as_str)
    }
}
