//! Metadata resolver.
//!
//! Produces the title, the metadata text and the source name shown for an
//! entry. All three functions are total: absent or oddly-shaped fields
//! degrade to empty strings, never to errors.
//!
//! The per-index behaviour lives in static tables ([`rules`], [`sources`]);
//! supporting a new source index means adding a row, not a branch.

mod rules;
mod sources;

pub use rules::{IndexRule, MetadataField, TitleRule, GENERIC_DELIMITER, METADATA_SEPARATOR};
pub use sources::UNKNOWN_SOURCE;

use crate::ids::IndexId;
use crate::results::entry::scalar_text;
use crate::results::{EntryData, ResultEntry};

/// Field used as title by the generic rule.
const GENERIC_TITLE_FIELD: &str = "title";

/// Human-readable title of an entry, or an empty string.
pub fn resolve_title(entry: &ResultEntry) -> String {
    let data = entry.data();
    match rules::rule_for(entry.index_id()) {
        Some(rule) => apply_title_rule(&rule.title, data),
        None => data.text(GENERIC_TITLE_FIELD).unwrap_or_default(),
    }
}

/// Formatted metadata text of an entry, or an empty string.
pub fn resolve_metadata(entry: &ResultEntry) -> String {
    let data = entry.data();
    match rules::rule_for(entry.index_id()) {
        Some(rule) => compose_metadata(rule.metadata, data),
        None => generic_metadata(data),
    }
}

/// Display name of a source index; unknown indexes get a placeholder.
pub fn resolve_source_name(index_id: IndexId) -> String {
    sources::source_name(index_id)
        .unwrap_or(UNKNOWN_SOURCE)
        .to_string()
}

fn apply_title_rule(rule: &TitleRule, data: &EntryData) -> String {
    match rule {
        TitleRule::FirstOf(keys) => keys
            .iter()
            .find_map(|key| data.text(key))
            .unwrap_or_default(),
        TitleRule::Joined { keys, separator } => keys
            .iter()
            .filter_map(|key| data.text(key))
            .collect::<Vec<_>>()
            .join(separator),
    }
}

fn compose_metadata(fields: &[MetadataField], data: &EntryData) -> String {
    fields
        .iter()
        .filter_map(|field| {
            field
                .keys
                .iter()
                .find_map(|key| data.text(key))
                .map(|value| format!("{}: {}", field.label, value))
        })
        .collect::<Vec<_>>()
        .join(METADATA_SEPARATOR)
}

/// Every scalar field except the title, as `key: value`, sorted by key.
fn generic_metadata(data: &EntryData) -> String {
    let mut lines: Vec<(&String, String)> = data
        .fields()
        .iter()
        .filter(|(key, _)| key.as_str() != GENERIC_TITLE_FIELD)
        .filter_map(|(key, value)| scalar_text(value).map(|text| (key, text)))
        .collect();
    lines.sort_by(|a, b| a.0.cmp(b.0));

    lines
        .into_iter()
        .map(|(key, text)| format!("{key}: {text}"))
        .collect::<Vec<_>>()
        .join(GENERIC_DELIMITER)
}
