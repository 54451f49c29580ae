//! Response decoder.
//!
//! Turns a raw search response into a [`ResultSet`]. Only two conditions
//! fail the whole response: a payload that is not JSON, and a payload
//! without a top-level `results` array. Every other problem is contained at
//! the element: an element without a usable `header.indexId` is skipped and
//! recorded, and optional fields of any shape are tolerated.

mod error;
mod fields;

pub use error::{ResponseError, SkipReason, SkippedEntry};

use serde_json::{Map, Value};

use crate::ids::IndexId;
use crate::results::{EntryData, EntryHeader, ResultEntry, ResultSet, Similarity};

/// Decode a raw payload.
pub fn decode_results(raw: &[u8]) -> Result<ResultSet, ResponseError> {
    let payload: Value = serde_json::from_slice(raw)
        .map_err(|e| ResponseError::malformed(format!("payload is not valid JSON: {e}")))?;
    decode_value(&payload)
}

/// Decode a payload already held as text.
pub fn decode_results_str(raw: &str) -> Result<ResultSet, ResponseError> {
    decode_results(raw.as_bytes())
}

/// Decode an already parsed payload.
pub fn decode_value(payload: &Value) -> Result<ResultSet, ResponseError> {
    let results = payload
        .get(fields::RESULTS)
        .ok_or_else(|| ResponseError::malformed("missing top-level `results` array"))?
        .as_array()
        .ok_or_else(|| ResponseError::malformed("top-level `results` is not an array"))?;

    let mut entries = Vec::with_capacity(results.len());
    let mut skipped = Vec::new();

    for (position, element) in results.iter().enumerate() {
        match decode_entry(element) {
            Ok(entry) => entries.push(entry),
            Err(reason) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(position, %reason, "skipping undecodable result element");
                skipped.push(SkippedEntry { position, reason });
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        decoded = entries.len(),
        skipped = skipped.len(),
        "decoded search response"
    );

    Ok(ResultSet::new(entries, skipped))
}

fn decode_entry(element: &Value) -> Result<ResultEntry, SkipReason> {
    let element = element.as_object().ok_or(SkipReason::NotAnObject)?;
    let header = element
        .get(fields::HEADER)
        .and_then(Value::as_object)
        .ok_or(SkipReason::MissingHeader)?;

    let header = decode_header(header)?;
    let data = element
        .get(fields::DATA)
        .and_then(Value::as_object)
        .map(decode_data)
        .unwrap_or_default();

    Ok(ResultEntry::new(header, data))
}

fn decode_header(header: &Map<String, Value>) -> Result<EntryHeader, SkipReason> {
    let raw_index = fields::lookup(header, fields::INDEX_ID).ok_or(SkipReason::MissingIndexId)?;
    let index_id = parse_index_id(raw_index)?;

    let thumbnail_url = fields::lookup(header, fields::THUMBNAIL_URL)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string);

    Ok(EntryHeader {
        index_id,
        similarity: Similarity::from_value(fields::lookup(header, fields::SIMILARITY)),
        thumbnail_url,
    })
}

/// Integers, integral floats (`5.0`) and their string forms are accepted.
fn parse_index_id(value: &Value) -> Result<IndexId, SkipReason> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    };
    parsed
        .map(IndexId::new)
        .ok_or_else(|| SkipReason::InvalidIndexId(value.to_string()))
}

fn integral(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then(|| value as i64)
}

fn decode_data(data: &Map<String, Value>) -> EntryData {
    let mut fields = data.clone();
    let mut external_urls = Vec::new();

    for key in fields::EXTERNAL_URLS {
        if let Some(urls) = fields.remove(*key) {
            if external_urls.is_empty() {
                external_urls = collect_urls(&urls);
            }
        }
    }

    EntryData::new(external_urls, fields)
}

/// Accepts an array of strings or a single string; blank and non-string
/// items are dropped.
fn collect_urls(value: &Value) -> Vec<String> {
    let as_url = |v: &Value| {
        v.as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    match value {
        Value::Array(items) => items.iter().filter_map(as_url).collect(),
        other => as_url(other).into_iter().collect(),
    }
}
