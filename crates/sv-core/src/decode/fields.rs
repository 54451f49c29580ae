//! Wire names of the payload fields.
//!
//! The first name of each list is the canonical camelCase name; the others
//! are the snake_case names used by the upstream search service.

use serde_json::{Map, Value};

pub(super) const RESULTS: &str = "results";
pub(super) const HEADER: &str = "header";
pub(super) const DATA: &str = "data";

pub(super) const INDEX_ID: &[&str] = &["indexId", "index_id"];
pub(super) const SIMILARITY: &[&str] = &["similarity"];
pub(super) const THUMBNAIL_URL: &[&str] = &["thumbnailUrl", "thumbnail_url", "thumbnail"];
pub(super) const EXTERNAL_URLS: &[&str] = &["externalUrls", "external_urls", "ext_urls"];

/// First non-null value stored under any of `names`.
pub(super) fn lookup<'a>(object: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| object.get(*name))
        .find(|value| !value.is_null())
}
