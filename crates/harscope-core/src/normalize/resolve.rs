//! Ordered fallback chains for fields the capture may record in several places.
//!
//! Each chain is a list of sources tried in order; the first one that yields
//! a value wins.

use serde_json::Value;

use crate::classify::infer_resource_type;
use crate::har::{field_f64, RawCaptureEntry};

type Source<T> = fn(&RawCaptureEntry) -> Option<T>;

fn first_match<T>(raw: &RawCaptureEntry, sources: &[Source<T>]) -> Option<T> {
    sources.iter().find_map(|source| source(raw))
}

const SIZE_SOURCES: [Source<u64>; 2] = [content_size, body_size];

/// Response size in bytes: `content.size`, then `bodySize`, then 0.
pub(crate) fn resolve_size(raw: &RawCaptureEntry) -> u64 {
    first_match(raw, &SIZE_SOURCES).unwrap_or(0)
}

fn content_size(raw: &RawCaptureEntry) -> Option<u64> {
    field_f64(raw.content(), "size").and_then(byte_count)
}

fn body_size(raw: &RawCaptureEntry) -> Option<u64> {
    field_f64(raw.response(), "bodySize").and_then(byte_count)
}

/// HAR uses -1 for "unknown"; treat any negative size as absent.
fn byte_count(n: f64) -> Option<u64> {
    (n >= 0.0).then(|| n as u64)
}

const RESOURCE_TYPE_HINTS: [Source<String>; 2] = [hint_resource_type, hint_type];

/// First recorded `_resourceType` / `_type` hint, else classification of `mime`.
///
/// The first non-null hint decides: an empty or non-string `_resourceType`
/// goes to MIME classification without consulting `_type`.
pub(crate) fn resolve_resource_type(raw: &RawCaptureEntry, mime: &str) -> String {
    first_match(raw, &RESOURCE_TYPE_HINTS)
        .filter(|hint| !hint.is_empty())
        .unwrap_or_else(|| infer_resource_type(mime).to_string())
}

fn hint_resource_type(raw: &RawCaptureEntry) -> Option<String> {
    recorded_hint(raw, "_resourceType")
}

fn hint_type(raw: &RawCaptureEntry) -> Option<String> {
    recorded_hint(raw, "_type")
}

/// `Some` whenever the key holds a non-null value; non-strings read as "".
fn recorded_hint(raw: &RawCaptureEntry, key: &str) -> Option<String> {
    raw.get(key)
        .filter(|v| !v.is_null())
        .map(|v| v.as_str().unwrap_or_default().to_string())
}

const PRIORITY_SOURCES: [Source<String>; 2] = [entry_priority, request_priority];

/// `_priority` on the entry, then on the request.
pub(crate) fn resolve_priority(raw: &RawCaptureEntry) -> Option<String> {
    first_match(raw, &PRIORITY_SOURCES)
}

fn entry_priority(raw: &RawCaptureEntry) -> Option<String> {
    raw.get("_priority").and_then(scalar_string)
}

fn request_priority(raw: &RawCaptureEntry) -> Option<String> {
    raw.request()
        .and_then(|r| r.get("_priority"))
        .and_then(scalar_string)
}

fn scalar_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => non_empty(Some(s)),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(v: Value) -> RawCaptureEntry {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn size_prefers_content_then_body() {
        let both = raw(json!({"response": {"bodySize": 300, "content": {"size": 500}}}));
        assert_eq!(resolve_size(&both), 500);
        let body_only = raw(json!({"response": {"bodySize": 300, "content": {}}}));
        assert_eq!(resolve_size(&body_only), 300);
        let neither = raw(json!({"response": {"content": {}}}));
        assert_eq!(resolve_size(&neither), 0);
        assert_eq!(resolve_size(&raw(json!({}))), 0);
    }

    #[test]
    fn size_unknown_sentinel_falls_through() {
        let e = raw(json!({"response": {"bodySize": 120, "content": {"size": -1}}}));
        assert_eq!(resolve_size(&e), 120);
        let e = raw(json!({"response": {"bodySize": -1, "content": {"size": "abc"}}}));
        assert_eq!(resolve_size(&e), 0);
    }

    #[test]
    fn resource_type_hints_then_mime() {
        let e = raw(json!({"_resourceType": "fetch", "_type": "xhr"}));
        assert_eq!(resolve_resource_type(&e, "text/html"), "fetch");
        let e = raw(json!({"_resourceType": null, "_type": "ping"}));
        assert_eq!(resolve_resource_type(&e, "text/html"), "ping");
        let e = raw(json!({}));
        assert_eq!(resolve_resource_type(&e, "text/html"), "document");
    }

    #[test]
    fn empty_resource_type_hint_goes_to_mime() {
        let e = raw(json!({"_resourceType": "", "_type": "ping"}));
        assert_eq!(resolve_resource_type(&e, "text/html"), "document");
        let e = raw(json!({"_resourceType": 7, "_type": "ping"}));
        assert_eq!(resolve_resource_type(&e, "image/gif"), "image");
        let e = raw(json!({"_type": ""}));
        assert_eq!(resolve_resource_type(&e, ""), "other");
    }

    #[test]
    fn priority_entry_then_request() {
        let e = raw(json!({"_priority": "High", "request": {"_priority": "Low"}}));
        assert_eq!(resolve_priority(&e).as_deref(), Some("High"));
        let e = raw(json!({"request": {"_priority": "Low"}}));
        assert_eq!(resolve_priority(&e).as_deref(), Some("Low"));
        assert_eq!(resolve_priority(&raw(json!({}))), None);
    }
}
