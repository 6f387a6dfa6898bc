//! Lenient HAR 1.2 structures.
//!
//! Only the envelope (`log.entries`) is typed. Each entry stays a raw JSON
//! object so that detail views can show every field the browser recorded,
//! and so that a single odd field never rejects the whole capture.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root HAR document (top-level wrapper).
#[derive(Debug, Default, Deserialize)]
pub struct HarDocument {
    #[serde(default)]
    pub log: HarLog,
}

#[derive(Debug, Default, Deserialize)]
pub struct HarLog {
    /// `null` and a missing key both mean "no entries".
    #[serde(default)]
    pub entries: Option<Vec<RawCaptureEntry>>,
}

/// One `log.entries[]` record exactly as it appeared in the capture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawCaptureEntry(Map<String, Value>);

impl RawCaptureEntry {
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn request(&self) -> Option<&Map<String, Value>> {
        self.object("request")
    }

    pub fn response(&self) -> Option<&Map<String, Value>> {
        self.object("response")
    }

    pub fn timings(&self) -> Option<&Map<String, Value>> {
        self.object("timings")
    }

    /// `response.content`, if present and an object.
    pub fn content(&self) -> Option<&Map<String, Value>> {
        self.response()
            .and_then(|r| r.get("content"))
            .and_then(Value::as_object)
    }

    fn object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }
}

/// String field, or `None` when missing or not a string.
pub(crate) fn field_str<'a>(map: Option<&'a Map<String, Value>>, key: &str) -> Option<&'a str> {
    map?.get(key)?.as_str()
}

/// Numeric field; numeric strings are accepted. Non-finite values are rejected.
pub(crate) fn field_f64(map: Option<&Map<String, Value>>, key: &str) -> Option<f64> {
    map.and_then(|m| m.get(key)).and_then(value_f64)
}

pub(crate) fn value_f64(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Integer field; floats are truncated, numeric strings accepted.
pub(crate) fn field_i64(map: Option<&Map<String, Value>>, key: &str) -> Option<i64> {
    let value = map?.get(key)?;
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn numeric_coercion() {
        let m = map(json!({"a": 1.5, "b": "2.25", "c": "x", "d": null, "e": true, "f": 7}));
        assert_eq!(field_f64(Some(&m), "a"), Some(1.5));
        assert_eq!(field_f64(Some(&m), "b"), Some(2.25));
        assert_eq!(field_f64(Some(&m), "c"), None);
        assert_eq!(field_f64(Some(&m), "d"), None);
        assert_eq!(field_f64(Some(&m), "e"), None);
        assert_eq!(field_f64(Some(&m), "missing"), None);
        assert_eq!(field_f64(None, "a"), None);
        assert_eq!(field_i64(Some(&m), "f"), Some(7));
        assert_eq!(field_i64(Some(&m), "a"), Some(1));
    }

    #[test]
    fn nested_accessors() {
        let entry = RawCaptureEntry::from_map(map(json!({
            "request": {"url": "https://a.test/"},
            "response": {"content": {"mimeType": "text/html"}},
            "timings": "not an object"
        })));
        assert_eq!(field_str(entry.request(), "url"), Some("https://a.test/"));
        assert_eq!(field_str(entry.content(), "mimeType"), Some("text/html"));
        assert!(entry.timings().is_none());
    }
}
