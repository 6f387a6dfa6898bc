//! Entry normalization: raw capture records -> canonical entries.
//!
//! One canonical entry per raw entry, same order, `id` = position. Missing or
//! malformed scalars degrade to 0 / empty string; nothing here fails.

mod resolve;
mod segments;
mod timeline;

use serde_json::Value;

use crate::har::{field_i64, field_str, value_f64, Initiator, RawCaptureEntry};
use crate::url_model::split_url;

pub use segments::{Phase, TimingSegments};

/// Normalized view of one captured request/response.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalEntry {
    /// Position in the capture, `0..N`.
    pub id: usize,
    pub url: String,
    pub host: String,
    pub path: String,
    pub method: String,
    pub status: i64,
    pub status_text: String,
    pub mime_type: String,
    /// Total duration in ms.
    pub time: f64,
    /// Response size in bytes.
    pub size: u64,
    /// Offset in ms from the capture's first timestamped entry.
    pub started_ms: f64,
    pub timing_segments: TimingSegments,
    pub resource_type: String,
    pub priority: Option<String>,
    /// `_initiator` exactly as recorded.
    pub initiator: Option<Value>,
    /// `_initiator` decoded for relation inference.
    pub initiator_ref: Initiator,
    pub raw: RawCaptureEntry,
}

impl CanonicalEntry {
    pub fn end_ms(&self) -> f64 {
        self.started_ms + self.time
    }
}

/// Normalizes a capture's raw entries.
pub fn normalize(raw: Vec<RawCaptureEntry>) -> Vec<CanonicalEntry> {
    let durations: Vec<f64> = raw.iter().map(duration_ms).collect();
    let starts = timeline::start_offsets(&raw, &durations);

    let entries: Vec<CanonicalEntry> = raw
        .into_iter()
        .zip(durations.into_iter().zip(starts))
        .enumerate()
        .map(|(id, (raw, (time, started_ms)))| canonical(id, raw, time, started_ms))
        .collect();

    tracing::debug!("normalized {} entries", entries.len());
    entries
}

fn canonical(id: usize, raw: RawCaptureEntry, time: f64, started_ms: f64) -> CanonicalEntry {
    let request = raw.request();
    let response = raw.response();

    let url = field_str(request, "url").unwrap_or_default().to_string();
    let mime_type = field_str(raw.content(), "mimeType")
        .unwrap_or_default()
        .to_string();
    let parts = split_url(&url);
    let initiator = raw.get("_initiator").filter(|v| !v.is_null()).cloned();

    CanonicalEntry {
        id,
        host: parts.host,
        path: parts.path,
        method: field_str(request, "method").unwrap_or_default().to_string(),
        status: field_i64(response, "status").unwrap_or(0),
        status_text: field_str(response, "statusText")
            .unwrap_or_default()
            .to_string(),
        time,
        size: resolve::resolve_size(&raw),
        started_ms,
        timing_segments: TimingSegments::from_timings(raw.timings()),
        resource_type: resolve::resolve_resource_type(&raw, &mime_type),
        priority: resolve::resolve_priority(&raw),
        initiator_ref: Initiator::decode(initiator.as_ref()),
        initiator,
        url,
        mime_type,
        raw,
    }
}

/// Top-level `time`; missing, non-numeric or negative values count as 0.
fn duration_ms(raw: &RawCaptureEntry) -> f64 {
    raw.get("time")
        .and_then(value_f64)
        .filter(|t| *t >= 0.0)
        .unwrap_or(0.0)
}
