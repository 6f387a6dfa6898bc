use serde::Serialize;

use crate::normalize::{CanonicalEntry, TimingSegments};

/// List-row projection of an entry: identity, timing and size, no bodies or headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySummary {
    pub id: usize,
    pub url: String,
    pub host: String,
    pub path: String,
    pub method: String,
    pub status: i64,
    pub status_text: String,
    pub mime_type: String,
    pub time: f64,
    pub size: u64,
    pub started_ms: f64,
    pub timing_segments: TimingSegments,
}

pub fn summary(entry: &CanonicalEntry) -> EntrySummary {
    EntrySummary {
        id: entry.id,
        url: entry.url.clone(),
        host: entry.host.clone(),
        path: entry.path.clone(),
        method: entry.method.clone(),
        status: entry.status,
        status_text: entry.status_text.clone(),
        mime_type: entry.mime_type.clone(),
        time: entry.time,
        size: entry.size,
        started_ms: entry.started_ms,
        timing_segments: entry.timing_segments,
    }
}
