//! Capture-wide totals and group-by counts.

use serde::Serialize;

use crate::group::GroupMap;
use crate::normalize::CanonicalEntry;

const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub count: usize,
    pub total_size: u64,
    pub total_time: f64,
    pub by_status: GroupMap<u64>,
    pub by_mime_type: GroupMap<u64>,
    pub by_domain: GroupMap<u64>,
    pub by_resource_type: GroupMap<u64>,
}

/// Counts, size and time totals, and breakdowns by status, MIME type, host and resource type.
///
/// Entries without a host are left out of `by_domain`; empty MIME and
/// resource types are counted as "unknown".
pub fn build_stats(entries: &[CanonicalEntry]) -> StatsSummary {
    let mut stats = StatsSummary {
        count: entries.len(),
        total_size: 0,
        total_time: 0.0,
        by_status: GroupMap::new(),
        by_mime_type: GroupMap::new(),
        by_domain: GroupMap::new(),
        by_resource_type: GroupMap::new(),
    };

    for e in entries {
        stats.total_size = stats.total_size.saturating_add(e.size);
        stats.total_time += e.time;
        stats.by_status.bump(&e.status.to_string());
        stats.by_mime_type.bump(or_unknown(&e.mime_type));
        if !e.host.is_empty() {
            stats.by_domain.bump(&e.host);
        }
        stats.by_resource_type.bump(or_unknown(&e.resource_type));
    }

    tracing::debug!(
        "stats over {} entries: {} domains, {} statuses",
        stats.count,
        stats.by_domain.len(),
        stats.by_status.len()
    );
    stats
}

fn or_unknown(s: &str) -> &str {
    if s.is_empty() {
        UNKNOWN
    } else {
        s
    }
}
