//! Entry search, filtering and paging for list views.

use serde::Serialize;

use crate::normalize::CanonicalEntry;
use crate::view::{summary, EntrySummary};

/// Criteria for selecting entries. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Case-insensitive substring of URL, status or MIME type.
    pub q: Option<String>,
    /// Exact host (including an explicit port).
    pub domain: Option<String>,
    /// Exact status code, as text.
    pub status: Option<String>,
    pub mime: Option<String>,
    pub method: Option<String>,
    pub resource_type: Option<String>,
    pub priority: Option<String>,
    pub status_min: Option<i64>,
    pub status_max: Option<i64>,
}

impl EntryFilter {
    pub fn matches(&self, e: &CanonicalEntry) -> bool {
        let status = e.status.to_string();
        if let Some(q) = non_empty(&self.q) {
            let q = q.to_lowercase();
            let hit = e.url.to_lowercase().contains(&q)
                || status.contains(&q)
                || e.mime_type.to_lowercase().contains(&q);
            if !hit {
                return false;
            }
        }
        eq_if_set(&self.domain, &e.host)
            && eq_if_set(&self.status, &status)
            && eq_if_set(&self.mime, &e.mime_type)
            && eq_if_set(&self.method, &e.method)
            && eq_if_set(&self.resource_type, &e.resource_type)
            && eq_if_set(&self.priority, e.priority.as_deref().unwrap_or_default())
            && self.status_min.map_or(true, |min| e.status >= min)
            && self.status_max.map_or(true, |max| e.status <= max)
    }
}

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

fn eq_if_set(want: &Option<String>, have: &str) -> bool {
    non_empty(want).map_or(true, |w| w == have)
}

/// One page of matching entries plus the total match count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryPage {
    pub total: usize,
    pub entries: Vec<EntrySummary>,
}

/// Filters `entries`, orders matches by start offset (stable), and returns
/// `limit` summaries starting at `offset`.
pub fn list_entries(
    entries: &[CanonicalEntry],
    filter: &EntryFilter,
    offset: usize,
    limit: usize,
) -> EntryPage {
    let mut matched: Vec<&CanonicalEntry> = entries.iter().filter(|e| filter.matches(e)).collect();
    matched.sort_by(|a, b| a.started_ms.total_cmp(&b.started_ms));

    EntryPage {
        total: matched.len(),
        entries: matched
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(summary)
            .collect(),
    }
}
