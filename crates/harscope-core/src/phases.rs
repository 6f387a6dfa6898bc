//! Timing phase totals, overall and per resource type.

use anyhow::Result;
use serde::Serialize;

use crate::group::GroupMap;
use crate::normalize::{CanonicalEntry, Phase, TimingSegments};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseStats {
    /// Sum of each phase across all entries.
    pub total: TimingSegments,
    /// Same sums, keyed by resource type ("unknown" when empty).
    pub by_type: GroupMap<TimingSegments>,
}

pub fn build_phase_stats(entries: &[CanonicalEntry]) -> PhaseStats {
    let mut total = TimingSegments::default();
    let mut by_type = GroupMap::new();

    for e in entries {
        let rtype = if e.resource_type.is_empty() {
            "unknown"
        } else {
            e.resource_type.as_str()
        };
        total.accumulate(&e.timing_segments);
        by_type
            .entry_or_insert_with(rtype, TimingSegments::default)
            .accumulate(&e.timing_segments);
    }

    PhaseStats { total, by_type }
}

impl PhaseStats {
    /// CSV: a header, one row per resource type, then a `total` row.
    /// Values are rounded to whole ms.
    pub fn to_csv(&self) -> Result<String> {
        let mut wtr = csv::Writer::from_writer(Vec::new());

        let mut header = vec!["type"];
        header.extend(Phase::ALL.iter().map(|p| p.as_str()));
        header.push("total");
        wtr.write_record(&header)?;

        for (rtype, segs) in self.by_type.iter() {
            wtr.write_record(csv_row(rtype, segs))?;
        }
        wtr.write_record(csv_row("total", &self.total))?;

        let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }
}

fn csv_row(label: &str, segs: &TimingSegments) -> Vec<String> {
    let mut row = Vec::with_capacity(Phase::ALL.len() + 2);
    row.push(label.to_string());
    row.extend(Phase::ALL.iter().map(|&p| segs.get(p).round().to_string()));
    row.push(segs.sum().round().to_string());
    row
}
