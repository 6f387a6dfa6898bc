//! Start offsets relative to the first timestamped entry.

use crate::har::{field_str, RawCaptureEntry};
use crate::timestamp::{millis_since, parse_timestamp};

/// Start offset (ms) for each entry, in capture order.
///
/// Entries whose own timestamp parses are measured from the first entry that
/// has a parseable timestamp; negative offsets are kept. All others take the
/// running sum of the durations of the entries before them.
pub(crate) fn start_offsets(raw: &[RawCaptureEntry], durations: &[f64]) -> Vec<f64> {
    let instants: Vec<_> = raw
        .iter()
        .map(|e| field_str(Some(e.as_map()), "startedDateTime").and_then(parse_timestamp))
        .collect();
    let origin = instants.iter().flatten().next().copied();

    let mut rolling_ms = 0.0;
    instants
        .iter()
        .zip(durations)
        .map(|(instant, &time)| {
            let started = match (&origin, instant) {
                (Some(origin), Some(t)) => millis_since(origin, t),
                _ => rolling_ms,
            };
            rolling_ms += time;
            started
        })
        .collect()
}
