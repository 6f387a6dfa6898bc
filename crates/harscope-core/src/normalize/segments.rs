//! Per-phase timing segments.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::har::value_f64;

/// HAR timing phases, in waterfall order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Blocked,
    Dns,
    Connect,
    Ssl,
    Send,
    Wait,
    Receive,
}

impl Phase {
    pub const ALL: [Phase; 7] = [
        Phase::Blocked,
        Phase::Dns,
        Phase::Connect,
        Phase::Ssl,
        Phase::Send,
        Phase::Wait,
        Phase::Receive,
    ];

    /// Key used in HAR `timings` and in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Blocked => "blocked",
            Phase::Dns => "dns",
            Phase::Connect => "connect",
            Phase::Ssl => "ssl",
            Phase::Send => "send",
            Phase::Wait => "wait",
            Phase::Receive => "receive",
        }
    }
}

/// Milliseconds spent in each phase, as recorded (`-1` read as 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TimingSegments {
    pub blocked: f64,
    pub dns: f64,
    pub connect: f64,
    pub ssl: f64,
    pub send: f64,
    pub wait: f64,
    pub receive: f64,
}

impl TimingSegments {
    /// Reads HAR `timings`. `-1` (not applicable), missing and non-numeric values become 0.
    pub fn from_timings(timings: Option<&Map<String, Value>>) -> Self {
        let mut segs = Self::default();
        if let Some(t) = timings {
            for phase in Phase::ALL {
                *segs.get_mut(phase) = t.get(phase.as_str()).map_or(0.0, phase_value);
            }
        }
        segs
    }

    pub fn get(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Blocked => self.blocked,
            Phase::Dns => self.dns,
            Phase::Connect => self.connect,
            Phase::Ssl => self.ssl,
            Phase::Send => self.send,
            Phase::Wait => self.wait,
            Phase::Receive => self.receive,
        }
    }

    pub fn get_mut(&mut self, phase: Phase) -> &mut f64 {
        match phase {
            Phase::Blocked => &mut self.blocked,
            Phase::Dns => &mut self.dns,
            Phase::Connect => &mut self.connect,
            Phase::Ssl => &mut self.ssl,
            Phase::Send => &mut self.send,
            Phase::Wait => &mut self.wait,
            Phase::Receive => &mut self.receive,
        }
    }

    /// Adds `other` phase by phase.
    pub fn accumulate(&mut self, other: &TimingSegments) {
        for phase in Phase::ALL {
            *self.get_mut(phase) += other.get(phase);
        }
    }

    pub fn sum(&self) -> f64 {
        Phase::ALL.iter().map(|&p| self.get(p)).sum()
    }
}

/// `-1` is the HAR "not applicable" sentinel; any other number is kept as is.
fn phase_value(v: &Value) -> f64 {
    match value_f64(v) {
        Some(n) if n != -1.0 => n,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sentinel_and_garbage_become_zero() {
        let t = json!({
            "blocked": -1, "dns": 12.5, "connect": "3", "ssl": "n/a",
            "send": null, "wait": 40
        });
        let segs = TimingSegments::from_timings(t.as_object());
        assert_eq!(segs.blocked, 0.0);
        assert_eq!(segs.dns, 12.5);
        assert_eq!(segs.connect, 3.0);
        assert_eq!(segs.ssl, 0.0);
        assert_eq!(segs.send, 0.0);
        assert_eq!(segs.wait, 40.0);
        assert_eq!(segs.receive, 0.0);
        assert_eq!(segs.sum(), 55.5);
    }

    #[test]
    fn only_the_sentinel_is_zeroed() {
        let t = json!({"blocked": -1, "dns": -3.5, "connect": "-1", "wait": 10});
        let segs = TimingSegments::from_timings(t.as_object());
        assert_eq!(segs.blocked, 0.0);
        assert_eq!(segs.dns, -3.5);
        assert_eq!(segs.connect, 0.0);
        assert_eq!(segs.wait, 10.0);
        assert_eq!(segs.sum(), 6.5);
    }

    #[test]
    fn missing_timings_is_all_zero() {
        assert_eq!(TimingSegments::from_timings(None), TimingSegments::default());
    }

    #[test]
    fn serializes_with_phase_names() {
        let segs = TimingSegments {
            wait: 1.0,
            ..TimingSegments::default()
        };
        let v = serde_json::to_value(segs).unwrap();
        let keys: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
        for phase in Phase::ALL {
            assert!(keys.iter().any(|k| k == phase.as_str()));
        }
        assert_eq!(v["wait"], json!(1.0));
    }
}
