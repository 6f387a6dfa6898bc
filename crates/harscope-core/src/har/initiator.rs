//! `_initiator` decoding.
//!
//! Chrome writes the initiator either as an object with a `url`, as an object
//! with a script `stack`, or (in some exporters) as a bare URL string.

use serde_json::Value;

/// What triggered a request, reduced to the shapes the relation graph uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Initiator {
    /// No initiator recorded (missing, null, or an empty value).
    #[default]
    Absent,
    /// `{ "url": ... }` or a bare string.
    DirectUrl(String),
    /// `{ "stack": { "callFrames": [ { "url": ... }, ... ] } }`, first frame.
    StackFrame(String),
    /// Present, but none of the known shapes.
    Unrecognized,
}

impl Initiator {
    pub fn decode(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Initiator::Absent,
            Some(Value::String(s)) if s.is_empty() => Initiator::Absent,
            Some(Value::String(s)) => Initiator::DirectUrl(s.clone()),
            Some(Value::Object(o)) if o.is_empty() => Initiator::Absent,
            Some(Value::Array(a)) if a.is_empty() => Initiator::Absent,
            Some(Value::Object(o)) => {
                if let Some(url) = o.get("url").and_then(Value::as_str) {
                    return non_empty(url, Initiator::DirectUrl);
                }
                o.get("stack")
                    .and_then(|s| s.get("callFrames"))
                    .and_then(|f| f.get(0))
                    .and_then(|frame| frame.get("url"))
                    .and_then(Value::as_str)
                    .map(|url| non_empty(url, Initiator::StackFrame))
                    .unwrap_or(Initiator::Unrecognized)
            }
            Some(_) => Initiator::Unrecognized,
        }
    }

    /// URL of the initiating resource, if one was recorded.
    pub fn url(&self) -> Option<&str> {
        match self {
            Initiator::DirectUrl(u) | Initiator::StackFrame(u) => Some(u),
            Initiator::Absent | Initiator::Unrecognized => None,
        }
    }
}

fn non_empty(url: &str, wrap: fn(String) -> Initiator) -> Initiator {
    if url.is_empty() {
        Initiator::Unrecognized
    } else {
        wrap(url.to_string())
    }
}
