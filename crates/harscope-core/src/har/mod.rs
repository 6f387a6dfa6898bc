//! HAR (HTTP Archive) loading: decode the capture envelope into raw entries.
//!
//! Only a structurally broken capture is an error (not JSON, not an object,
//! `log.entries` not an array of objects). Everything inside an entry is
//! left for the normalizer to interpret leniently.

mod initiator;
mod parse;

use std::path::Path;

use crate::error::CaptureError;

pub use initiator::Initiator;
pub use parse::RawCaptureEntry;
pub(crate) use parse::{field_f64, field_i64, field_str, value_f64};

use parse::HarDocument;

/// Decodes an in-memory capture into its raw entries, in capture order.
pub fn load_capture_slice(bytes: &[u8]) -> Result<Vec<RawCaptureEntry>, CaptureError> {
    let doc: HarDocument = serde_json::from_slice(bytes)?;
    Ok(doc.log.entries.unwrap_or_default())
}

/// Reads and decodes a capture file.
pub fn load_capture_path(path: &Path) -> Result<Vec<RawCaptureEntry>, CaptureError> {
    let bytes = std::fs::read(path).map_err(|source| CaptureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = load_capture_slice(&bytes)?;
    tracing::debug!(
        "decoded {} raw entries from {}",
        entries.len(),
        path.display()
    );
    Ok(entries)
}
