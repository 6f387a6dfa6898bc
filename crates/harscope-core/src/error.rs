//! Errors surfaced to callers of the capture pipeline.
//!
//! Malformed scalar fields inside an entry never produce an error; they are
//! normalized to zero/empty values. Only whole-capture failures and bad entry
//! lookups reach the caller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    /// The capture file could not be read from disk.
    #[error("read capture file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bytes are not a `{ log: { entries: [...] } }` JSON document.
    #[error("parse capture JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// No configured sample capture exists on disk.
    #[error("no sample capture found (checked {checked} configured paths)")]
    NoSample { checked: usize },

    /// Entry id outside `[0, count)` for the active capture.
    #[error("entry {id} not found (capture has {count} entries)")]
    EntryNotFound { id: usize, count: usize },
}
