//! The currently loaded capture.
//!
//! A store holds exactly one capture. Loading parses and normalizes the new
//! capture completely before swapping it in, so a failed load leaves the
//! previous capture active and readers always see one whole capture.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::error::CaptureError;
use crate::har::{load_capture_path, load_capture_slice, RawCaptureEntry};
use crate::normalize::{normalize, CanonicalEntry};

/// One loaded capture: its origin and its normalized entries.
#[derive(Debug, Default)]
pub struct Capture {
    /// File the capture came from, if it was loaded from disk.
    pub source: Option<PathBuf>,
    entries: Vec<CanonicalEntry>,
}

impl Capture {
    pub fn from_raw(source: Option<PathBuf>, raw: Vec<RawCaptureEntry>) -> Self {
        Self {
            source,
            entries: normalize(raw),
        }
    }

    pub fn entries(&self) -> &[CanonicalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by id; ids outside `[0, len)` are `EntryNotFound`.
    pub fn entry(&self, id: usize) -> Result<&CanonicalEntry, CaptureError> {
        self.entries.get(id).ok_or(CaptureError::EntryNotFound {
            id,
            count: self.entries.len(),
        })
    }
}

/// Holder of the active capture, shared by reference across readers.
#[derive(Debug, Default)]
pub struct CaptureStore {
    current: RwLock<Arc<Capture>>,
}

impl CaptureStore {
    /// Store with an empty capture loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active capture. Holding the returned `Arc` keeps it alive across a concurrent replace.
    pub fn snapshot(&self) -> Arc<Capture> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Makes `capture` the active capture and returns it.
    pub fn replace(&self, capture: Capture) -> Arc<Capture> {
        let capture = Arc::new(capture);
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = Arc::clone(&capture);
        capture
    }

    /// Loads and normalizes the capture at `path`, then makes it active.
    pub fn load_path(&self, path: &Path) -> Result<Arc<Capture>, CaptureError> {
        let raw = load_capture_path(path).map_err(log_failed_load)?;
        let capture = self.replace(Capture::from_raw(Some(path.to_path_buf()), raw));
        tracing::info!(
            "loaded capture {} ({} entries)",
            path.display(),
            capture.len()
        );
        Ok(capture)
    }

    /// Like [`load_path`](Self::load_path) for an in-memory capture.
    pub fn load_slice(&self, bytes: &[u8]) -> Result<Arc<Capture>, CaptureError> {
        let raw = load_capture_slice(bytes).map_err(log_failed_load)?;
        let capture = self.replace(Capture::from_raw(None, raw));
        tracing::info!("loaded in-memory capture ({} entries)", capture.len());
        Ok(capture)
    }
}

fn log_failed_load(err: CaptureError) -> CaptureError {
    tracing::warn!("capture load failed, keeping previous capture: {}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO: &[u8] = br#"{"log":{"entries":[
        {"request":{"url":"https://a.test/"}},
        {"request":{"url":"https://a.test/b"}}
    ]}}"#;
    const ONE: &[u8] = br#"{"log":{"entries":[{"request":{"url":"https://c.test/"}}]}}"#;

    #[test]
    fn starts_empty() {
        let store = CaptureStore::new();
        let snap = store.snapshot();
        assert!(snap.is_empty());
        assert!(snap.source.is_none());
    }

    #[test]
    fn load_replaces_wholesale() {
        let store = CaptureStore::new();
        store.load_slice(TWO).unwrap();
        assert_eq!(store.snapshot().len(), 2);
        store.load_slice(ONE).unwrap();
        let snap = store.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap.entries()[0].url, "https://c.test/");
    }

    #[test]
    fn failed_load_keeps_previous() {
        let store = CaptureStore::new();
        store.load_slice(TWO).unwrap();
        assert!(matches!(
            store.load_slice(b"{ nope"),
            Err(CaptureError::Parse(_))
        ));
        assert_eq!(store.snapshot().len(), 2);

        let dir = tempfile::tempdir().unwrap();
        assert!(store.load_path(&dir.path().join("missing.har")).is_err());
        assert_eq!(store.snapshot().len(), 2);
    }

    #[test]
    fn old_snapshot_survives_replace() {
        let store = CaptureStore::new();
        let old = store.load_slice(TWO).unwrap();
        store.load_slice(ONE).unwrap();
        assert_eq!(old.len(), 2);
        assert_eq!(store.snapshot().len(), 1);
    }

    #[test]
    fn entry_lookup_bounds() {
        let store = CaptureStore::new();
        let snap = store.load_slice(TWO).unwrap();
        assert_eq!(snap.entry(1).unwrap().id, 1);
        match snap.entry(2) {
            Err(CaptureError::EntryNotFound { id, count }) => {
                assert_eq!((id, count), (2, 2));
            }
            other => panic!("expected EntryNotFound, got {other:?}"),
        }
    }

    #[test]
    fn load_path_records_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cap.har");
        std::fs::write(&path, ONE).unwrap();
        let store = CaptureStore::new();
        let snap = store.load_path(&path).unwrap();
        assert_eq!(snap.source.as_deref(), Some(path.as_path()));
    }

    #[tokio::test]
    async fn concurrent_readers_see_whole_captures() {
        let store = Arc::new(CaptureStore::new());
        store.load_slice(TWO).unwrap();

        let mut readers = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            readers.push(tokio::task::spawn_blocking(move || {
                for _ in 0..200 {
                    let snap = store.snapshot();
                    let urls: Vec<_> = snap.entries().iter().map(|e| e.url.as_str()).collect();
                    assert!(
                        urls == ["https://a.test/", "https://a.test/b"]
                            || urls == ["https://c.test/"],
                        "mixed capture: {urls:?}"
                    );
                }
            }));
        }
        let writer = {
            let store = Arc::clone(&store);
            tokio::task::spawn_blocking(move || {
                for i in 0..100 {
                    let bytes = if i % 2 == 0 { ONE } else { TWO };
                    store.load_slice(bytes).unwrap();
                }
            })
        };

        writer.await.unwrap();
        for r in readers {
            r.await.unwrap();
        }
    }
}
