pub mod config;
pub mod error;
pub mod logging;

// Capture pipeline: load -> normalize -> derived views.
pub mod classify;
pub mod filter;
pub mod graph;
pub mod group;
pub mod har;
pub mod normalize;
pub mod phases;
pub mod stats;
pub mod store;
pub mod timestamp;
pub mod url_model;
pub mod view;

pub use classify::infer_resource_type;
pub use error::CaptureError;
pub use filter::{list_entries, EntryFilter, EntryPage};
pub use graph::{build_event_graph, EventGraph};
pub use har::{load_capture_path, load_capture_slice, Initiator, RawCaptureEntry};
pub use normalize::{normalize, CanonicalEntry, Phase, TimingSegments};
pub use phases::{build_phase_stats, PhaseStats};
pub use stats::{build_stats, StatsSummary};
pub use store::{Capture, CaptureStore};
pub use view::{body_download, body_preview, detail, summary};
