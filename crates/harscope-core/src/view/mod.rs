//! Per-entry projections for presentation: list summary, full detail, body.

mod body;
mod detail;
mod summary;

pub use body::{body_download, body_preview, BodyDownload, BodyPreview, PREVIEW_MAX_CHARS};
pub use detail::{detail, ContentDetail, EntryDetail, RequestDetail, ResponseDetail};
pub use summary::{summary, EntrySummary};
