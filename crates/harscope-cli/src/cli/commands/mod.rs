//! CLI command handlers, one file per command.

mod body;
mod download;
mod entries;
mod graph;
mod phases;
mod report;
mod show;
mod stats;

pub use body::run_body;
pub use download::run_download;
pub use entries::run_entries;
pub use graph::run_graph;
pub use phases::run_phases;
pub use report::run_report;
pub use show::run_show;
pub use stats::run_stats;
