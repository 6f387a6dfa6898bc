//! `harscope show <id>` – full entry detail.

use anyhow::Result;
use harscope_core::{detail, Capture};

use crate::cli::output::Output;

/// Detail is nested raw capture data, so it is always printed as JSON.
pub fn run_show(capture: &Capture, id: usize, out: &Output) -> Result<()> {
    let entry = capture.entry(id)?;
    out.print_json(&detail(entry))
}
