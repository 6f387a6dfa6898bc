//! `harscope download <id>` – write the decoded body to disk.

use anyhow::{Context, Result};
use harscope_core::{body_download, Capture};
use std::path::{Path, PathBuf};

pub fn run_download(capture: &Capture, id: usize, dest: Option<&Path>) -> Result<()> {
    let body = body_download(capture.entry(id)?);
    let dest = dest
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&body.filename));
    std::fs::write(&dest, &body.data)
        .with_context(|| format!("write body to {}", dest.display()))?;
    tracing::info!("entry {}: wrote {} bytes to {}", id, body.data.len(), dest.display());
    println!(
        "Wrote {} bytes ({}) to {}",
        body.data.len(),
        body.mime_type,
        dest.display()
    );
    Ok(())
}
