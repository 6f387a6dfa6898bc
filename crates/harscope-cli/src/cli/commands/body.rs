//! `harscope body <id>` – response body preview.

use anyhow::Result;
use harscope_core::{body_preview, Capture};

use crate::cli::output::{format_bytes, Output};

pub fn run_body(capture: &Capture, id: usize, out: &Output) -> Result<()> {
    let preview = body_preview(capture.entry(id)?);
    if out.json {
        return out.print_json(&preview);
    }

    eprintln!(
        "{} ({}{})",
        preview.mime_type,
        format_bytes(preview.size),
        if preview.truncated { ", truncated" } else { "" }
    );
    match (&preview.data_url, &preview.preview_text) {
        (Some(data_url), _) => println!("{data_url}"),
        (None, Some(text)) => println!("{text}"),
        (None, None) => eprintln!("(no body recorded)"),
    }
    Ok(())
}
