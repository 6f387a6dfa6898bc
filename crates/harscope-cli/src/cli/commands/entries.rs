//! `harscope entries` – list matching entries.

use anyhow::Result;
use harscope_core::{list_entries, Capture, EntryFilter};

use crate::cli::output::{format_bytes, Output};

pub fn run_entries(
    capture: &Capture,
    filter: &EntryFilter,
    offset: usize,
    limit: usize,
    out: &Output,
) -> Result<()> {
    let page = list_entries(capture.entries(), filter, offset, limit);
    if out.json {
        return out.print_json(&page);
    }
    if page.entries.is_empty() {
        println!("No matching entries ({} total).", page.total);
        return Ok(());
    }
    println!(
        "{:<5} {:<7} {:<6} {:>10} {:>10} {:>10} {}",
        "ID", "METHOD", "STATUS", "START", "TIME", "SIZE", "URL"
    );
    for e in &page.entries {
        println!(
            "{:<5} {:<7} {:<6} {:>10.1} {:>10.1} {:>10} {}",
            e.id,
            e.method,
            e.status,
            e.started_ms,
            e.time,
            format_bytes(e.size),
            e.url
        );
    }
    let shown = page.entries.len();
    if shown < page.total {
        println!("({} of {} shown, offset {})", shown, page.total, offset);
    }
    Ok(())
}
