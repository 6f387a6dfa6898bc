//! `harscope stats` – aggregate counts.

use anyhow::Result;
use harscope_core::group::GroupMap;
use harscope_core::{build_stats, Capture};

use crate::cli::output::{format_bytes, Output};

pub fn run_stats(capture: &Capture, out: &Output) -> Result<()> {
    let stats = build_stats(capture.entries());
    if out.json {
        return out.print_json(&stats);
    }
    println!("Entries:    {}", stats.count);
    println!("Total size: {}", format_bytes(stats.total_size));
    println!("Total time: {:.1} ms", stats.total_time);
    print_group("Status", &stats.by_status);
    print_group("MIME type", &stats.by_mime_type);
    print_group("Domain", &stats.by_domain);
    print_group("Resource type", &stats.by_resource_type);
    Ok(())
}

fn print_group(title: &str, group: &GroupMap<u64>) {
    println!();
    println!("{title}:");
    for (key, count) in group.iter() {
        println!("  {:<40} {}", key, count);
    }
}
