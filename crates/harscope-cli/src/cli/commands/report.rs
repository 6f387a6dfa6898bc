//! `harscope report` – stats, graph and phase totals together.

use anyhow::Result;
use harscope_core::{
    build_event_graph, build_phase_stats, build_stats, Capture, EventGraph, PhaseStats,
    StatsSummary,
};
use serde::Serialize;
use std::sync::Arc;

use crate::cli::output::{format_bytes, Output};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    stats: StatsSummary,
    event_graph: EventGraph,
    phase_stats: PhaseStats,
}

/// Derives the three views concurrently over one capture snapshot.
pub async fn run_report(capture: Arc<Capture>, out: &Output) -> Result<()> {
    let stats = {
        let c = Arc::clone(&capture);
        tokio::task::spawn_blocking(move || build_stats(c.entries()))
    };
    let graph = {
        let c = Arc::clone(&capture);
        tokio::task::spawn_blocking(move || build_event_graph(c.entries()))
    };
    let phases = {
        let c = Arc::clone(&capture);
        tokio::task::spawn_blocking(move || build_phase_stats(c.entries()))
    };
    let (stats, event_graph, phase_stats) = tokio::try_join!(stats, graph, phases)?;

    if out.json {
        return out.print_json(&Report {
            stats,
            event_graph,
            phase_stats,
        });
    }

    if let Some(src) = &capture.source {
        println!("Capture:  {}", src.display());
    }
    println!(
        "Entries:  {} ({}, {:.1} ms)",
        stats.count,
        format_bytes(stats.total_size),
        stats.total_time
    );
    println!(
        "Graph:    {} nodes, {} edges",
        event_graph.nodes.len(),
        event_graph.edges.len()
    );
    println!(
        "Phases:   {:.1} ms total across {} resource types",
        phase_stats.total.sum(),
        phase_stats.by_type.len()
    );
    Ok(())
}
