//! `harscope graph` – inferred relation graph.

use anyhow::Result;
use harscope_core::{build_event_graph, Capture};

use crate::cli::output::Output;

pub fn run_graph(
    capture: &Capture,
    text: bool,
    max_nodes: usize,
    max_edges: usize,
    out: &Output,
) -> Result<()> {
    let graph = build_event_graph(capture.entries());
    if text && !out.json {
        print!("{}", graph.render_text(max_nodes, max_edges));
        return Ok(());
    }
    out.print_json(&graph)
}
