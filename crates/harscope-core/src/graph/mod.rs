//! Request relation graph: which entry most likely triggered which.
//!
//! Heuristic and best-effort. Each entry gets at most one inbound edge, from
//! the first rule that matches (see [`rules`]). The builder is a single
//! linear pass, so initiator cycles in the capture are harmless.

mod rules;

use std::collections::HashMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::normalize::CanonicalEntry;

/// Why an edge was inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeReason {
    /// The entry's initiator URL matched another entry's URL.
    Initiator,
    /// Fallback: first document loaded from the same host.
    Document,
}

impl EdgeReason {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeReason::Initiator => "initiator",
            EdgeReason::Document => "document",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub reason: EdgeReason,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: usize,
    pub url: String,
    pub host: String,
    pub path: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub method: String,
    pub status: i64,
    pub size: u64,
    /// Start offset (ms).
    pub start: f64,
    /// `start + time` (ms).
    pub end: f64,
}

impl Node {
    fn from_entry(e: &CanonicalEntry) -> Self {
        Self {
            id: e.id,
            url: e.url.clone(),
            host: e.host.clone(),
            path: e.path.clone(),
            resource_type: e.resource_type.clone(),
            method: e.method.clone(),
            status: e.status,
            size: e.size,
            start: e.started_ms,
            end: e.end_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Builds nodes for every entry and infers at most one inbound edge per entry.
pub fn build_event_graph(entries: &[CanonicalEntry]) -> EventGraph {
    let lookup = rules::Lookup::build(entries);

    let nodes: Vec<Node> = entries.iter().map(Node::from_entry).collect();
    let edges: Vec<Edge> = entries
        .iter()
        .filter_map(|e| rules::infer_edge(&lookup, e))
        .collect();

    tracing::debug!(
        "event graph: {} nodes, {} edges",
        nodes.len(),
        edges.len()
    );
    EventGraph { nodes, edges }
}

impl EventGraph {
    /// Number of edges touching each node id (in + out).
    pub fn degrees(&self) -> HashMap<usize, usize> {
        let mut deg = HashMap::new();
        for e in &self.edges {
            *deg.entry(e.source).or_insert(0) += 1;
            *deg.entry(e.target).or_insert(0) += 1;
        }
        deg
    }

    /// Plain-text listing: nodes with degree (isolated nodes marked), then edges.
    ///
    /// At most `max_nodes` nodes and `max_edges` edges are listed; the rest are
    /// summarized in a trailing line.
    pub fn render_text(&self, max_nodes: usize, max_edges: usize) -> String {
        let deg = self.degrees();
        let mut out = String::new();

        let _ = writeln!(out, "Nodes ({})", self.nodes.len());
        for n in self.nodes.iter().take(max_nodes) {
            let d = deg.get(&n.id).copied().unwrap_or(0);
            let iso = if d == 0 { " iso" } else { "" };
            let _ = writeln!(
                out,
                "- [{}] {} {} host={} deg={}{}",
                n.id, n.resource_type, n.status, n.host, d, iso
            );
        }
        if self.nodes.len() > max_nodes {
            let _ = writeln!(out, "... {} more nodes", self.nodes.len() - max_nodes);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Edges ({})", self.edges.len());
        for e in self.edges.iter().take(max_edges) {
            let _ = writeln!(out, "- {} -> {} [{}]", e.source, e.target, e.reason.as_str());
        }
        if self.edges.len() > max_edges {
            let _ = writeln!(out, "... {} more edges", self.edges.len() - max_edges);
        }
        out
    }
}
