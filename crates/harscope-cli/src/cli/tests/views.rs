//! Tests for per-entry and aggregate view subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_show_and_body() {
    match parse(&["harscope", "show", "3"]) {
        CliCommand::Show { id } => assert_eq!(id, 3),
        _ => panic!("expected Show"),
    }
    match parse(&["harscope", "body", "0"]) {
        CliCommand::Body { id } => assert_eq!(id, 0),
        _ => panic!("expected Body"),
    }
    assert!(Cli::try_parse_from(["harscope", "show", "-1"]).is_err());
}

#[test]
fn cli_parse_download() {
    match parse(&["harscope", "download", "4"]) {
        CliCommand::Download { id, out } => {
            assert_eq!(id, 4);
            assert!(out.is_none());
        }
        _ => panic!("expected Download"),
    }
    match parse(&["harscope", "download", "4", "-o", "/tmp/logo.png"]) {
        CliCommand::Download { out, .. } => {
            assert_eq!(out.as_deref(), Some(std::path::Path::new("/tmp/logo.png")));
        }
        _ => panic!("expected Download with --out"),
    }
}

#[test]
fn cli_parse_graph() {
    match parse(&["harscope", "graph"]) {
        CliCommand::Graph {
            text,
            max_nodes,
            max_edges,
        } => {
            assert!(!text);
            assert_eq!((max_nodes, max_edges), (200, 400));
        }
        _ => panic!("expected Graph"),
    }
    match parse(&["harscope", "graph", "--text", "--max-nodes", "10"]) {
        CliCommand::Graph {
            text, max_nodes, ..
        } => {
            assert!(text);
            assert_eq!(max_nodes, 10);
        }
        _ => panic!("expected Graph --text"),
    }
}

#[test]
fn cli_parse_phases_and_report() {
    match parse(&["harscope", "phases", "--csv"]) {
        CliCommand::Phases { csv } => assert!(csv),
        _ => panic!("expected Phases"),
    }
    assert!(matches!(parse(&["harscope", "report"]), CliCommand::Report));
}
