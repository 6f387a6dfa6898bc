//! CLI for harscope.

mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use harscope_core::config::{self, HarscopeConfig};
use harscope_core::{CaptureError, CaptureStore, EntryFilter};
use std::path::{Path, PathBuf};

use commands::{
    run_body, run_download, run_entries, run_graph, run_phases, run_report, run_show, run_stats,
};
use output::Output;

/// Top-level CLI for harscope.
#[derive(Debug, Parser)]
#[command(name = "harscope")]
#[command(about = "harscope: inspect HAR network captures", long_about = None)]
pub struct Cli {
    /// HAR file to load. Defaults to the first existing `sample_paths` entry in config.
    #[arg(long, global = true, value_name = "PATH")]
    pub har: Option<PathBuf>,

    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List entries, ordered by start offset.
    Entries {
        #[command(flatten)]
        filter: FilterArgs,
        /// Skip the first N matches.
        #[arg(long, default_value = "0", value_name = "N")]
        offset: usize,
        /// Show at most N matches (default from config `default_page_limit`).
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Show one entry in full (request, response, timings).
    Show {
        /// Entry id (position in the capture).
        id: usize,
    },

    /// Preview an entry's response body.
    Body {
        /// Entry id.
        id: usize,
    },

    /// Write an entry's decoded response body to a file.
    Download {
        /// Entry id.
        id: usize,
        /// Output path (default `./entry-<id>`).
        #[arg(long, short, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Aggregate counts by status, MIME type, domain and resource type.
    Stats,

    /// Inferred request relation graph.
    Graph {
        /// Print a bounded plain-text listing instead of JSON.
        #[arg(long)]
        text: bool,
        /// Node limit for `--text`.
        #[arg(long, default_value = "200", value_name = "N")]
        max_nodes: usize,
        /// Edge limit for `--text`.
        #[arg(long, default_value = "400", value_name = "N")]
        max_edges: usize,
    },

    /// Timing phase totals, overall and per resource type.
    Phases {
        /// Print CSV (one row per resource type plus a total row).
        #[arg(long)]
        csv: bool,
    },

    /// Stats, graph and phase totals in one pass.
    Report,
}

/// Entry filter flags for `harscope entries`.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive search over URL, status and MIME type.
    #[arg(long, short)]
    pub q: Option<String>,
    /// Exact host.
    #[arg(long)]
    pub domain: Option<String>,
    /// Exact status code.
    #[arg(long)]
    pub status: Option<String>,
    /// Exact MIME type.
    #[arg(long)]
    pub mime: Option<String>,
    /// Exact request method.
    #[arg(long)]
    pub method: Option<String>,
    /// Exact resource type (document, script, xhr, ...).
    #[arg(long = "type", value_name = "TYPE")]
    pub resource_type: Option<String>,
    /// Exact priority label.
    #[arg(long)]
    pub priority: Option<String>,
    /// Lowest status code to include.
    #[arg(long, value_name = "CODE")]
    pub status_min: Option<i64>,
    /// Highest status code to include.
    #[arg(long, value_name = "CODE")]
    pub status_max: Option<i64>,
}

impl From<FilterArgs> for EntryFilter {
    fn from(a: FilterArgs) -> Self {
        EntryFilter {
            q: a.q,
            domain: a.domain,
            status: a.status,
            mime: a.mime,
            method: a.method,
            resource_type: a.resource_type,
            priority: a.priority,
            status_min: a.status_min,
            status_max: a.status_max,
        }
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let path = capture_path(cli.har.as_deref(), &cfg)?;
        let store = CaptureStore::new();
        let capture = store
            .load_path(&path)
            .with_context(|| format!("load capture {}", path.display()))?;
        let out = Output {
            json: cli.json,
            pretty: cfg.pretty_json,
        };

        match cli.command {
            CliCommand::Entries {
                filter,
                offset,
                limit,
            } => {
                let limit = limit.unwrap_or(cfg.default_page_limit);
                run_entries(&capture, &filter.into(), offset, limit, &out)?;
            }
            CliCommand::Show { id } => run_show(&capture, id, &out)?,
            CliCommand::Body { id } => run_body(&capture, id, &out)?,
            CliCommand::Download { id, out: dest } => {
                run_download(&capture, id, dest.as_deref())?;
            }
            CliCommand::Stats => run_stats(&capture, &out)?,
            CliCommand::Graph {
                text,
                max_nodes,
                max_edges,
            } => run_graph(&capture, text, max_nodes, max_edges, &out)?,
            CliCommand::Phases { csv } => run_phases(&capture, csv, &out)?,
            CliCommand::Report => run_report(capture, &out).await?,
        }

        Ok(())
    }
}

/// `--har` if given, else the first configured sample that exists.
fn capture_path(har: Option<&Path>, cfg: &HarscopeConfig) -> Result<PathBuf> {
    if let Some(p) = har {
        return Ok(p.to_path_buf());
    }
    let sample = cfg.first_existing_sample().ok_or(CaptureError::NoSample {
        checked: cfg.sample_paths.len(),
    })?;
    tracing::debug!("no --har given, using sample {}", sample.display());
    Ok(sample.to_path_buf())
}

#[cfg(test)]
mod tests;
