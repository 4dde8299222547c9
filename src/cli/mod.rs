//! CLI argument parsing for trailgraph
//!
//! Supports global flags: --format, --config, --quiet, --verbose,
//! --log-level, --log-json

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

/// Trailgraph - graph traversal, cycle checks and minimum-weight trails
#[derive(Parser, Debug)]
#[command(name = "trailgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "TRAILGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "trailgraph_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Depth-first visitation order from a vertex
    Dfs {
        /// Adjacency matrix file (rows of edge multiplicities)
        matrix: PathBuf,

        /// Start vertex (1-based)
        start: u32,

        /// Use the explicit-stack variant
        #[arg(long)]
        iterative: bool,
    },

    /// Vertices within a number of hops of a vertex
    Neighbors {
        /// Adjacency matrix file (rows of edge multiplicities)
        matrix: PathBuf,

        /// Start vertex (1-based)
        start: u32,

        /// Maximum number of hops (defaults to [traversal] max_distance)
        #[arg(long, short = 'd')]
        max_distance: Option<u32>,
    },

    /// Check whether a graph has no cycle
    Acyclic {
        /// Adjacency matrix file (rows of edge multiplicities)
        matrix: PathBuf,
    },

    /// Minimum-weight trail between two vertices
    Trail {
        /// Edge list file (`source dest weight` triples)
        edges: PathBuf,

        /// Start vertex
        start: u32,

        /// End vertex
        end: u32,
    },
}
