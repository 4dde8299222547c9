//! Bounded neighborhood command
use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dfs::join_vertices;
use crate::commands::dispatch::{trace_command, CommandContext};
use trailgraph_core::error::Result;
use trailgraph_core::graph::{neighbors, VertexId};
use trailgraph_core::io::read_adjacency_file;

/// Execute the neighbors command
pub fn execute(
    ctx: &CommandContext,
    matrix: &Path,
    start: VertexId,
    max_distance: Option<u32>,
) -> Result<()> {
    let max_distance = max_distance.unwrap_or(ctx.config.traversal.max_distance);

    let adjacency = read_adjacency_file(matrix)?;
    trace_command!(ctx, "load_matrix");

    let reached = neighbors(&adjacency, start, max_distance)?;
    trace_command!(ctx, "neighbors");

    match ctx.cli.format {
        OutputFormat::Human => {
            if reached.is_empty() {
                if !ctx.cli.quiet {
                    eprintln!("no vertices within {} hops of {}", max_distance, start);
                }
            } else {
                println!("{}", join_vertices(&reached));
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "max_distance": max_distance,
                "neighbors": reached,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
