//! Minimum-weight trail command
use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use trailgraph_core::error::Result;
use trailgraph_core::graph::{find_min_trail, VertexId};
use trailgraph_core::io::read_edge_list_file;

/// Execute the trail command
pub fn execute(
    ctx: &CommandContext,
    edges: &Path,
    start: VertexId,
    end: VertexId,
) -> Result<()> {
    let graph = read_edge_list_file(edges, &ctx.config.loader)?;
    trace_command!(ctx, "load_edge_list");

    let trail = find_min_trail(&graph, start, end)?;
    trace_command!(ctx, "find_min_trail");

    let reachable = start == end || !trail.is_empty();

    match ctx.cli.format {
        OutputFormat::Human => {
            if trail.is_empty() {
                if !ctx.cli.quiet {
                    if reachable {
                        eprintln!("start and end are the same vertex");
                    } else {
                        eprintln!("no trail from {} to {}", start, end);
                    }
                }
            } else {
                println!("{}", trail);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "end": end,
                "reachable": reachable,
                "total": trail.total_weight(),
                "segments": trail.segments(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
