//! Depth-first visitation order command
use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use trailgraph_core::error::Result;
use trailgraph_core::graph::{dfs_iterative, dfs_recursive, VertexId};
use trailgraph_core::io::read_adjacency_file;

/// Execute the dfs command
pub fn execute(
    ctx: &CommandContext,
    matrix: &Path,
    start: VertexId,
    iterative: bool,
) -> Result<()> {
    // All-zero rows leave no entry; expand them as sinks
    let mut adjacency = read_adjacency_file(matrix)?;
    adjacency.normalize();
    trace_command!(ctx, "load_matrix");

    let order = if iterative {
        dfs_iterative(&adjacency, start)?
    } else {
        dfs_recursive(&adjacency, start)?
    };
    trace_command!(ctx, "dfs");

    match ctx.cli.format {
        OutputFormat::Human => println!("{}", join_vertices(&order)),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "variant": if iterative { "iterative" } else { "recursive" },
                "order": order,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Space separated vertex labels
pub fn join_vertices<'a, I>(vertices: I) -> String
where
    I: IntoIterator<Item = &'a VertexId>,
{
    vertices
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
