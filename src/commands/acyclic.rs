//! Cycle check command
use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use trailgraph_core::error::Result;
use trailgraph_core::graph::is_acyclic;
use trailgraph_core::io::read_adjacency_file;

/// Execute the acyclic command
pub fn execute(ctx: &CommandContext, matrix: &Path) -> Result<()> {
    let adjacency = read_adjacency_file(matrix)?;
    trace_command!(ctx, "load_matrix");

    let acyclic = is_acyclic(&adjacency);
    trace_command!(ctx, "is_acyclic");

    match ctx.cli.format {
        OutputFormat::Human => println!("{}", if acyclic { "acyclic" } else { "cyclic" }),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "vertices": adjacency.len(),
                "acyclic": acyclic,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
