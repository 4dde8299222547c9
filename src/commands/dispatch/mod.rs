//! Command dispatch logic for trailgraph

use std::time::Instant;

use crate::cli::{Cli, Commands};
use trailgraph_core::config::TrailgraphConfig;
use trailgraph_core::error::Result;
use tracing::debug;

mod command;
mod macros;

pub(crate) use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = TrailgraphConfig::load_or_default(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Dfs {
                matrix,
                start,
                iterative,
            } => crate::commands::dfs::execute(ctx, matrix, *start, *iterative),

            Commands::Neighbors {
                matrix,
                start,
                max_distance,
            } => crate::commands::neighbors::execute(ctx, matrix, *start, *max_distance),

            Commands::Acyclic { matrix } => crate::commands::acyclic::execute(ctx, matrix),

            Commands::Trail { edges, start, end } => {
                crate::commands::trail::execute(ctx, edges, *start, *end)
            }
        }
    }
}
