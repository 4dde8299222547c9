//! Tracing helpers for command dispatch

/// Trace command timing when `--verbose` is set
///
/// Usage:
/// ```ignore
/// trace_command!(ctx, "load_matrix");
/// ```
macro_rules! trace_command {
    ($ctx:expr, $label:expr) => {
        if $ctx.cli.verbose {
            ::tracing::debug!(elapsed = ?$ctx.start.elapsed(), $label);
        }
    };
}

pub(crate) use trace_command;
