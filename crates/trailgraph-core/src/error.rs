//! Error types and exit codes for trailgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown vertex, malformed input file)

use thiserror::Error;

use crate::graph::VertexId;

/// Exit codes reported by the trailgraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown vertex, malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph construction and queries
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: VertexId },

    #[error("parse error on line {line} at {token:?}: {reason}")]
    Parse {
        line: usize,
        token: String,
        reason: String,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Create an error for a vertex missing from an adjacency or graph mapping
    pub fn vertex_not_found(vertex: VertexId) -> Self {
        GraphError::VertexNotFound { vertex }
    }

    /// Create an error for an unparseable token in an input file
    pub fn parse(line: usize, token: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        GraphError::Parse {
            line,
            token: token.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::VertexNotFound { .. } | GraphError::Parse { .. } => ExitCode::Data,

            GraphError::Io(_) | GraphError::Toml(_) | GraphError::Json(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UsageError(_) => "usage_error",
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::Parse { .. } => "parse_error",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let GraphError::VertexNotFound { vertex } = self {
            error_obj["vertex"] = serde_json::json!(vertex);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for trailgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
