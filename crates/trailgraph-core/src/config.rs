//! Configuration for trailgraph
//!
//! Configuration is read from a TOML file passed with `--config`
//! (or `TRAILGRAPH_CONFIG`). Every field has a default, so an empty
//! file and a missing file behave the same.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TrailgraphConfig {
    /// Traversal defaults
    #[serde(default)]
    pub traversal: TraversalConfig,

    /// Input file loading behavior
    #[serde(default)]
    pub loader: LoaderConfig,
}

/// Defaults applied to traversal queries
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TraversalConfig {
    /// Depth bound used by `neighbors` when none is given explicitly
    #[serde(default = "default_max_distance")]
    pub max_distance: u32,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_distance: default_max_distance(),
        }
    }
}

fn default_max_distance() -> u32 {
    1
}

/// Edge-list loader behavior
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoaderConfig {
    /// Reject a trailing incomplete triple instead of dropping it
    #[serde(default)]
    pub strict: bool,
}

impl TrailgraphConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: TrailgraphConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load from `path` when given, otherwise return the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
