//! CLI commands for trailgraph

pub mod acyclic;
pub mod dfs;
pub mod dispatch;
pub mod neighbors;
pub mod trail;
