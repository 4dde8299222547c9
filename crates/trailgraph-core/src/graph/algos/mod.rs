//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest distances over a weighted multigraph

pub mod dijkstra;

pub use dijkstra::{dijkstra, DistanceTable, Predecessor, PredecessorTable, ShortestPaths};
