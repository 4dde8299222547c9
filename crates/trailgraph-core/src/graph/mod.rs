//! Graph models and algorithms
//!
//! Two independent models:
//! - [`AdjacencyList`]: unweighted successor lists, used for depth-first and
//!   bounded breadth-first traversal and for cycle detection
//! - [`Multigraph`]: weighted directed multigraph, used for minimum-weight
//!   trails with per-edge reconstruction

pub mod adjacency;
pub mod algos;
pub mod cycle;
pub mod multigraph;
pub mod trail;
pub mod traversal;
pub mod types;

pub use adjacency::AdjacencyList;
pub use algos::{dijkstra, DistanceTable, Predecessor, PredecessorTable, ShortestPaths};
pub use cycle::is_acyclic;
pub use multigraph::{MultiEdge, Multigraph, OutgoingEdges};
pub use trail::{find_min_trail, Trail, TrailSegment};
pub use traversal::{dfs_iterative, dfs_recursive, neighbors};
pub use types::{EdgeId, VertexId, Weight};
