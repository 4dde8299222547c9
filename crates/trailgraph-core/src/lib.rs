//! Trailgraph Core Library
//!
//! In-memory graph algorithms: adjacency construction, depth-first and
//! bounded breadth-first traversal, cycle detection and minimum-weight
//! trails over weighted directed multigraphs.

pub mod config;
pub mod error;
pub mod graph;
pub mod io;
pub mod logging;
