//! Text loaders
//!
//! - [`matrix`]: dense multiplicity matrix → [`AdjacencyList`](crate::graph::AdjacencyList)
//! - [`edge_list`]: weighted `source dest weight` triples → [`Multigraph`](crate::graph::Multigraph)
//!
//! Both formats are whitespace separated and ignore blank lines.

pub mod edge_list;
pub mod matrix;

pub use edge_list::{read_edge_list, read_edge_list_file, read_triples};
pub use matrix::{read_adjacency_file, read_matrix, read_matrix_file};
