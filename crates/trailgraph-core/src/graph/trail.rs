//! Minimum-weight trails and their reconstruction from a predecessor table.

use std::fmt;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::algos::dijkstra::{dijkstra, Predecessor, ShortestPaths};
use crate::graph::multigraph::Multigraph;
use crate::graph::types::{EdgeId, VertexId, Weight};

/// One hop of a trail
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrailSegment {
    pub start: VertexId,
    pub end: VertexId,
    pub edge: EdgeId,
    pub weight: Weight,
}

/// Ordered segments where each segment ends where the next one starts.
/// An empty trail means "no path".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trail {
    segments: Vec<TrailSegment>,
}

impl Trail {
    pub fn segments(&self) -> &[TrailSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn total_weight(&self) -> Weight {
        self.segments.iter().map(|s| s.weight).sum()
    }

    pub fn start(&self) -> Option<VertexId> {
        self.segments.first().map(|s| s.start)
    }

    pub fn end(&self) -> Option<VertexId> {
        self.segments.last().map(|s| s.end)
    }

    /// Visited vertices, both endpoints included.
    pub fn vertices(&self) -> Vec<VertexId> {
        let mut vertices: Vec<VertexId> = self.segments.iter().map(|s| s.start).collect();
        vertices.extend(self.end());
        vertices
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a TrailSegment;
    type IntoIter = std::slice::Iter<'a, TrailSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// `1 -[1: 2.0]-> 2 -[0: 1.0]-> 3  (total = 3.0)`
impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(end) = self.end() else {
            return write!(f, "(empty trail)");
        };
        for segment in &self.segments {
            write!(f, "{} -[{}: {}]-> ", segment.start, segment.edge, segment.weight)?;
        }
        write!(f, "{}  (total = {})", end, self.total_weight())
    }
}

impl ShortestPaths {
    /// Walk predecessors back from `end` to the source.
    ///
    /// Returns an empty trail when `end` is unreachable or is the source.
    pub fn trail_to(&self, end: VertexId) -> Trail {
        let mut segments = Vec::new();
        let mut current = end;

        // A predecessor chain never has more hops than there are vertices
        for _ in 0..=self.predecessors.len() {
            match self.predecessor(current) {
                Some(Predecessor::Source) => {
                    segments.reverse();
                    return Trail { segments };
                }
                Some(Predecessor::Via {
                    vertex,
                    edge,
                    weight,
                }) => {
                    segments.push(TrailSegment {
                        start: vertex,
                        end: current,
                        edge,
                        weight,
                    });
                    current = vertex;
                }
                Some(Predecessor::Unset) | None => return Trail::default(),
            }
        }

        tracing::warn!(end, "predecessor chain does not reach the source");
        Trail::default()
    }
}

/// Minimum-weight trail from `start` to `end`.
///
/// Unknown vertices are an error; an unreachable `end` gives an empty trail.
#[tracing::instrument(skip(graph))]
pub fn find_min_trail(graph: &Multigraph, start: VertexId, end: VertexId) -> Result<Trail> {
    if !graph.contains_vertex(end) {
        return Err(GraphError::vertex_not_found(end));
    }
    let paths = dijkstra(graph, start)?;
    let trail = paths.trail_to(end);
    tracing::debug!(
        hops = trail.len(),
        total = trail.total_weight().value(),
        "min trail"
    );
    Ok(trail)
}
