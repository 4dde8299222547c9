use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::types::{EdgeId, VertexId, Weight};

/// A directed, weighted edge. `id` tells apart parallel edges between the
/// same ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MultiEdge {
    pub source: VertexId,
    pub target: VertexId,
    pub id: EdgeId,
    pub weight: Weight,
}

/// Outgoing edges of one vertex, grouped by destination.
pub type OutgoingEdges = BTreeMap<VertexId, Vec<MultiEdge>>;

/// Immutable directed multigraph.
///
/// Every edge endpoint is a vertex. Vertices keep first-seen order.
/// Edge identities are assumed unique per ordered pair; duplicates are
/// stored as given.
#[derive(Debug, Clone, Default)]
pub struct Multigraph {
    vertices: Vec<VertexId>,
    outgoing: HashMap<VertexId, OutgoingEdges>,
    edge_count: usize,
}

impl Multigraph {
    /// Build from `(source, target, weight)` triples.
    ///
    /// Each edge gets the number of edges already present between its pair
    /// as identity, so the first edge `u → v` is `0`, the second `1`, …
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId, f64)>,
    {
        let mut graph = Self::default();
        for (source, target, weight) in triples {
            let id = graph
                .outgoing
                .get(&source)
                .and_then(|by_target| by_target.get(&target))
                .map_or(0, |parallel| parallel.len() as EdgeId);
            graph.insert(MultiEdge {
                source,
                target,
                id,
                weight: Weight::new(weight),
            });
        }
        graph
    }

    /// Build from edges carrying their own identities.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = MultiEdge>,
    {
        let mut graph = Self::default();
        for edge in edges {
            graph.insert(edge);
        }
        graph
    }

    fn register(&mut self, vertex: VertexId) {
        if !self.outgoing.contains_key(&vertex) {
            self.vertices.push(vertex);
            self.outgoing.insert(vertex, BTreeMap::new());
        }
    }

    fn insert(&mut self, edge: MultiEdge) {
        self.register(edge.source);
        self.register(edge.target);
        self.outgoing
            .entry(edge.source)
            .or_default()
            .entry(edge.target)
            .or_default()
            .push(edge);
        self.edge_count += 1;
    }

    /// Outgoing edges of `vertex` grouped by destination. Sinks yield an
    /// empty map; unknown vertices are an error.
    pub fn outgoing_edges(&self, vertex: VertexId) -> Result<&OutgoingEdges> {
        self.outgoing
            .get(&vertex)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    /// All edges, grouped by source in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = &MultiEdge> + '_ {
        self.vertices
            .iter()
            .filter_map(|v| self.outgoing.get(v))
            .flat_map(|by_target| by_target.values().flatten())
    }

    /// Vertices in first-seen order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.outgoing.contains_key(&vertex)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl FromIterator<MultiEdge> for Multigraph {
    fn from_iter<I: IntoIterator<Item = MultiEdge>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}
