use crate::error::{GraphError, Result};
use crate::graph::multigraph::{MultiEdge, Multigraph};
use crate::graph::types::{EdgeId, VertexId, Weight};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// How a vertex's best known distance was reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Predecessor {
    /// Not reached (yet)
    Unset,
    /// The vertex the search started from
    Source,
    /// Reached over `edge` (of `weight`) from `vertex`
    Via {
        vertex: VertexId,
        edge: EdgeId,
        weight: Weight,
    },
}

/// Best known distance per vertex; unreached vertices hold [`Weight::INFINITY`]
pub type DistanceTable = HashMap<VertexId, Weight>;

/// Predecessor per vertex for the current best distance
pub type PredecessorTable = HashMap<VertexId, Predecessor>;

/// Outcome of one single-source run
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    pub source: VertexId,
    pub distances: DistanceTable,
    pub predecessors: PredecessorTable,
}

impl ShortestPaths {
    pub fn distance(&self, vertex: VertexId) -> Option<Weight> {
        self.distances.get(&vertex).copied()
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<Predecessor> {
        self.predecessors.get(&vertex).copied()
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        !matches!(
            self.predecessors.get(&vertex),
            None | Some(Predecessor::Unset)
        )
    }
}

/// Min-heap entry (wrapped in `Reverse`), ordered by tentative distance and
/// then by push order.
#[derive(Debug, Clone)]
pub struct HeapEntry {
    pub vertex: VertexId,
    pub distance: Weight,
    pub sequence: u64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Cheapest of a group of parallel edges; the first one wins a tie.
fn lightest(parallel: &[MultiEdge]) -> Option<&MultiEdge> {
    parallel
        .iter()
        .reduce(|best, edge| if edge.weight < best.weight { edge } else { best })
}

/// State tracked during one Dijkstra run
struct DijkstraState {
    distances: DistanceTable,
    predecessors: PredecessorTable,
    settled: HashSet<VertexId>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    pushes: u64,
}

impl DijkstraState {
    fn new(graph: &Multigraph, source: VertexId) -> Self {
        let mut distances: DistanceTable = graph
            .vertices()
            .iter()
            .map(|&v| (v, Weight::INFINITY))
            .collect();
        let mut predecessors: PredecessorTable = graph
            .vertices()
            .iter()
            .map(|&v| (v, Predecessor::Unset))
            .collect();
        distances.insert(source, Weight::ZERO);
        predecessors.insert(source, Predecessor::Source);

        let mut state = Self {
            distances,
            predecessors,
            settled: HashSet::new(),
            heap: BinaryHeap::new(),
            pushes: 0,
        };
        state.push(source, Weight::ZERO);
        state
    }

    fn push(&mut self, vertex: VertexId, distance: Weight) {
        self.heap.push(Reverse(HeapEntry {
            vertex,
            distance,
            sequence: self.pushes,
        }));
        self.pushes += 1;
    }

    fn distance(&self, vertex: VertexId) -> Weight {
        self.distances
            .get(&vertex)
            .copied()
            .unwrap_or(Weight::INFINITY)
    }

    /// Next unsettled vertex with the smallest tentative distance.
    fn extract_min(&mut self) -> Option<VertexId> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.settled.insert(entry.vertex) {
                return Some(entry.vertex);
            }
        }
        None
    }

    /// Relax `current → target` over its lightest parallel edge.
    fn relax(&mut self, current: VertexId, target: VertexId, edge: &MultiEdge) {
        let candidate = self.distance(current) + edge.weight;
        if candidate < self.distance(target) {
            tracing::trace!(
                from = current,
                to = target,
                edge = edge.id,
                distance = candidate.value(),
                "relax"
            );
            self.distances.insert(target, candidate);
            self.predecessors.insert(
                target,
                Predecessor::Via {
                    vertex: current,
                    edge: edge.id,
                    weight: edge.weight,
                },
            );
            // Settled vertices are never processed twice
            if !self.settled.contains(&target) {
                self.push(target, candidate);
            }
        }
    }
}

/// Single-source shortest distances over a multigraph with non-negative
/// weights.
///
/// For every destination only the lightest of the parallel edges is
/// considered. Each vertex is expanded at most once.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dijkstra(graph: &Multigraph, source: VertexId) -> Result<ShortestPaths> {
    if !graph.contains_vertex(source) {
        return Err(GraphError::vertex_not_found(source));
    }

    let mut state = DijkstraState::new(graph, source);

    while let Some(current) = state.extract_min() {
        for (&target, parallel) in graph.outgoing_edges(current)? {
            if let Some(edge) = lightest(parallel) {
                state.relax(current, target, edge);
            }
        }
    }

    tracing::debug!(
        source,
        settled = state.settled.len(),
        pushes = state.pushes,
        "dijkstra complete"
    );

    Ok(ShortestPaths {
        source,
        distances: state.distances,
        predecessors: state.predecessors,
    })
}

#[cfg(test)]
mod tests;
