//! Depth-first and bounded breadth-first walks over an [`AdjacencyList`].

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::adjacency::AdjacencyList;
use crate::graph::types::VertexId;

fn successors_of(adjacency: &AdjacencyList, vertex: VertexId) -> Result<&[VertexId]> {
    adjacency
        .successors(vertex)
        .ok_or_else(|| GraphError::vertex_not_found(vertex))
}

/// Depth-first visitation order from `start`, recursive form.
///
/// Fails with [`GraphError::VertexNotFound`] if `start`, or any vertex the
/// walk reaches, has no adjacency entry. Normalize the list first to treat
/// such vertices as sinks.
#[tracing::instrument(skip(adjacency), fields(vertices = adjacency.len()))]
pub fn dfs_recursive(adjacency: &AdjacencyList, start: VertexId) -> Result<Vec<VertexId>> {
    fn visit(
        adjacency: &AdjacencyList,
        current: VertexId,
        visited: &mut HashSet<VertexId>,
        order: &mut Vec<VertexId>,
    ) -> Result<()> {
        visited.insert(current);
        order.push(current);
        for &next in successors_of(adjacency, current)? {
            if !visited.contains(&next) {
                visit(adjacency, next, visited, order)?;
            }
        }
        Ok(())
    }

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    visit(adjacency, start, &mut visited, &mut order)?;
    Ok(order)
}

/// Depth-first visitation order from `start`, explicit-stack form.
///
/// Successors are pushed in reverse so the first successor is popped first,
/// which makes the order identical to [`dfs_recursive`].
#[tracing::instrument(skip(adjacency), fields(vertices = adjacency.len()))]
pub fn dfs_iterative(adjacency: &AdjacencyList, start: VertexId) -> Result<Vec<VertexId>> {
    let mut stack = vec![start];
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut order = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current);
        stack.extend(successors_of(adjacency, current)?.iter().rev());
    }

    Ok(order)
}

/// All vertices within `max_distance` hops of `start`, excluding `start`.
///
/// The adjacency list is normalized first, so vertices that only appear as
/// successors are valid starts and expand to nothing. A vertex found at depth
/// `d` is always part of the result but is only expanded while
/// `d < max_distance`, so the start's direct successors are always reached,
/// even with a bound of `0`.
#[tracing::instrument(skip(adjacency), fields(vertices = adjacency.len()))]
pub fn neighbors(
    adjacency: &AdjacencyList,
    start: VertexId,
    max_distance: u32,
) -> Result<BTreeSet<VertexId>> {
    let adjacency = adjacency.normalized();
    if !adjacency.contains(start) {
        return Err(GraphError::vertex_not_found(start));
    }
    let mut visited: HashMap<VertexId, bool> = adjacency.vertices().map(|v| (v, false)).collect();
    let mut queue: VecDeque<(VertexId, u32)> = VecDeque::new();

    visited.insert(start, true);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        let next_depth = depth + 1;
        for &next in successors_of(&adjacency, current)? {
            let seen = visited.entry(next).or_insert(false);
            if *seen {
                continue;
            }
            *seen = true;
            if next_depth < max_distance {
                queue.push_back((next, next_depth));
            }
        }
    }

    let reached: BTreeSet<VertexId> = visited
        .into_iter()
        .filter(|&(v, was_visited)| was_visited && v != start)
        .map(|(v, _)| v)
        .collect();
    tracing::debug!(start, max_distance, reached = reached.len(), "neighbors");
    Ok(reached)
}
