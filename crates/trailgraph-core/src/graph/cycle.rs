use std::collections::{HashMap, HashSet};

use crate::graph::adjacency::AdjacencyList;
use crate::graph::types::VertexId;

/// Check whether a directed adjacency list contains no cycle.
///
/// Every key is visited, across disconnected components, by repeated
/// explicit-stack depth-first passes that start at the smallest unvisited
/// key. `visited` is shared by all passes; `path` holds the vertices of the
/// current pass that are still being expanded. Reaching a vertex on `path`
/// is a back-edge and ends the check. Only ancestors on `path` count: a
/// vertex finished earlier, in this pass or another, is not a cycle. Successors
/// without an entry of their own are sinks.
#[tracing::instrument(skip(adjacency), fields(vertices = adjacency.len()))]
pub fn is_acyclic(adjacency: &AdjacencyList) -> bool {
    const NO_SUCCESSORS: &[VertexId] = &[];

    let mut visited: HashMap<VertexId, bool> = adjacency.vertices().map(|v| (v, false)).collect();
    let mut path: HashSet<VertexId> = HashSet::new();
    // (vertex, index of the next successor to examine)
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    for root in adjacency.vertices() {
        if visited.get(&root).copied().unwrap_or(false) {
            continue;
        }
        visited.insert(root, true);
        path.insert(root);
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (current, next_index) = *frame;
            let successors = adjacency.successors(current).unwrap_or(NO_SUCCESSORS);
            let Some(&next) = successors.get(next_index) else {
                path.remove(&current);
                stack.pop();
                continue;
            };
            frame.1 += 1;

            if path.contains(&next) {
                tracing::debug!(from = current, to = next, "back-edge found");
                return false;
            }
            let seen = visited.entry(next).or_insert(false);
            if !*seen {
                *seen = true;
                path.insert(next);
                stack.push((next, 0));
            }
        }
    }

    true
}
