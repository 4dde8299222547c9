use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::types::VertexId;

/// Unweighted adjacency list: vertex → ordered successors.
///
/// Repeated successors encode parallel edges. A vertex referenced only as a
/// successor may be missing as a key; [`AdjacencyList::normalize`] adds an
/// empty entry for each such vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyList {
    entries: BTreeMap<VertexId, Vec<VertexId>>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a square multiplicity matrix.
    ///
    /// `matrix[i][j] == k` adds `k` copies of vertex `j + 1` to the successors
    /// of vertex `i + 1`. Rows summing to zero produce no key.
    pub fn from_matrix<R: AsRef<[u32]>>(matrix: &[R]) -> Self {
        let mut adjacency = Self::new();
        for (row_index, row) in matrix.iter().enumerate() {
            let successors: Vec<VertexId> = row
                .as_ref()
                .iter()
                .enumerate()
                .flat_map(|(col_index, &count)| {
                    std::iter::repeat_n(col_index as VertexId + 1, count as usize)
                })
                .collect();
            if !successors.is_empty() {
                adjacency.insert(row_index as VertexId + 1, successors);
            }
        }
        adjacency
    }

    /// Set the successors of `vertex`, replacing any existing entry.
    pub fn insert(&mut self, vertex: VertexId, successors: Vec<VertexId>) {
        self.entries.insert(vertex, successors);
    }

    /// Successors of `vertex`, or `None` if it has no entry.
    pub fn successors(&self, vertex: VertexId) -> Option<&[VertexId]> {
        self.entries.get(&vertex).map(Vec::as_slice)
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.entries.contains_key(&vertex)
    }

    /// Keys in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// True when every referenced successor also has an entry.
    pub fn is_normalized(&self) -> bool {
        self.entries
            .values()
            .flatten()
            .all(|v| self.entries.contains_key(v))
    }

    /// Give every referenced-but-missing vertex an empty entry. Idempotent.
    pub fn normalize(&mut self) {
        let missing: Vec<VertexId> = self
            .entries
            .values()
            .flatten()
            .filter(|v| !self.entries.contains_key(v))
            .copied()
            .collect();
        for vertex in missing {
            self.entries.entry(vertex).or_default();
        }
    }

    /// Normalized view; borrows when nothing is missing.
    pub fn normalized(&self) -> Cow<'_, AdjacencyList> {
        if self.is_normalized() {
            Cow::Borrowed(self)
        } else {
            let mut owned = self.clone();
            owned.normalize();
            Cow::Owned(owned)
        }
    }
}

impl FromIterator<(VertexId, Vec<VertexId>)> for AdjacencyList {
    fn from_iter<I: IntoIterator<Item = (VertexId, Vec<VertexId>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(VertexId, Vec<VertexId>); N]> for AdjacencyList {
    fn from(entries: [(VertexId, Vec<VertexId>); N]) -> Self {
        entries.into_iter().collect()
    }
}
