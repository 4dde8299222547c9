use super::*;
use crate::graph::trail::find_min_trail;
use proptest::prelude::*;

fn edge(source: VertexId, target: VertexId, id: EdgeId, weight: f64) -> MultiEdge {
    MultiEdge {
        source,
        target,
        id,
        weight: Weight::new(weight),
    }
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        vertex: 1,
        distance: Weight::new(1.0),
        sequence: 0,
    };
    let entry2 = HeapEntry {
        vertex: 2,
        distance: Weight::new(2.0),
        sequence: 1,
    };
    let entry3 = HeapEntry {
        vertex: 3,
        distance: Weight::new(1.0),
        sequence: 2,
    };

    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // Equal distances fall back to push order
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);

    assert_eq!(entry1, entry1.clone());
    assert_ne!(entry1, entry2);
}

#[test]
fn test_lightest_prefers_first_on_tie() {
    let parallel = [edge(1, 2, 7, 3.0), edge(1, 2, 8, 1.0), edge(1, 2, 9, 1.0)];
    assert_eq!(lightest(&parallel).map(|e| e.id), Some(8));
    assert!(lightest(&[]).is_none());
}

/// Edges (1→2, a=5), (1→2, b=2), (2→3, c=1)
#[test]
fn test_parallel_edges_choose_lightest() {
    let g = Multigraph::from_edges([edge(1, 2, 1, 5.0), edge(1, 2, 2, 2.0), edge(2, 3, 3, 1.0)]);
    let paths = dijkstra(&g, 1).unwrap();

    assert_eq!(paths.source, 1);
    assert_eq!(paths.distance(1), Some(Weight::ZERO));
    assert_eq!(paths.distance(2), Some(Weight::new(2.0)));
    assert_eq!(paths.distance(3), Some(Weight::new(3.0)));
    assert_eq!(paths.predecessor(1), Some(Predecessor::Source));
    assert_eq!(
        paths.predecessor(2),
        Some(Predecessor::Via {
            vertex: 1,
            edge: 2,
            weight: Weight::new(2.0)
        })
    );
}

#[test]
fn test_unreachable_vertex_stays_unset() {
    let g = Multigraph::from_triples([(1, 2, 1.0), (3, 4, 1.0)]);
    let paths = dijkstra(&g, 1).unwrap();

    assert_eq!(paths.distance(4), Some(Weight::INFINITY));
    assert_eq!(paths.predecessor(4), Some(Predecessor::Unset));
    assert!(!paths.is_reachable(3));
    assert!(paths.is_reachable(2));
    assert!(paths.is_reachable(1));
}

#[test]
fn test_unknown_source() {
    let g = Multigraph::from_triples([(1, 2, 1.0)]);
    assert!(matches!(
        dijkstra(&g, 5),
        Err(GraphError::VertexNotFound { vertex: 5 })
    ));
}

/// The direct edge to 2 is pushed first but the detour via 3 is cheaper.
/// Extraction by distance settles 3 before 2, so 2 still gets its optimum.
#[test]
fn test_cheaper_detour_found_before_settling() {
    let g = Multigraph::from_triples([(1, 2, 10.0), (1, 3, 1.0), (3, 2, 1.0), (2, 4, 1.0)]);
    let paths = dijkstra(&g, 1).unwrap();

    assert_eq!(paths.distance(2), Some(Weight::new(2.0)));
    assert_eq!(paths.distance(4), Some(Weight::new(3.0)));
    assert_eq!(
        paths.predecessor(2),
        Some(Predecessor::Via {
            vertex: 3,
            edge: 0,
            weight: Weight::new(1.0)
        })
    );
}

#[test]
fn test_zero_weight_edges() {
    let g = Multigraph::from_triples([(1, 2, 0.0), (2, 3, 0.0), (1, 3, 0.0)]);
    let paths = dijkstra(&g, 1).unwrap();
    assert_eq!(paths.distance(3), Some(Weight::ZERO));
    // Strict relaxation keeps the first edge that reached 3
    assert_eq!(
        paths.predecessor(3),
        Some(Predecessor::Via {
            vertex: 1,
            edge: 0,
            weight: Weight::ZERO
        })
    );
}

#[test]
fn test_self_loop_ignored() {
    let g = Multigraph::from_triples([(1, 1, 0.5), (1, 2, 3.0)]);
    let paths = dijkstra(&g, 1).unwrap();
    assert_eq!(paths.distance(1), Some(Weight::ZERO));
    assert_eq!(paths.predecessor(1), Some(Predecessor::Source));
    assert_eq!(paths.distance(2), Some(Weight::new(3.0)));
}

#[test]
fn test_predecessor_serializes_with_kind() {
    let json = serde_json::to_value(Predecessor::Via {
        vertex: 1,
        edge: 0,
        weight: Weight::new(2.5),
    })
    .unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "kind": "via", "vertex": 1, "edge": 0, "weight": 2.5 })
    );
}

/// Plain Bellman-Ford over all parallel edges, used as a reference.
fn reference_distances(g: &Multigraph, source: VertexId) -> HashMap<VertexId, f64> {
    let mut dist: HashMap<VertexId, f64> =
        g.vertices().iter().map(|&v| (v, f64::INFINITY)).collect();
    dist.insert(source, 0.0);
    for _ in 0..g.vertex_count() {
        for e in g.edges() {
            let candidate = dist[&e.source] + e.weight.value();
            if candidate < dist[&e.target] {
                dist.insert(e.target, candidate);
            }
        }
    }
    dist
}

/// Integer-valued weights keep the sums exact.
fn weighted_triples() -> impl Strategy<Value = Vec<(VertexId, VertexId, f64)>> {
    prop::collection::vec((1u32..7, 1u32..7, (0u32..10).prop_map(f64::from)), 1..25)
}

proptest! {
    #[test]
    fn prop_matches_reference(triples in weighted_triples()) {
        let g = Multigraph::from_triples(triples);
        for &source in g.vertices() {
            let paths = dijkstra(&g, source)?;
            let expected = reference_distances(&g, source);
            for &v in g.vertices() {
                prop_assert_eq!(paths.distance(v).map(|w| w.value()), Some(expected[&v]));
            }
        }
    }

    #[test]
    fn prop_trail_weight_equals_distance(triples in weighted_triples()) {
        let g = Multigraph::from_triples(triples);
        for &start in g.vertices() {
            let paths = dijkstra(&g, start)?;
            for &end in g.vertices() {
                let trail = find_min_trail(&g, start, end)?;
                let distance = paths.distance(end).unwrap_or(Weight::INFINITY);
                if trail.is_empty() {
                    prop_assert!(start == end || !distance.is_finite());
                } else {
                    prop_assert_eq!(trail.total_weight(), distance);
                    prop_assert_eq!(trail.start(), Some(start));
                    prop_assert_eq!(trail.end(), Some(end));
                }
            }
        }
    }
}
