//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use graph_store::{AdjacencyIndex, GraphStore};

/// Assert I1-I3, I5 and I6 on `graph`. I4 is checked separately by
/// [`assert_simple`] because option changes may leave earlier edges behind.
pub fn assert_consistent(graph: &GraphStore) {
    let node_keys: HashSet<u64> = graph.nodes().map(|n| n.key).collect();
    assert_eq!(node_keys.len(), graph.node_count(), "node keys not unique");

    let edge_keys: HashSet<u64> = graph.edges().map(|e| e.key).collect();
    assert_eq!(edge_keys.len(), graph.edge_count(), "edge keys not unique");

    for edge in graph.edges() {
        assert!(
            node_keys.contains(&edge.source) && node_keys.contains(&edge.destination),
            "edge {} references a missing node",
            edge.key
        );
    }

    let expected = AdjacencyIndex::build(
        graph.nodes().map(|n| n.key),
        graph.edges(),
        graph.options().directed,
    );
    assert_eq!(graph.adjacency(), &expected, "adjacency index drifted");

    assert_eq!(graph.adjacency().len(), graph.node_count());
    for (key, _) in graph.adjacency().iter() {
        assert!(node_keys.contains(&key), "stale adjacency entry {}", key);
    }
}

/// Assert I4 for a simple graph.
pub fn assert_simple(graph: &GraphStore) {
    if !graph.options().multi {
        assert!(
            graph.conflicting_edges().is_empty(),
            "duplicate connections: {:?}",
            graph.conflicting_edges()
        );
    }
}

/// Install a test logger once; repeated calls are harmless.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
