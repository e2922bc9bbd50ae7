//! Degree summary computed from the adjacency index.

use std::collections::BTreeMap;

use serde::Serialize;

use super::GraphStore;

/// Degree statistics of a graph, as shown by graph-info displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Smallest degree, `None` for an empty graph.
    pub min_degree: Option<usize>,
    /// Largest degree (0 for an empty graph).
    pub max_degree: usize,
    /// Mean degree (0.0 for an empty graph).
    pub avg_degree: f64,
    /// Nodes with degree 0.
    pub isolated_nodes: usize,
    /// degree -> number of nodes with that degree.
    pub distribution: BTreeMap<usize, usize>,
}

impl DegreeStats {
    /// Compute the statistics for `graph`.
    pub fn compute(graph: &GraphStore) -> Self {
        let mut distribution = BTreeMap::new();
        let mut total = 0usize;
        for (_, neighbors) in graph.adjacency().iter() {
            *distribution.entry(neighbors.len()).or_insert(0) += 1;
            total += neighbors.len();
        }

        let nodes = graph.adjacency().len();
        let avg_degree = if nodes == 0 {
            0.0
        } else {
            total as f64 / nodes as f64
        };

        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            min_degree: distribution.keys().next().copied(),
            max_degree: distribution.keys().next_back().copied().unwrap_or(0),
            avg_degree,
            isolated_nodes: distribution.get(&0).copied().unwrap_or(0),
            distribution,
        }
    }
}

impl GraphStore {
    /// Degree statistics for this graph.
    pub fn degree_stats(&self) -> DegreeStats {
        DegreeStats::compute(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn test_empty_graph() {
        let stats = GraphStore::new().degree_stats();
        assert_eq!(stats.min_degree, None);
        assert_eq!(stats.max_degree, 0);
        assert_eq!(stats.avg_degree, 0.0);
    }

    #[test]
    fn test_path_with_isolated_node() {
        let graph = GraphBuilder::new()
            .node(1)
            .node(2)
            .node(3)
            .node(4)
            .edge(1, 1, 2)
            .edge(2, 2, 3)
            .build()
            .unwrap();
        let stats = graph.degree_stats();
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.min_degree, Some(0));
        assert_eq!(stats.max_degree, 2);
        assert!((stats.avg_degree - 1.0).abs() < f64::EPSILON);
        assert_eq!(stats.isolated_nodes, 1);
        assert_eq!(stats.distribution.get(&1), Some(&2));
    }
}
