//! Fluent API for building GraphStore instances.

use crate::types::{
    EdgeConfig, EdgeKey, GraphOptions, GraphResult, NodeConfig, NodeKey, Weight,
};

use super::GraphStore;

/// Fluent builder for constructing a GraphStore.
///
/// Entries are replayed through the normal store operations in the order
/// they were added, so `build` fails with the same errors they would.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    options: GraphOptions,
    nodes: Vec<(NodeKey, NodeConfig)>,
    edges: Vec<(EdgeKey, NodeKey, NodeKey, EdgeConfig)>,
}

impl GraphBuilder {
    /// Create a new builder for an undirected simple graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder with the given topology.
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Set whether the graph is directed.
    pub fn directed(&mut self, directed: bool) -> &mut Self {
        self.options.directed = directed;
        self
    }

    /// Set whether parallel edges are allowed.
    pub fn multi(&mut self, multi: bool) -> &mut Self {
        self.options.multi = multi;
        self
    }

    /// Add an unlabeled node.
    pub fn node(&mut self, key: NodeKey) -> &mut Self {
        self.nodes.push((key, NodeConfig::default()));
        self
    }

    /// Add a labeled node.
    pub fn labeled_node(&mut self, key: NodeKey, label: impl Into<String>) -> &mut Self {
        self.nodes.push((key, NodeConfig::labeled(label)));
        self
    }

    /// Add an edge with default weight and no label.
    pub fn edge(&mut self, key: EdgeKey, source: NodeKey, destination: NodeKey) -> &mut Self {
        self.edges
            .push((key, source, destination, EdgeConfig::default()));
        self
    }

    /// Add a weighted edge.
    pub fn weighted_edge(
        &mut self,
        key: EdgeKey,
        source: NodeKey,
        destination: NodeKey,
        weight: Weight,
    ) -> &mut Self {
        self.edges.push((
            key,
            source,
            destination,
            EdgeConfig::default().weight(weight),
        ));
        self
    }

    /// Add an edge with a full config.
    pub fn edge_with(
        &mut self,
        key: EdgeKey,
        source: NodeKey,
        destination: NodeKey,
        config: EdgeConfig,
    ) -> &mut Self {
        self.edges.push((key, source, destination, config));
        self
    }

    /// Build the final GraphStore. Nodes are added before edges.
    pub fn build(&self) -> GraphResult<GraphStore> {
        let mut graph = GraphStore::with_options(self.options);
        for (key, config) in &self.nodes {
            graph.create_node(*key, config.clone())?;
        }
        for (key, source, destination, config) in &self.edges {
            graph.create_edge(*key, *source, *destination, config.clone())?;
        }
        Ok(graph)
    }
}
