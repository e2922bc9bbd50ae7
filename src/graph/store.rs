//! Core graph structure: nodes, edges and options with a derived adjacency index.
//!
//! Index maintenance per mutation:
//!
//! | operation           | adjacency index                         |
//! |---------------------|-----------------------------------------|
//! | `create_node`       | new empty entry                         |
//! | `create_edge`       | incremental append (one or two entries) |
//! | `remove_edge`       | full rebuild                            |
//! | `remove_node`       | full rebuild after the cascade          |
//! | `set_options`       | full rebuild                            |
//! | label/weight update | untouched                               |
//!
//! Every operation validates before it mutates, so an error leaves the
//! store exactly as it was.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::format::{GraphReader, GraphWriter};
use crate::types::{
    Edge, EdgeConfig, EdgeKey, Endpoint, GraphError, GraphOptions, GraphResult, Node, NodeConfig,
    NodeKey, OptionsUpdate,
};

use super::AdjacencyIndex;

/// In-memory graph holding nodes, edges, options and the adjacency index.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Nodes in insertion order, by key.
    nodes: IndexMap<NodeKey, Node>,
    /// Edges in insertion order, by key.
    edges: IndexMap<EdgeKey, Edge>,
    /// Topology.
    options: GraphOptions,
    /// Derived from `edges` under `options.directed`.
    adjacency: AdjacencyIndex,
}

impl GraphStore {
    /// Create an empty undirected simple graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with the given topology.
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    // ==================== Nodes ====================

    /// Add a node. Fails if the key is taken.
    pub fn create_node(&mut self, key: NodeKey, config: NodeConfig) -> GraphResult<&Node> {
        if self.nodes.contains_key(&key) {
            return Err(GraphError::node_exists(key));
        }

        self.adjacency.insert_node(key);
        let node = self.nodes.entry(key).or_insert(Node::new(key, config));
        log::trace!("created node {key}");
        Ok(&*node)
    }

    /// Remove a node together with every edge that touches it.
    pub fn remove_node(&mut self, key: NodeKey) -> GraphResult<Node> {
        let removed = self
            .nodes
            .shift_remove(&key)
            .ok_or_else(|| GraphError::node_not_found(key))?;

        // Collect first, then delete.
        let incident: HashSet<EdgeKey> = self
            .edges
            .values()
            .filter(|e| e.is_incident_to(key))
            .map(|e| e.key)
            .collect();
        self.edges.retain(|k, _| !incident.contains(k));
        self.rebuild_adjacency();

        log::debug!(
            "removed node {key} and {} incident edge(s)",
            incident.len()
        );
        Ok(removed)
    }

    /// Replace a node's label.
    pub fn update_node_label(&mut self, key: NodeKey, label: impl Into<String>) -> GraphResult<()> {
        let node = self
            .nodes
            .get_mut(&key)
            .ok_or_else(|| GraphError::node_not_found(key))?;
        node.label = label.into();
        log::trace!("relabeled node {key}");
        Ok(())
    }

    /// Look up a node.
    pub fn get_node(&self, key: NodeKey) -> GraphResult<&Node> {
        self.nodes.get(&key).ok_or_else(|| GraphError::node_not_found(key))
    }

    /// True when a node with this key exists.
    pub fn contains_node(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(&key)
    }

    // ==================== Edges ====================

    /// Add an edge between two existing nodes.
    ///
    /// The key is checked before the endpoints. A simple graph then refuses
    /// a pair that is already connected.
    pub fn create_edge(
        &mut self,
        key: EdgeKey,
        source: NodeKey,
        destination: NodeKey,
        config: EdgeConfig,
    ) -> GraphResult<&Edge> {
        if self.edges.contains_key(&key) {
            return Err(GraphError::edge_exists(key));
        }
        for (endpoint, node) in [
            (Endpoint::Source, source),
            (Endpoint::Destination, destination),
        ] {
            if !self.nodes.contains_key(&node) {
                return Err(GraphError::DanglingEndpoint {
                    edge: key,
                    endpoint,
                    node,
                });
            }
        }
        // Undirected lists are symmetric, so one lookup covers both orientations.
        if !self.options.multi && self.adjacency.contains(source, destination) {
            return Err(GraphError::DuplicateConnection {
                from: source,
                to: destination,
            });
        }

        let edge = Edge::new(key, source, destination, config);
        self.adjacency.link(&edge, self.options.directed);
        let edge = self.edges.entry(key).or_insert(edge);
        log::trace!("created edge {key}: {source} -> {destination}");
        Ok(&*edge)
    }

    /// Remove an edge.
    pub fn remove_edge(&mut self, key: EdgeKey) -> GraphResult<Edge> {
        let removed = self
            .edges
            .shift_remove(&key)
            .ok_or_else(|| GraphError::edge_not_found(key))?;
        self.rebuild_adjacency();
        log::trace!(
            "removed edge {key}: {} -> {}",
            removed.source,
            removed.destination
        );
        Ok(removed)
    }

    /// Change an edge's weight and/or label. Endpoints are fixed.
    pub fn update_edge(&mut self, key: EdgeKey, config: EdgeConfig) -> GraphResult<()> {
        let edge = self
            .edges
            .get_mut(&key)
            .ok_or_else(|| GraphError::edge_not_found(key))?;
        edge.apply(config);
        log::trace!("updated edge {key}");
        Ok(())
    }

    /// Look up an edge.
    pub fn get_edge(&self, key: EdgeKey) -> GraphResult<&Edge> {
        self.edges.get(&key).ok_or_else(|| GraphError::edge_not_found(key))
    }

    /// True when an edge with this key exists.
    pub fn contains_edge(&self, key: EdgeKey) -> bool {
        self.edges.contains_key(&key)
    }

    /// Edges touching `node` at either end, in insertion order.
    pub fn incident_edges(&self, node: NodeKey) -> GraphResult<Vec<&Edge>> {
        if !self.nodes.contains_key(&node) {
            return Err(GraphError::node_not_found(node));
        }
        Ok(self
            .edges
            .values()
            .filter(|e| e.is_incident_to(node))
            .collect())
    }

    // ==================== Options ====================

    /// Current topology.
    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Change the topology and rebuild the adjacency index.
    ///
    /// Existing edges are kept even when they now break the simple-graph
    /// rule; only later `create_edge` calls are checked. See
    /// [`conflicting_edges`](Self::conflicting_edges).
    pub fn set_options(&mut self, update: OptionsUpdate) {
        self.options = self.options.merged(update);
        self.rebuild_adjacency();

        if !self.options.multi {
            let conflicts = self.conflicting_edges();
            if !conflicts.is_empty() {
                log::warn!(
                    "{} existing edge(s) duplicate a connection under the new options: {:?}",
                    conflicts.len(),
                    conflicts
                );
            }
        }
    }

    /// Keys of edges whose connection repeats an earlier edge's, compared
    /// under the current `directed` setting.
    ///
    /// Only a simple graph treats these as violations.
    pub fn conflicting_edges(&self) -> Vec<EdgeKey> {
        let directed = self.options.directed;
        let mut seen: HashSet<(NodeKey, NodeKey)> = HashSet::with_capacity(self.edges.len());
        let mut conflicts = Vec::new();
        for edge in self.edges.values() {
            if !seen.insert(edge.connection(directed)) {
                conflicts.push(edge.key);
            }
        }
        conflicts
    }

    // ==================== Read-only views ====================

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> {
        self.nodes.values()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge> {
        self.edges.values()
    }

    /// The adjacency index.
    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    /// Neighbor list of a node.
    pub fn neighbors(&self, key: NodeKey) -> GraphResult<&[NodeKey]> {
        self.adjacency
            .neighbors(key)
            .ok_or_else(|| GraphError::node_not_found(key))
    }

    /// Degree of a node as recorded by the adjacency index.
    pub fn degree(&self, key: NodeKey) -> GraphResult<usize> {
        self.adjacency
            .degree(key)
            .ok_or_else(|| GraphError::node_not_found(key))
    }

    // ==================== Snapshot ====================

    /// Encode the store as a JSON snapshot.
    pub fn serialize(&self) -> GraphResult<Vec<u8>> {
        GraphWriter::to_bytes(self)
    }

    /// Decode and validate a JSON snapshot.
    pub fn deserialize(bytes: &[u8]) -> GraphResult<Self> {
        GraphReader::from_bytes(bytes)
    }

    /// Assemble a store from already-validated parts (used by the reader).
    pub(crate) fn from_parts(
        nodes: IndexMap<NodeKey, Node>,
        edges: IndexMap<EdgeKey, Edge>,
        options: GraphOptions,
    ) -> Self {
        let mut graph = Self {
            nodes,
            edges,
            options,
            adjacency: AdjacencyIndex::new(),
        };
        graph.rebuild_adjacency();
        graph
    }

    fn rebuild_adjacency(&mut self) {
        self.adjacency.rebuild(
            self.nodes.keys().copied(),
            self.edges.values(),
            self.options.directed,
        );
        log::debug!(
            "rebuilt adjacency from {} edge(s), directed={}",
            self.edges.len(),
            self.options.directed
        );
    }
}
