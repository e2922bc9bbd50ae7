//! Adjacency index: neighbor lists derived from the edge set.

use indexmap::IndexMap;

use crate::types::{Edge, NodeKey};

/// Mapping from node key to the keys reachable over one edge.
///
/// Every node owns an entry, possibly empty. An edge `s -> d` puts `d` in
/// `s`'s list, and also `s` in `d`'s list when the graph is undirected. A
/// self-loop contributes a single entry. Parallel edges contribute one entry
/// each, so list length is the degree.
///
/// Only [`GraphStore`](super::GraphStore) mutates the index.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    lists: IndexMap<NodeKey, Vec<NodeKey>>,
}

impl AdjacencyIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index for `nodes` from scratch.
    pub fn build<'a>(
        nodes: impl IntoIterator<Item = NodeKey>,
        edges: impl IntoIterator<Item = &'a Edge>,
        directed: bool,
    ) -> Self {
        let mut index = Self::new();
        index.rebuild(nodes, edges, directed);
        index
    }

    /// Clear the index and re-derive it in one pass over the edges.
    pub(crate) fn rebuild<'a>(
        &mut self,
        nodes: impl IntoIterator<Item = NodeKey>,
        edges: impl IntoIterator<Item = &'a Edge>,
        directed: bool,
    ) {
        self.lists.clear();
        for key in nodes {
            self.lists.insert(key, Vec::new());
        }
        for edge in edges {
            self.link(edge, directed);
        }
    }

    /// Give a new node an empty entry.
    pub(crate) fn insert_node(&mut self, key: NodeKey) {
        self.lists.entry(key).or_default();
    }

    /// Add the entries contributed by `edge`.
    pub(crate) fn link(&mut self, edge: &Edge, directed: bool) {
        self.lists
            .entry(edge.source)
            .or_default()
            .push(edge.destination);
        if !directed && edge.source != edge.destination {
            self.lists
                .entry(edge.destination)
                .or_default()
                .push(edge.source);
        }
    }

    /// Neighbor list of `key`, if the node exists.
    pub fn neighbors(&self, key: NodeKey) -> Option<&[NodeKey]> {
        self.lists.get(&key).map(Vec::as_slice)
    }

    /// Number of entries in `key`'s list, if the node exists.
    pub fn degree(&self, key: NodeKey) -> Option<usize> {
        self.lists.get(&key).map(Vec::len)
    }

    /// True when `to` appears in `from`'s list.
    pub fn contains(&self, from: NodeKey, to: NodeKey) -> bool {
        self.lists
            .get(&from)
            .is_some_and(|list| list.contains(&to))
    }

    /// Number of nodes with an entry.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// True when no node has an entry.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Iterate `(node, neighbors)` in node insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &[NodeKey])> {
        self.lists.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

/// Key order is irrelevant; list order is significant.
impl PartialEq for AdjacencyIndex {
    fn eq(&self, other: &Self) -> bool {
        self.lists == other.lists
    }
}

impl Eq for AdjacencyIndex {}
