//! Error types for the graph store.

use thiserror::Error;

use super::{EdgeKey, Endpoint, NodeKey};

/// Which keyed collection an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// The node collection.
    Node,
    /// The edge collection.
    Edge,
}

impl EntityKind {
    /// Return a human-readable name for this entity kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Node => "Node",
            Self::Edge => "Edge",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// All errors that can occur in the graph store.
///
/// A failed operation never leaves the store partially mutated.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node or edge with this key already exists.
    #[error("{kind} with key {key} already exists")]
    DuplicateKey { kind: EntityKind, key: u64 },

    /// The requested node or edge does not exist.
    #[error("{kind} with key {key} does not exist")]
    NotFound { kind: EntityKind, key: u64 },

    /// An edge references a node that does not exist.
    #[error("Edge {edge} has a dangling {endpoint}: node {node} does not exist")]
    DanglingEndpoint {
        edge: EdgeKey,
        endpoint: Endpoint,
        node: NodeKey,
    },

    /// The graph is not a multigraph and the pair is already connected.
    #[error("Nodes {from} and {to} are already connected")]
    DuplicateConnection { from: NodeKey, to: NodeKey },

    /// Snapshot is malformed or structurally invalid.
    #[error("Invalid snapshot: {0}")]
    Format(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A thread panicked while holding the shared graph lock.
    #[error("Graph lock poisoned")]
    LockPoisoned,
}

impl GraphError {
    pub(crate) fn node_exists(key: NodeKey) -> Self {
        Self::DuplicateKey {
            kind: EntityKind::Node,
            key,
        }
    }

    pub(crate) fn edge_exists(key: EdgeKey) -> Self {
        Self::DuplicateKey {
            kind: EntityKind::Edge,
            key,
        }
    }

    pub(crate) fn node_not_found(key: NodeKey) -> Self {
        Self::NotFound {
            kind: EntityKind::Node,
            key,
        }
    }

    pub(crate) fn edge_not_found(key: EdgeKey) -> Self {
        Self::NotFound {
            kind: EntityKind::Edge,
            key,
        }
    }
}

/// Convenience result type for graph store operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_entity() {
        assert_eq!(
            GraphError::node_exists(5).to_string(),
            "Node with key 5 already exists"
        );
        assert_eq!(
            GraphError::edge_not_found(0).to_string(),
            "Edge with key 0 does not exist"
        );
        let err = GraphError::DanglingEndpoint {
            edge: 1,
            endpoint: Endpoint::Destination,
            node: 20,
        };
        assert_eq!(
            err.to_string(),
            "Edge 1 has a dangling destination: node 20 does not exist"
        );
    }
}
