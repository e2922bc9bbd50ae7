//! In-memory graph store for directed/undirected and simple/multi graphs.
//!
//! [`GraphStore`] owns nodes, edges, topology options and a derived
//! [`AdjacencyIndex`]. Every mutation goes through the store, which keeps the
//! index in step with the edge set. Operations that would break an invariant
//! fail with a [`GraphError`] and change nothing.
//!
//! ```
//! use graph_store::{EdgeConfig, GraphOptions, GraphStore, NodeConfig};
//!
//! let mut graph = GraphStore::with_options(GraphOptions::directed());
//! graph.create_node(1, NodeConfig::labeled("a")).unwrap();
//! graph.create_node(2, NodeConfig::default()).unwrap();
//! graph.create_edge(10, 1, 2, EdgeConfig::default().weight(3)).unwrap();
//!
//! assert_eq!(graph.neighbors(1).unwrap(), &[2]);
//! assert!(graph.neighbors(2).unwrap().is_empty());
//! ```

pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{GraphReader, GraphWriter};
pub use graph::{AdjacencyIndex, DegreeStats, GraphBuilder, GraphStore, SharedGraph};
pub use types::{
    Edge, EdgeConfig, EdgeKey, Endpoint, EntityKind, GraphError, GraphOptions, GraphResult, Node,
    NodeConfig, NodeKey, OptionsUpdate, Weight,
};
