//! All data types for the graph store.

pub mod edge;
pub mod error;
pub mod node;
pub mod options;

pub use edge::{Edge, EdgeConfig, Endpoint};
pub use error::{EntityKind, GraphError, GraphResult};
pub use node::{Node, NodeConfig};
pub use options::{GraphOptions, OptionsUpdate};

/// Node key. Zero is an ordinary key.
pub type NodeKey = u64;

/// Edge key, drawn from its own namespace.
pub type EdgeKey = u64;

/// Edge weight.
pub type Weight = u64;
