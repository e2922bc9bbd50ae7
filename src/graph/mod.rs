//! In-memory graph operations, the core data structure.

pub mod adjacency;
pub mod builder;
pub mod shared;
pub mod stats;
pub mod store;

pub use adjacency::AdjacencyIndex;
pub use builder::GraphBuilder;
pub use shared::SharedGraph;
pub use stats::DegreeStats;
pub use store::GraphStore;
