//! Reads JSON snapshots into an in-memory graph.

use std::io::Read;
use std::path::Path;

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::graph::GraphStore;
use crate::types::{Edge, Endpoint, GraphError, GraphResult, Node};

use super::snapshot::SnapshotIn;

/// Reader for JSON graph snapshots.
pub struct GraphReader;

impl GraphReader {
    /// Decode and validate a snapshot from bytes.
    pub fn from_bytes(bytes: &[u8]) -> GraphResult<GraphStore> {
        let snapshot: SnapshotIn =
            serde_json::from_slice(bytes).map_err(|e| GraphError::Format(e.to_string()))?;
        Self::assemble(snapshot)
    }

    /// Decode and validate a snapshot from any reader.
    pub fn read_from(reader: impl Read) -> GraphResult<GraphStore> {
        let snapshot: SnapshotIn = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                GraphError::Io(e.into())
            } else {
                GraphError::Format(e.to_string())
            }
        })?;
        Self::assemble(snapshot)
    }

    /// Read a snapshot file.
    pub fn read_from_file(path: &Path) -> GraphResult<GraphStore> {
        let file = std::fs::File::open(path)?;
        let graph = Self::read_from(std::io::BufReader::new(file))?;
        log::debug!(
            "read {} node(s), {} edge(s) from {}",
            graph.node_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(graph)
    }

    fn assemble(snapshot: SnapshotIn) -> GraphResult<GraphStore> {
        let nodes = snapshot
            .nodes
            .into_entries("node")
            .map_err(GraphError::Format)?;
        let edges = snapshot
            .edges
            .into_entries("edge")
            .map_err(GraphError::Format)?;

        let mut node_map: IndexMap<u64, Node> = IndexMap::with_capacity(nodes.len());
        for node in nodes {
            match node_map.entry(node.key) {
                Entry::Occupied(_) => {
                    return Err(GraphError::Format(format!(
                        "duplicate node key {}",
                        node.key
                    )))
                }
                Entry::Vacant(slot) => {
                    slot.insert(node);
                }
            }
        }

        let mut edge_map: IndexMap<u64, Edge> = IndexMap::with_capacity(edges.len());
        for edge in edges {
            for endpoint in [Endpoint::Source, Endpoint::Destination] {
                let node = edge.endpoint(endpoint);
                if !node_map.contains_key(&node) {
                    return Err(GraphError::Format(format!(
                        "edge {} has a dangling {endpoint}: node {node} does not exist",
                        edge.key
                    )));
                }
            }
            match edge_map.entry(edge.key) {
                Entry::Occupied(_) => {
                    return Err(GraphError::Format(format!(
                        "duplicate edge key {}",
                        edge.key
                    )))
                }
                Entry::Vacant(slot) => {
                    slot.insert(edge);
                }
            }
        }

        let graph = GraphStore::from_parts(node_map, edge_map, snapshot.options);
        if !graph.options().multi {
            let conflicts = graph.conflicting_edges();
            if !conflicts.is_empty() {
                log::warn!(
                    "snapshot keeps {} edge(s) that duplicate a connection: {:?}",
                    conflicts.len(),
                    conflicts
                );
            }
        }
        Ok(graph)
    }
}
