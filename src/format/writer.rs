//! Writes JSON snapshots from an in-memory graph.

use std::io::Write;
use std::path::Path;

use crate::graph::GraphStore;
use crate::types::{GraphError, GraphResult};

use super::snapshot::SnapshotOut;

/// Writer for JSON graph snapshots.
pub struct GraphWriter;

impl GraphWriter {
    fn snapshot(graph: &GraphStore) -> SnapshotOut<'_> {
        SnapshotOut {
            nodes: graph.nodes().collect(),
            edges: graph.edges().collect(),
            options: graph.options(),
        }
    }

    /// Encode a graph as compact JSON bytes.
    pub fn to_bytes(graph: &GraphStore) -> GraphResult<Vec<u8>> {
        serde_json::to_vec(&Self::snapshot(graph)).map_err(|e| GraphError::Format(e.to_string()))
    }

    /// Encode a graph as indented JSON text.
    pub fn to_string_pretty(graph: &GraphStore) -> GraphResult<String> {
        serde_json::to_string_pretty(&Self::snapshot(graph))
            .map_err(|e| GraphError::Format(e.to_string()))
    }

    /// Write a graph to any writer.
    pub fn write_to(graph: &GraphStore, writer: &mut impl Write) -> GraphResult<()> {
        serde_json::to_writer_pretty(&mut *writer, &Self::snapshot(graph)).map_err(|e| {
            if e.is_io() {
                GraphError::Io(e.into())
            } else {
                GraphError::Format(e.to_string())
            }
        })?;
        writer.flush()?;
        Ok(())
    }

    /// Write a graph to a file, replacing it if present.
    pub fn write_to_file(graph: &GraphStore, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)?;
        log::debug!(
            "wrote {} node(s), {} edge(s) to {}",
            graph.node_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(())
    }
}
