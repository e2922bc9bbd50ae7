//! Node struct and its construction config.

use serde::{Deserialize, Serialize};

use super::NodeKey;

/// A graph node: a unique key plus an optional display label.
///
/// An empty label means "no label"; the snapshot format always writes the
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Caller-assigned unique key.
    pub key: NodeKey,
    /// Free-form display label.
    #[serde(default)]
    pub label: String,
}

impl Node {
    /// Create a node from a key and its config.
    pub fn new(key: NodeKey, config: NodeConfig) -> Self {
        Self {
            key,
            label: config.label.unwrap_or_default(),
        }
    }

    /// The label, or `None` when the node is unlabeled.
    pub fn label(&self) -> Option<&str> {
        if self.label.is_empty() {
            None
        } else {
            Some(&self.label)
        }
    }
}

/// Optional fields for node creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeConfig {
    /// Display label.
    pub label: Option<String>,
}

impl NodeConfig {
    /// Config carrying only a label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}
