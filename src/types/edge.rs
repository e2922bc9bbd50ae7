//! Edge struct, its construction config and endpoint naming.

use serde::{Deserialize, Serialize};

use super::{EdgeKey, NodeKey, Weight};

/// One end of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Where the edge starts.
    Source,
    /// Where the edge ends.
    Destination,
}

impl Endpoint {
    /// Return a human-readable name for this endpoint.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Destination => "destination",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A stored relation `source -> destination`.
///
/// Undirected graphs store the same struct; the store reads it symmetrically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Caller-assigned unique key (separate namespace from node keys).
    pub key: EdgeKey,
    /// Source node key.
    pub source: NodeKey,
    /// Destination node key.
    pub destination: NodeKey,
    /// Edge weight, zero unless set.
    #[serde(default)]
    pub weight: Weight,
    /// Free-form display label.
    #[serde(default)]
    pub label: String,
}

impl Edge {
    /// Create an edge from its key, endpoints and config.
    pub fn new(key: EdgeKey, source: NodeKey, destination: NodeKey, config: EdgeConfig) -> Self {
        Self {
            key,
            source,
            destination,
            weight: config.weight.unwrap_or_default(),
            label: config.label.unwrap_or_default(),
        }
    }

    /// The node key at the given endpoint.
    pub fn endpoint(&self, endpoint: Endpoint) -> NodeKey {
        match endpoint {
            Endpoint::Source => self.source,
            Endpoint::Destination => self.destination,
        }
    }

    /// True when the edge touches `node` at either end.
    pub fn is_incident_to(&self, node: NodeKey) -> bool {
        self.source == node || self.destination == node
    }

    /// The `(source, destination)` pair identifying this connection.
    /// Undirected pairs are ordered smaller key first.
    pub fn connection(&self, directed: bool) -> (NodeKey, NodeKey) {
        if directed || self.source <= self.destination {
            (self.source, self.destination)
        } else {
            (self.destination, self.source)
        }
    }

    /// Apply the fields set in `config`, leaving the others untouched.
    pub fn apply(&mut self, config: EdgeConfig) {
        if let Some(weight) = config.weight {
            self.weight = weight;
        }
        if let Some(label) = config.label {
            self.label = label;
        }
    }
}

/// Optional fields for edge creation and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeConfig {
    /// Edge weight.
    pub weight: Option<Weight>,
    /// Display label.
    pub label: Option<String>,
}

impl EdgeConfig {
    /// Set the weight.
    pub fn weight(mut self, weight: Weight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_zero_and_empty() {
        let edge = Edge::new(0, 1, 2, EdgeConfig::default());
        assert_eq!(edge.weight, 0);
        assert!(edge.label.is_empty());
    }

    #[test]
    fn test_connection_respects_direction() {
        let edge = Edge::new(1, 5, 2, EdgeConfig::default());
        assert_eq!(edge.connection(true), (5, 2));
        assert_eq!(edge.connection(false), (2, 5));
        assert_eq!(
            edge.connection(false),
            Edge::new(2, 2, 5, EdgeConfig::default()).connection(false)
        );
    }

    #[test]
    fn test_apply_keeps_unset_fields() {
        let mut edge = Edge::new(1, 1, 2, EdgeConfig::default().weight(7).label("road"));
        edge.apply(EdgeConfig::default().weight(9));
        assert_eq!(edge.weight, 9);
        assert_eq!(edge.label, "road");
    }
}
