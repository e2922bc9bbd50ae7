//! Graph topology configuration.

use serde::{Deserialize, Serialize};

/// Topology of a graph.
///
/// The default is an undirected simple graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphOptions {
    /// More than one edge may connect the same pair of endpoints.
    #[serde(rename = "isMulti", default)]
    pub multi: bool,
    /// Edges are read one-way instead of symmetrically.
    #[serde(rename = "IsDirected", default)]
    pub directed: bool,
}

impl GraphOptions {
    /// Options for a directed graph.
    pub fn directed() -> Self {
        Self {
            directed: true,
            multi: false,
        }
    }

    /// Options for an undirected graph.
    pub fn undirected() -> Self {
        Self::default()
    }

    /// Return these options with `multi` set.
    pub fn with_multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Merge an update; unset fields keep their current value.
    pub fn merged(self, update: OptionsUpdate) -> Self {
        Self {
            directed: update.directed.unwrap_or(self.directed),
            multi: update.multi.unwrap_or(self.multi),
        }
    }
}

/// A partial change to [`GraphOptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionsUpdate {
    /// New `directed` value, if changing.
    pub directed: Option<bool>,
    /// New `multi` value, if changing.
    pub multi: Option<bool>,
}

impl OptionsUpdate {
    /// Change only `directed`.
    pub fn directed(directed: bool) -> Self {
        Self {
            directed: Some(directed),
            multi: None,
        }
    }

    /// Change only `multi`.
    pub fn multi(multi: bool) -> Self {
        Self {
            directed: None,
            multi: Some(multi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_are_fixed() {
        let json = serde_json::to_value(GraphOptions::directed().with_multi(true)).unwrap();
        assert_eq!(json, serde_json::json!({"isMulti": true, "IsDirected": true}));
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let opts = GraphOptions::directed().merged(OptionsUpdate::multi(true));
        assert!(opts.directed);
        assert!(opts.multi);
    }
}
