//! Serde shapes of the JSON snapshot.
//!
//! ```json
//! {
//!   "nodes":   [ { "key": 1, "label": "a" } ],
//!   "edges":   [ { "key": 1, "source": 1, "destination": 2, "weight": 0, "label": "" } ],
//!   "options": { "isMulti": false, "IsDirected": false }
//! }
//! ```
//!
//! The adjacency index is never written and any `adjacencyMap` present in
//! input is ignored.

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeOwned, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Edge, GraphOptions, Node};

/// Borrowed view written by [`GraphWriter`](super::GraphWriter).
#[derive(Debug, Serialize)]
pub(crate) struct SnapshotOut<'a> {
    pub nodes: Vec<&'a Node>,
    pub edges: Vec<&'a Edge>,
    pub options: GraphOptions,
}

/// Owned form read by [`GraphReader`](super::GraphReader).
#[derive(Debug, Deserialize)]
pub(crate) struct SnapshotIn {
    #[serde(default, deserialize_with = "nodes")]
    pub nodes: Collection<Node>,
    #[serde(default, deserialize_with = "edges")]
    pub edges: Collection<Edge>,
    #[serde(default)]
    pub options: GraphOptions,
}

/// Entities as a plain list, or as an object keyed by the stringified key.
///
/// `null` reads as an empty list.
#[derive(Debug)]
pub(crate) enum Collection<T> {
    List(Vec<T>),
    Keyed(Vec<(String, T)>),
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

fn nodes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Collection<Node>, D::Error> {
    deserializer.deserialize_any(CollectionVisitor::new("nodes"))
}

fn edges<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Collection<Edge>, D::Error> {
    deserializer.deserialize_any(CollectionVisitor::new("edges"))
}

/// Reads one snapshot collection. Errors name the field and the entry.
struct CollectionVisitor<T> {
    field: &'static str,
    marker: PhantomData<T>,
}

impl<T: DeserializeOwned> CollectionVisitor<T> {
    fn new(field: &'static str) -> Self {
        Self {
            field,
            marker: PhantomData,
        }
    }

    fn entity<E: de::Error>(&self, value: Value, at: &str) -> Result<T, E> {
        serde_json::from_value(value).map_err(|e| E::custom(format!("{}{at}: {e}", self.field)))
    }
}

impl<'de, T: DeserializeOwned> Visitor<'de> for CollectionVisitor<T> {
    type Value = Collection<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a list or keyed object of {}", self.field)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Collection::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Collection::default())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::new();
        while let Some(value) = seq.next_element::<Value>()? {
            let item = self.entity::<A::Error>(value, &format!("[{}]", items.len()))?;
            items.push(item);
        }
        Ok(Collection::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        while let Some((name, value)) = map.next_entry::<String, Value>()? {
            if !seen.insert(name.clone()) {
                return Err(de::Error::custom(format!(
                    "{}: duplicate entry \"{name}\"",
                    self.field
                )));
            }
            let item = self.entity::<A::Error>(value, &format!("[\"{name}\"]"))?;
            items.push((name, item));
        }
        Ok(Collection::Keyed(items))
    }
}

/// Entities that carry their own key.
pub(crate) trait Keyed {
    fn key(&self) -> u64;
}

impl Keyed for Node {
    fn key(&self) -> u64 {
        self.key
    }
}

impl Keyed for Edge {
    fn key(&self) -> u64 {
        self.key
    }
}

impl<T: Keyed> Collection<T> {
    /// Flatten into a list. Keyed objects are ordered by numeric key and each
    /// object key must match the entity's own key.
    pub fn into_entries(self, what: &str) -> Result<Vec<T>, String> {
        match self {
            Self::List(items) => Ok(items),
            Self::Keyed(entries) => {
                let mut items = Vec::with_capacity(entries.len());
                for (name, item) in entries {
                    match name.parse::<u64>() {
                        Ok(key) if key == item.key() => items.push(item),
                        _ => {
                            return Err(format!(
                                "{what} entry \"{name}\" does not match its key {}",
                                item.key()
                            ))
                        }
                    }
                }
                items.sort_by_key(|item| item.key());
                Ok(items)
            }
        }
    }
}
