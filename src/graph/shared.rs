//! Thread-safe handle around a GraphStore.

use std::sync::{Arc, RwLock};

use crate::types::{GraphError, GraphResult};

use super::GraphStore;

/// A cloneable handle that serializes access to one store.
///
/// Writers hold the lock exclusively for the whole mutation, so readers
/// never observe nodes, edges and adjacency out of step.
#[derive(Debug, Clone, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<GraphStore>>,
}

impl SharedGraph {
    /// Wrap a store.
    pub fn new(graph: GraphStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Run `f` with shared read access.
    pub fn read<T>(&self, f: impl FnOnce(&GraphStore) -> T) -> GraphResult<T> {
        let guard = self.inner.read().map_err(|_| GraphError::LockPoisoned)?;
        Ok(f(&*guard))
    }

    /// Run `f` with exclusive write access.
    pub fn write<T>(&self, f: impl FnOnce(&mut GraphStore) -> T) -> GraphResult<T> {
        let mut guard = self.inner.write().map_err(|_| GraphError::LockPoisoned)?;
        Ok(f(&mut *guard))
    }

    /// Copy of the current store.
    pub fn snapshot(&self) -> GraphResult<GraphStore> {
        self.read(GraphStore::clone)
    }
}

impl From<GraphStore> for SharedGraph {
    fn from(graph: GraphStore) -> Self {
        Self::new(graph)
    }
}
