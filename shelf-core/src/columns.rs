//! Persisted column visibility
//!
//! Stored per entity under `"<entity>-table-visibility"` as a JSON list of
//! hidden column keys. Independent of the URL.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use shelf_common::EntityCatalog;
use tracing::warn;

use crate::error::StorageError;

/// String key-value persistence (localStorage in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and non-browser targets
#[derive(Debug, Clone, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
    hidden: BTreeSet<String>,
}

impl ColumnVisibility {
    /// Load the saved visibility. Missing or unreadable data means all
    /// columns are shown.
    pub fn load(store: &dyn KeyValueStore, catalog: &EntityCatalog) -> Self {
        let key = catalog.visibility_key();
        let Some(raw) = store.get(&key) else {
            return Self::default();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(hidden) => Self {
                hidden: hidden.into_iter().collect(),
            },
            Err(e) => {
                warn!("Ignoring corrupt column visibility under '{key}': {e}");
                Self::default()
            }
        }
    }

    pub fn save(
        &self,
        store: &dyn KeyValueStore,
        catalog: &EntityCatalog,
    ) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.hidden)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        store.set(&catalog.visibility_key(), &json)
    }

    pub fn is_visible(&self, column: &str) -> bool {
        !self.hidden.contains(column)
    }

    pub fn toggled(&self, column: &str) -> Self {
        let mut hidden = self.hidden.clone();
        if !hidden.remove(column) {
            hidden.insert(column.to_string());
        }
        Self { hidden }
    }

    pub fn hidden(&self) -> impl Iterator<Item = &str> {
        self.hidden.iter().map(String::as_str)
    }
}
