//! localStorage-backed key-value store

use shelf_core::{KeyValueStore, StorageError};

fn get_storage() -> Option<web_sys_x::Storage> {
    web_sys_x::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Browser localStorage. Reads yield nothing when storage is unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }
}
