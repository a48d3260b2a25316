// services/paymind-dash/src/storage.rs
//
// PayMind Dashboard - Browser localStorage backend for the profile record
//

use paykit::storage::KeyValueStore;
use paykit::{PayMindError, Result};

/// `window.localStorage`, re-resolved on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn handle() -> Result<web_sys::Storage> {
        leptos::window()
            .local_storage()
            .map_err(|e| PayMindError::StorageError(format!("{:?}", e)))?
            .ok_or_else(|| PayMindError::StorageError("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::handle()?
            .get_item(key)
            .map_err(|e| PayMindError::StorageError(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::handle()?
            .set_item(key, value)
            .map_err(|e| PayMindError::StorageError(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::handle()?
            .remove_item(key)
            .map_err(|e| PayMindError::StorageError(format!("{:?}", e)))
    }
}
