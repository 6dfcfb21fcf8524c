//! Browser Token Storage
//!
//! `localStorage`-backed implementation of the session's durable storage.

use quicklist_core::{StorageError, TokenStorage};

#[derive(Debug, Clone)]
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        local_storage()
            .ok_or(StorageError::Unavailable)?
            .set_item(&self.key, token)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn remove(&self) -> Result<(), StorageError> {
        local_storage()
            .ok_or(StorageError::Unavailable)?
            .remove_item(&self.key)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}
