use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub(crate) const NOTES_KEY: &str = "notes";
pub(crate) const FLOATING_NOTES_KEY: &str = "floating-notes";
pub(crate) const QUICK_NOTES_KEY: &str = "quick-notes";

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to serialize `{key}`: {message}")]
    Serialize { key: String, message: String },
    #[error("failed to write `{key}`")]
    Write { key: String },
}

/// String key-value storage scoped to the visiting client.
///
/// The browser implementation is `localStorage`; tests run against
/// [`MemoryStorage`].
pub(crate) trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

pub(crate) type SharedStore = Arc<dyn KeyValueStore>;

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    pub fn shared() -> SharedStore {
        Arc::new(LocalStorage)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|_| StorageError::Write {
            key: key.to_string(),
        })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Write {
            key: key.to_string(),
        })?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

pub(crate) fn load_json_from_storage<T: for<'de> Deserialize<'de>>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Option<T> {
    let json = store.get(key)?;
    match serde_json::from_str(&json) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding unparsable stored value");
            None
        }
    }
}

pub(crate) fn save_json_to_storage<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    store.set(key, &json)
}
