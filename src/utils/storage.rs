// ============================================================================
// STORAGE - Key-value persistence port (localStorage in the browser)
// ============================================================================

use std::collections::HashMap;
use crate::error::ClientError;

/// Durable string storage. Values are stored raw, not JSON-encoded.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ClientError>;
    fn remove_item(&mut self, key: &str) -> Result<(), ClientError>;
}

/// In-memory store, used by tests and when localStorage is unavailable
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    rejected_key: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: &[(&str, &str)]) -> Self {
        Self {
            items: items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            rejected_key: None,
        }
    }

    /// Make writes to `key` fail, as a full or locked-down localStorage would
    pub fn reject_writes_to(mut self, key: &str) -> Self {
        self.rejected_key = Some(key.to_string());
        self
    }

    pub fn set_rejected_key(&mut self, key: Option<&str>) {
        self.rejected_key = key.map(|k| k.to_string());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
        if self.rejected_key.as_deref() == Some(key) {
            return Err(ClientError::Storage(format!("write to {} rejected", key)));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), ClientError> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::KeyValueStore;
    use crate::error::ClientError;
    use gloo_storage::{LocalStorage, Storage};

    /// `window.localStorage`
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserStore;

    impl KeyValueStore for BrowserStore {
        fn get_item(&self, key: &str) -> Option<String> {
            LocalStorage::raw().get_item(key).ok().flatten()
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), ClientError> {
            LocalStorage::raw()
                .set_item(key, value)
                .map_err(|e| ClientError::Storage(format!("Error saving {} to localStorage: {:?}", key, e)))
        }

        fn remove_item(&mut self, key: &str) -> Result<(), ClientError> {
            LocalStorage::raw()
                .remove_item(key)
                .map_err(|e| ClientError::Storage(format!("Error removing {} from localStorage: {:?}", key, e)))
        }
    }
}
