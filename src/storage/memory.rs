//! In-process key-value store

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use super::KeyValueStore;
use crate::error::{LedgerError, LedgerResult};

/// Keeps values in memory; nothing survives the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.data.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> LedgerResult<Option<Value>> {
        let data = self.data.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(key).cloned())
    }

    fn save(&self, key: &str, value: &Value) -> LedgerResult<()> {
        let mut data = self.data.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.insert(key.to_string(), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_overwrites() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.save("k", &json!([1])).unwrap();
        store.save("k", &json!([1, 2])).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.load("k").unwrap(), Some(json!([1, 2])));
    }
}
