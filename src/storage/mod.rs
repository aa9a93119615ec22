//! Storage layer for smsledger
//!
//! Persistence is a plain key-value contract: a value is loaded and saved as
//! a whole under a string key. `JsonFileStore` keeps one JSON file per key in
//! the data directory; `MemoryStore` keeps everything in process.

pub mod file_io;
pub mod file_store;
pub mod memory;

pub use file_io::{read_json, write_json_atomic};
pub use file_store::JsonFileStore;
pub use memory::MemoryStore;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{LedgerError, LedgerResult};

/// Key under which the transaction list is stored
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Key under which accepted SMS message keys are stored
pub const SMS_HASHES_KEY: &str = "sms_hashes";

/// Whole-value persistence keyed by name
pub trait KeyValueStore {
    /// Load the value stored under `key`, or `None` if nothing was saved
    fn load(&self, key: &str) -> LedgerResult<Option<Value>>;

    /// Replace the value stored under `key`
    fn save(&self, key: &str, value: &Value) -> LedgerResult<()>;
}

/// Load and deserialize a typed value
pub fn load_as<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> LedgerResult<Option<T>> {
    match store.load(key)? {
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| LedgerError::Storage(format!("Failed to decode '{}': {}", key, e))),
        None => Ok(None),
    }
}

/// Serialize and save a typed value
pub fn save_as<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, data: &T) -> LedgerResult<()> {
    let value = serde_json::to_value(data)
        .map_err(|e| LedgerError::Storage(format!("Failed to encode '{}': {}", key, e)))?;
    store.save(key, &value)
}
