//! Deduplication of previously accepted messages
//!
//! A message key is the message trimmed, with whitespace runs collapsed to a
//! single space, lower-cased. Keys are only ever added.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Normalize message text into its deduplication key
pub fn message_key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Set of keys for messages that already produced a transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DedupIndex {
    keys: BTreeSet<String>,
}

impl DedupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Record a key; returns false if it was already present
    pub fn record(&mut self, key: impl Into<String>) -> bool {
        self.keys.insert(key.into())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }
}

impl FromIterator<String> for DedupIndex {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
