//! In-memory state store adapter.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::errors::StateStoreError;
use crate::ports::StateStore;

/// In-memory implementation of [`StateStore`] for testing and local
/// embedding. The real store lives inside the ledger runtime.
pub struct InMemoryStateStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryStateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored entries.
    pub fn entry_count(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// All entries under an address prefix, in unspecified order.
    pub fn entries_with_prefix(&self, prefix: &str) -> Vec<(String, Vec<u8>)> {
        self.entries
            .read()
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(addr, _)| addr.starts_with(prefix))
                    .map(|(addr, value)| (addr.clone(), value.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for InMemoryStateStore {
    fn get_state(&self, address: &str) -> Result<Option<Vec<u8>>, StateStoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StateStoreError::LockPoisoned)?;
        Ok(entries.get(address).cloned())
    }

    fn set_state(&self, address: &str, value: Vec<u8>) -> Result<(), StateStoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StateStoreError::LockPoisoned)?;
        entries.insert(address.to_string(), value);
        Ok(())
    }
}
