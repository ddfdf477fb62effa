//! In-memory slot storage.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Result, RosterError};

use super::traits::SlotStorage;

/// Slot storage held in process memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage with one slot already populated.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut slots) = storage.slots.lock() {
            slots.insert(key.into(), value.into());
        }
        storage
    }

    fn lock_slots(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.slots
            .lock()
            .map_err(|_| RosterError::Storage("Memory slots poisoned".to_string()))
    }
}

impl SlotStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock_slots()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock_slots()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
