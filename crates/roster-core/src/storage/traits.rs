//! Slot storage trait definition.

use crate::error::Result;

/// Local persistent key-value storage.
///
/// All implementations must ensure:
/// - `set` replaces the whole value of a slot
/// - a reader never observes a partially written value
/// - an absent slot reads as `Ok(None)`, not an error
pub trait SlotStorage: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::Storage` if the backend cannot be read. A slot
    /// that was never written is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::InvalidInput` if the key is not usable by the
    /// backend, or `RosterError::Storage` if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
