//! Slot storage: a local key-value store holding one string value per key.
//!
//! The record store persists its whole sequence into a single slot. Backends
//! are injected through the [`SlotStorage`] trait so tests can use the
//! in-memory fake and the CLI can use files on disk.

mod file;
mod memory;
mod traits;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use traits::SlotStorage;
