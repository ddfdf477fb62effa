//! Record store over a single storage slot.
//!
//! Every operation is a whole-sequence read followed (for mutations) by a
//! whole-sequence write. There is no locking: a single writer is assumed.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{Result, RosterError};
use crate::record::{Profile, Record};
use crate::storage::SlotStorage;

/// Slot that holds the JSON array of saved profiles.
pub const FORM_DATA_SLOT: &str = "formData";

/// Ordered sequence of [`Record`]s persisted in one slot.
pub struct RecordStore<S> {
    storage: S,
    slot: String,
}

impl<S: SlotStorage> RecordStore<S> {
    /// Store backed by the default `formData` slot.
    pub fn new(storage: S) -> Self {
        Self::with_slot(storage, FORM_DATA_SLOT)
    }

    pub fn with_slot(storage: S, slot: impl Into<String>) -> Self {
        Self {
            storage,
            slot: slot.into(),
        }
    }

    /// Load the persisted sequence.
    ///
    /// An absent slot, an unreadable backend, or content that does not decode
    /// as a record array all read as an empty sequence.
    ///
    /// Records stored without an id are given one, and the sequence is written
    /// back right away so later loads hand out the same ids.
    pub fn load_all(&self) -> Vec<Record> {
        let raw = match self.storage.get(&self.slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(slot = %self.slot, "slot is empty");
                return Vec::new();
            }
            Err(err) => {
                warn!(slot = %self.slot, error = %err, "slot read failed; treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Record>>(&raw) {
            Ok(mut records) => {
                debug!(slot = %self.slot, count = records.len(), "loaded records");
                if assign_missing_ids(&mut records) > 0 {
                    if let Err(err) = self.persist(&records) {
                        warn!(slot = %self.slot, error = %err, "could not persist assigned ids");
                    }
                }
                records
            }
            Err(err) => {
                warn!(slot = %self.slot, error = %err, "slot content is not a record array; treating as empty");
                Vec::new()
            }
        }
    }

    fn persist(&self, records: &[Record]) -> Result<()> {
        let encoded = serde_json::to_string(records)?;
        self.storage.set(&self.slot, &encoded)?;
        debug!(slot = %self.slot, count = records.len(), "persisted records");
        Ok(())
    }

    /// Append a record at the end of the sequence. No de-duplication.
    pub fn append(&self, record: Record) -> Result<()> {
        let mut records = self.load_all();
        records.push(record);
        self.persist(&records)
    }

    /// Create a record for a validated profile and append it.
    pub fn submit(&self, profile: Profile) -> Result<Record> {
        let record = Record::new(profile);
        self.append(record.clone())?;
        Ok(record)
    }

    /// Replace the element at `index` of the unfiltered sequence.
    ///
    /// Returns the record that was replaced.
    pub fn replace_at(&self, index: usize, record: Record) -> Result<Record> {
        let mut records = self.load_all();
        let len = records.len();
        let slot = records
            .get_mut(index)
            .ok_or_else(|| index_not_found(index, len))?;
        let previous = std::mem::replace(slot, record);
        self.persist(&records)?;
        Ok(previous)
    }

    /// Remove the element at `index` of the unfiltered sequence.
    pub fn delete_at(&self, index: usize) -> Result<Record> {
        let mut records = self.load_all();
        if index >= records.len() {
            return Err(index_not_found(index, records.len()));
        }
        let removed = records.remove(index);
        self.persist(&records)?;
        Ok(removed)
    }

    pub fn get(&self, id: &Uuid) -> Option<Record> {
        self.load_all().into_iter().find(|record| record.id == *id)
    }

    /// Backing index of the record with `id`.
    pub fn position(&self, id: &Uuid) -> Option<usize> {
        self.load_all().iter().position(|record| record.id == *id)
    }

    /// Replace the profile of the record with `id`, keeping its identity.
    pub fn replace(&self, id: &Uuid, profile: Profile) -> Result<Record> {
        let mut records = self.load_all();
        let slot = records
            .iter_mut()
            .find(|record| record.id == *id)
            .ok_or_else(|| id_not_found(id))?;
        let updated = slot.with_profile(profile);
        *slot = updated.clone();
        self.persist(&records)?;
        Ok(updated)
    }

    /// Remove the record with `id`.
    pub fn delete(&self, id: &Uuid) -> Result<Record> {
        let mut records = self.load_all();
        let index = records
            .iter()
            .position(|record| record.id == *id)
            .ok_or_else(|| id_not_found(id))?;
        let removed = records.remove(index);
        self.persist(&records)?;
        Ok(removed)
    }
}

/// Give every nil-id record a fresh id; returns how many were assigned.
fn assign_missing_ids(records: &mut [Record]) -> usize {
    let mut assigned = 0;
    for record in records.iter_mut().filter(|record| record.id.is_nil()) {
        record.id = Uuid::new_v4();
        assigned += 1;
    }
    assigned
}

fn index_not_found(index: usize, len: usize) -> RosterError {
    RosterError::NotFound(format!(
        "No record at index {} (store holds {})",
        index, len
    ))
}

fn id_not_found(id: &Uuid) -> RosterError {
    RosterError::NotFound(format!("Record {} not found", id))
}
