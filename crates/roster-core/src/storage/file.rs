//! File-backed slot storage.
//!
//! Each slot lives in its own `<key>.json` file inside a store directory.
//! Writes go through a temp file and a rename so a crash mid-write leaves
//! the previous value in place.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::{Result, RosterError};

use super::traits::SlotStorage;

const SLOT_EXTENSION: &str = "json";

/// Slot storage rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` as the store directory. It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File that backs `key`.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, SLOT_EXTENSION)))
    }
}

fn validate_key(key: &str) -> Result<()> {
    let usable = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if usable {
        Ok(())
    } else {
        Err(RosterError::InvalidInput(format!(
            "Slot key must be ASCII letters, digits, '-' or '_': {:?}",
            key
        )))
    }
}

impl SlotStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(RosterError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| {
            RosterError::Storage(format!(
                "Failed to create store directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        crate::fs::write_atomic(&path, value.as_bytes()).map_err(|e| {
            RosterError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_slot_reads_none() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get("formData").unwrap(), None);
    }

    #[test]
    fn test_set_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let store_dir = dir.path().join("nested").join("roster");
        let storage = FileStorage::new(&store_dir);

        storage.set("formData", "[]").unwrap();

        assert!(store_dir.join("formData.json").exists());
        assert_eq!(storage.get("formData").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(matches!(
            storage.set("../escape", "[]"),
            Err(RosterError::InvalidInput(_))
        ));
        assert!(matches!(storage.get(""), Err(RosterError::InvalidInput(_))));
    }
}
