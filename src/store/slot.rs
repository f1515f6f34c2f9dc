//! File-backed key-value slots.
//!
//! Each key maps to one file inside the storage directory. Values are plain
//! strings; callers decide the encoding (JSON for the record list, a bare
//! decimal for the fuel price). Every write replaces the whole slot.

use crate::errors::AppResult;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SlotStore {
    root: PathBuf,
}

impl SlotStore {
    /// Open (and create if needed) a slot store rooted at `root`.
    pub fn open(root: &Path) -> AppResult<Self> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Read a slot. A missing slot is `None`; an unreadable one is reported
    /// as `None` as well so callers can fall back to their defaults.
    pub fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.slot_path(key)).ok()
    }

    /// Replace the slot content in full.
    pub fn write(&self, key: &str, value: &str) -> AppResult<()> {
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}
