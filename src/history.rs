//! Snapshot history persistence
//!
//! An append-only, capacity-bounded log of valid JSON snapshots, newest
//! first, stored as a single JSON array in one file under the local data
//! directory. Every save is a read-modify-write of the whole file; a missing
//! or corrupt file reads as an empty log. No versioning, no migration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum number of entries kept; older snapshots are silently dropped.
pub const CAPACITY: usize = 20;

/// One saved snapshot of validated JSON text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub content: String,
    pub timestamp: String,
    pub size_label: String,
}

impl HistoryEntry {
    /// Build an entry for `text` stamped with the current local time.
    pub fn now(text: &str) -> Self {
        Self {
            content: text.to_string(),
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            size_label: size_label(text.len()),
        }
    }
}

/// Byte count rendered as KB with two decimals, e.g. `"1.23 KB"`.
pub fn size_label(bytes: usize) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// File-backed history log.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: `<data-local-dir>/jsonscope/history.json`.
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| Path::new(".").to_path_buf())
            .join("jsonscope")
            .join("history.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted log, newest first. Absent or unreadable data is an
    /// empty log, never an error.
    pub fn list(&self) -> Vec<HistoryEntry> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("history file unreadable, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    /// Prepend a snapshot of `text`, truncate to [`CAPACITY`], write back.
    pub fn save(&self, text: &str) -> Result<()> {
        let mut entries = self.list();
        entries.insert(0, HistoryEntry::now(text));
        entries.truncate(CAPACITY);
        self.write(&entries)
    }

    /// Delete the entire persisted log.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| {
                format!("Failed to clear history at {}", self.path.display())
            }),
        }
    }

    fn write(&self, entries: &[HistoryEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create history directory {}", parent.display())
            })?;
        }
        let serialized = serde_json::to_string(entries)?;
        std::fs::write(&self.path, serialized).with_context(|| {
            format!("Failed to write history to {}", self.path.display())
        })
    }
}
