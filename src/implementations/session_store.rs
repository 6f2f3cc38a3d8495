use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::errors::StayResult;
use crate::traits::SessionStore;

/// Session store kept in a JSON object on disk
///
/// The file is re-read on every access, so two processes see each other's
/// writes. An unreadable or corrupt file reads as empty.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!("Ignoring unreadable session file {}: {}", self.path.display(), e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> StayResult<()> {
        if entries.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;
        debug!("Session file written to {}", self.path.display());
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> StayResult<Option<String>> {
        Ok(self.read_all().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StayResult<()> {
        let mut entries = self.read_all();
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> StayResult<()> {
        let mut entries = self.read_all();
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

/// In-process store, for tests and one-shot sessions
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: BTreeMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> StayResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StayResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StayResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
