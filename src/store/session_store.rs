use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{AppError, AppResult};

/// Client-local persistent storage holding one raw session record
pub trait SessionStore: Send + Sync {
    /// Returns the stored record, or `None` when nothing is stored
    fn read(&self) -> AppResult<Option<String>>;

    fn write(&self, raw: &str) -> AppResult<()>;

    /// Removes the record; removing an absent record is not an error
    fn remove(&self) -> AppResult<()>;
}

/// Session record kept in a JSON file on disk
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
}

impl SessionStore for FileSessionStore {
    fn read(&self) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, raw: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, raw)?;
        tracing::debug!(path = %self.path.display(), "Session record written");
        Ok(())
    }

    fn remove(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store, used by tests and embedders without a filesystem
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> AppResult<Option<String>> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| AppError::Session(format!("Session store poisoned: {}", e)))?;
        Ok(slot.clone())
    }

    fn write(&self, raw: &str) -> AppResult<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| AppError::Session(format!("Session store poisoned: {}", e)))?;
        *slot = Some(raw.to_string());
        Ok(())
    }

    fn remove(&self) -> AppResult<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| AppError::Session(format!("Session store poisoned: {}", e)))?;
        *slot = None;
        Ok(())
    }
}
