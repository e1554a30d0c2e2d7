//! Backends holding the serialized leaderboard.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{Error, Result};

/// Raw access to the serialized leaderboard
///
/// Reads and writes are whole-store operations. There is no locking between
/// a read and the following write, so two writers racing on the same store
/// can lose an update.
pub trait RecordStore {
    /// Read the whole store. `Ok(None)` means the store does not exist yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the whole store with `contents`.
    fn write(&self, contents: &str) -> Result<()>;

    /// Human-readable location, used in logs
    fn location(&self) -> String;
}

/// Leaderboard kept in a text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(crate::config::store::DEFAULT_PATH)
    }
}

impl RecordStore for FileStore {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn write(&self, contents: &str) -> Result<()> {
        fs::write(&self.path, contents).map_err(Error::StoreWrite)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    contents: Option<String>,
    fail_writes: bool,
    writes: usize,
}

/// In-memory store
///
/// Clones share the same buffer, so a test can keep a handle while a session
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    /// Create a store that does not exist yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `contents`
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let store = Self::new();
        store.lock().contents = Some(contents.into());
        store
    }

    /// Current contents, `None` if never written
    pub fn contents(&self) -> Option<String> {
        self.lock().contents.clone()
    }

    /// Make subsequent writes fail with a write error
    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Number of successful writes
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RecordStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.lock().contents.clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        let mut state = self.lock();
        if state.fail_writes {
            return Err(Error::StoreWrite(std::io::Error::other(
                "memory store rejects writes",
            )));
        }
        state.contents = Some(contents.to_string());
        state.writes += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_missing_is_absent() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("record.csv"));
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_file_store_write_replaces_contents() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("record.csv"));

        store.write("Alice;300\nBob;150\n").unwrap();
        store.write("Carol;200\n").unwrap();

        assert_eq!(store.read().unwrap().as_deref(), Some("Carol;200\n"));
    }

    #[test]
    fn test_file_store_write_failure() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("missing").join("record.csv"));

        let err = store.write("Alice;300\n").unwrap_err();
        assert!(err.is_write_failure());
    }

    #[test]
    fn test_file_store_default_path() {
        let store = FileStore::default();
        assert_eq!(store.path(), Path::new("record.csv"));
        assert_eq!(store.location(), "record.csv");
    }

    #[test]
    fn test_memory_store_shares_state() {
        let store = MemoryStore::new();
        let handle = store.clone();

        assert!(store.read().unwrap().is_none());
        store.write("Alice;300\n").unwrap();

        assert_eq!(handle.contents().as_deref(), Some("Alice;300\n"));
        assert_eq!(handle.write_count(), 1);
    }

    #[test]
    fn test_memory_store_fail_writes() {
        let store = MemoryStore::with_contents("Alice;300\n");
        store.set_fail_writes(true);

        assert!(store.write("Bob;150\n").unwrap_err().is_write_failure());
        assert_eq!(store.contents().as_deref(), Some("Alice;300\n"));
        assert_eq!(store.write_count(), 0);
    }
}
