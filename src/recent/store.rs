/// Key-value persistence backends for session state.
///
/// The recent list only needs string get/set under a fixed key, the same shape
/// as browser local storage. [`FileStore`] maps that onto a single JSON object on
/// disk; [`MemoryStore`] keeps everything in process.
use std::collections::HashMap;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::warn;
use tempfile::NamedTempFile;
use thiserror::Error;

/// File name of the on-disk store inside the data directory.
pub const STORE_FILE: &str = "storage.json";

/// Errors from a persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but is not a JSON object of strings.
    #[error("Storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// No location is available for durable storage.
    #[error("No storage location available")]
    Unavailable,
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store. Contents vanish with the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Durable store backed by `<dir>/storage.json`.
///
/// Every `set` is a read-modify-write of the whole file, replaced atomically
/// through a temp file in the same directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store inside `dir`. The directory is created on first write.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(STORE_FILE),
        }
    }

    /// Store in the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` when no home directory can be resolved.
    pub fn default_location() -> Result<Self, StoreError> {
        default_data_dir()
            .map(|dir| Self::in_dir(&dir))
            .ok_or(StoreError::Unavailable)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<HashMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // Corrupt contents are discarded on write.
        let mut all = match self.read_all() {
            Ok(all) => all,
            Err(StoreError::Corrupt(_)) => HashMap::new(),
            Err(e) => return Err(e),
        };
        all.insert(key.to_owned(), value.to_owned());

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;
        let json = serde_json::to_string_pretty(&all)?;
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(json.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// The store a session writes recents to: on disk when a location exists,
/// in memory otherwise.
#[derive(Debug, Clone)]
pub enum SessionStore {
    File(FileStore),
    Memory(MemoryStore),
}

impl SessionStore {
    /// File store in `dir`, or in the platform data directory when `dir` is
    /// `None`. Falls back to memory when neither is available.
    #[must_use]
    pub fn resolve(dir: Option<&Path>) -> Self {
        let located = match dir {
            Some(dir) => Ok(FileStore::in_dir(dir)),
            None => FileStore::default_location(),
        };
        Self::from_located(located)
    }

    /// Wrap a located file store, falling back to memory on error.
    #[must_use]
    pub fn from_located(located: Result<FileStore, StoreError>) -> Self {
        match located {
            Ok(store) => Self::File(store),
            Err(e) => {
                warn!("Recent: {e}, keeping selections in memory only");
                Self::Memory(MemoryStore::new())
            }
        }
    }

    /// Backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(store) => Some(store.path()),
            Self::Memory(_) => None,
        }
    }
}

impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            Self::File(store) => store.get(key),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.set(key, value),
            Self::Memory(store) => store.set(key, value),
        }
    }
}

/// Platform data directory for this application.
#[must_use]
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("org", "sun-dashboard", "sunmenu").map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_file_store_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::in_dir(&dir.path().join("nested"));
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::in_dir(&dir.path().join("nested"));
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        let reopened = FileStore::in_dir(&dir.path().join("nested"));
        assert_eq!(reopened.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(reopened.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_store_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STORE_FILE), "[1, 2").unwrap();
        let mut store = FileStore::in_dir(dir.path());
        assert!(matches!(store.get("k"), Err(StoreError::Corrupt(_))));

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_write_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::in_dir(dir.path());
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, [STORE_FILE]);
        let content = fs::read_to_string(store.path()).unwrap();
        let parsed: HashMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.get("a").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_session_store_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::resolve(Some(dir.path()));
        assert_eq!(store.path(), Some(dir.path().join(STORE_FILE).as_path()));
        store.set("k", "v").unwrap();
        assert_eq!(FileStore::in_dir(dir.path()).get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_session_store_without_location_uses_memory() {
        let mut store = SessionStore::from_located(Err(StoreError::Unavailable));
        assert!(matches!(store, SessionStore::Memory(_)));
        assert_eq!(store.path(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
