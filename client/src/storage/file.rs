//! JSON-file storage.
//!
//! The whole key space lives in one JSON object; every write serializes the
//! full map and replaces the file. Local writes are sub-millisecond, and the
//! stores never block reads on them.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::{Storage, StorageError};

/// File-backed [`Storage`]. The map is hydrated once at open; reads are
/// served from memory and writes rewrite the file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    map: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Open (or create) storage at `path`.
    ///
    /// An unreadable or corrupt file starts the map empty rather than
    /// failing: the storage is a best-effort local cache and the session
    /// simply comes up unauthenticated.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let map = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => map,
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "storage file is corrupt, starting empty"
                    );
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path,
            map: RwLock::new(map),
        })
    }

    fn flush(&self, map: &HashMap<String, String>) -> Result<(), StorageError> {
        let contents = serde_json::to_string(map)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.map.write();
        map.insert(key.to_string(), value.to_string());
        self.flush(&map)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.map.write();
        map.remove(key);
        self.flush(&map)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut map = self.map.write();
        map.clear();
        self.flush(&map)
    }
}
