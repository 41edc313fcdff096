//! In-memory storage for tests and ephemeral runs.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::{Storage, StorageError};

/// HashMap-backed [`Storage`]. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.map.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.map.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.map.write().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.map.write().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("token").unwrap(), None);

        storage.set("token", "abc").unwrap();
        assert_eq!(storage.get("token").unwrap(), Some("abc".to_string()));

        storage.remove("token").unwrap();
        assert_eq!(storage.get("token").unwrap(), None);
    }

    #[test]
    fn clear_removes_everything() {
        let storage = MemoryStorage::new();
        storage.set("token", "abc").unwrap();
        storage.set("cart", "[]").unwrap();

        storage.clear().unwrap();
        assert_eq!(storage.get("token").unwrap(), None);
        assert_eq!(storage.get("cart").unwrap(), None);
    }
}
