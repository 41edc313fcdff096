//! # Durable Key-Value Storage
//!
//! Local persistence for session credentials and the cart. The stores treat
//! this layer as best-effort: writes are issued on every mutation, failures
//! are logged and the in-memory state stays authoritative.
//!
//! Two implementations:
//!
//! - [`FileStorage`]: a single JSON file holding the whole key space,
//!   rewritten on every write (replace-whole-value persistence)
//! - [`MemoryStorage`]: HashMap-backed, for tests and ephemeral runs

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Persisted key space shared by the session and cart stores.
///
/// `Storage::clear` (logout) removes every key in this space.
pub mod keys {
    /// Short-lived bearer token.
    pub const TOKEN: &str = "token";
    /// Long-lived refresh credential.
    pub const CODE: &str = "code";
    /// JSON-serialized user profile.
    pub const CURRENT_USER: &str = "currentUser";
    /// JSON-serialized cart line items.
    pub const CART: &str = "cart";
}

/// Storage failure. Callers in the store layer log these and continue.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encoding error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// String key-value storage with whole-value replacement semantics.
///
/// Implementations must be safe to share across threads; the stores hold
/// them behind an `Arc`.
pub trait Storage: Send + Sync {
    /// Read a value, `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key; absent keys are not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Delete every key in the space.
    fn clear(&self) -> Result<(), StorageError>;
}
