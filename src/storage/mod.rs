//! Key-value persistence split across backends. The store only ever talks to
//! the [`KeyValueStorage`] trait, so swapping SQLite for the in-memory map in
//! tests needs no changes above this module.

mod connection;
mod memory;
mod sqlite;

use thiserror::Error;

pub use connection::open_storage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String-keyed, string-valued storage. Writes overwrite whatever was stored
/// under the same key.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a key that was never written is not an error. The store
    /// never removes its key; this completes the storage contract for other
    /// callers such as maintenance tooling and tests.
    fn remove_item(&mut self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_not_tied_to_a_location() {
        let err = StorageError::from(std::io::Error::other("disk full"));
        assert_eq!(err.to_string(), "storage I/O error: disk full");
    }
}
