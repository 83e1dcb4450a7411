//! Durable submission counter kept in the browser's local storage.
//!
//! The counter is advisory. Storage faults are logged and swallowed: a read
//! fault reads as `0` and a failed write leaves the stored value untouched.

use log::warn;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage not available")]
    Unavailable,
    #[error("local storage read failed: {0}")]
    Read(String),
    #[error("local storage write failed: {0}")]
    Write(String),
}

/// Minimal string key-value store the counter persists into.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every access so a storage that is
/// blocked at startup and unblocked later still works.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable),
            Err(e) => Err(StorageError::Read(format!("{:?}", e))),
        }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()
            .map_err(|e| match e {
                StorageError::Read(msg) => StorageError::Write(msg),
                other => other,
            })?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

pub struct CounterStore<S = BrowserStorage> {
    storage: S,
    key: &'static str,
}

impl CounterStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStorage> CounterStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: config::COUNTER_STORAGE_KEY,
        }
    }

    /// Stored count, or 0 when missing, malformed or unreadable.
    pub fn read(&self) -> u64 {
        match self.storage.get_item(self.key) {
            Ok(Some(raw)) => parse_count(&raw),
            Ok(None) => 0,
            Err(e) => {
                warn!("Error reading submission count: {}", e);
                0
            }
        }
    }

    /// Bumps the stored count and returns the new value. On a failed write
    /// the value read before the bump is returned.
    pub fn increment(&self) -> u64 {
        let current = self.read();
        let next = current.saturating_add(1);
        match self.storage.set_item(self.key, &next.to_string()) {
            Ok(()) => next,
            Err(e) => {
                warn!("Error saving submission count: {}", e);
                current
            }
        }
    }

    pub fn reset(&self) {
        if let Err(e) = self.storage.set_item(self.key, "0") {
            warn!("Error resetting submission count: {}", e);
        }
    }
}

/// Base-10 prefix parse: surrounding whitespace is ignored and parsing stops
/// at the first non-digit. Anything without leading digits is 0.
fn parse_count(raw: &str) -> u64 {
    let trimmed = raw.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().unwrap_or(0)
}

#[cfg(test)]
pub mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::{KeyValueStorage, StorageError};

    /// In-memory storage with switchable read and write faults.
    #[derive(Default)]
    pub struct MemoryStorage {
        items: RefCell<HashMap<String, String>>,
        pub fail_reads: Cell<bool>,
        pub fail_writes: Cell<bool>,
    }

    impl MemoryStorage {
        pub fn with_item(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage.items.borrow_mut().insert(key.to_string(), value.to_string());
            storage
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }
    }

    impl KeyValueStorage for MemoryStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.fail_reads.get() {
                return Err(StorageError::Read("SecurityError".to_string()));
            }
            Ok(self.items.borrow().get(key).cloned())
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes.get() {
                return Err(StorageError::Write("QuotaExceededError".to_string()));
            }
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    impl KeyValueStorage for &MemoryStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            (**self).get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            (**self).set_item(key, value)
        }
    }
}
