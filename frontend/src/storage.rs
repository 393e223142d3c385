use thiserror::Error;
use web_sys::{window, Storage};

/// Key holding the visitor's language tag.
pub const LANGUAGE_KEY: &str = "selectedLang";
/// Key holding `accepted` or `declined`; absent until the visitor answers the banner.
pub const CONSENT_KEY: &str = "cookieConsent";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("failed to write `{0}` to localStorage")]
    Write(String),
    #[error("failed to remove `{0}` from localStorage")]
    Remove(String),
}

/// Durable key-value storage that outlives a single page load.
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`. Reads degrade to `None` when storage is blocked
/// (private mode, sandboxed iframes).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

impl PreferenceStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::Remove(key.to_string()))
    }
}

#[cfg(test)]
pub mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::{PreferenceStorage, StorageError};

    /// In-memory stand-in for localStorage. Clones share the same entries,
    /// which lets a test play the part of a second page load.
    #[derive(Clone, Debug, Default)]
    pub struct MemoryStorage {
        entries: Rc<RefCell<HashMap<String, String>>>,
        read_only: bool,
    }

    impl MemoryStorage {
        pub fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            storage
        }

        pub fn read_only(mut self) -> Self {
            self.read_only = true;
            self
        }
    }

    impl PreferenceStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::Write(key.to_string()));
            }
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::Remove(key.to_string()));
            }
            self.entries.borrow_mut().remove(key);
            Ok(())
        }
    }
}
