//! Durable preference persistence with failure isolation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the language and theme resolvers touch storage, always in response to
//! a single user event on the UI thread.
//!
//! ERROR HANDLING
//! ==============
//! Backends report failures as `StorageError`; `PreferenceStore` swallows and
//! logs them so a broken or full `localStorage` only costs durability for the
//! current session.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Storage key for the persisted language code.
pub const LANGUAGE_KEY: &str = "language";
/// Storage key for the persisted theme name.
pub const THEME_KEY: &str = "theme";

/// Errors produced by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area is reachable (no window, disabled by the browser, etc.).
    #[error("storage unavailable")]
    Unavailable,

    /// Reading a key failed.
    #[error("storage read failed: {0}")]
    Read(String),

    /// Writing a key failed (quota exceeded, private mode, etc.).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// A string key-value area that may fail on every call.
pub trait StorageBackend {
    /// Read `key`, returning `Ok(None)` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backend. Clones share the same map, so a clone handed to a fresh
/// `PreferenceStore` behaves like the same storage seen after a reload.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    /// Remove every stored key, as a user clearing site data would.
    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage` backend.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn area() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| {
                log::warn!("localStorage access denied: {e:?}");
                StorageError::Unavailable
            })?
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::area()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::area()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

/// Preference reads and writes that never fail.
#[derive(Clone, Debug, Default)]
pub struct PreferenceStore<B> {
    backend: B,
}

impl<B: StorageBackend> PreferenceStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read a preference, surfacing backend failures to callers that
    /// fall back differently for "unreadable" and "never written".
    ///
    /// # Errors
    ///
    /// Returns the backend's `StorageError`.
    pub fn try_read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.backend.get_item(key)
    }

    /// Read a preference. Backend failures are logged and read as absent.
    pub fn read(&self, key: &str) -> Option<String> {
        match self.try_read(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("preference read failed for {key:?}: {e}");
                None
            }
        }
    }

    /// Write a preference. A failed write is logged and otherwise ignored.
    pub fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.backend.set_item(key, value) {
            log::warn!("preference write failed for {key:?}: {e}");
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// The preference store for the current environment.
///
/// Browser `localStorage` when hydrated; an empty in-memory store during
/// server rendering, so SSR output always uses the defaults.
pub fn session_store() -> PreferenceStore<impl StorageBackend> {
    #[cfg(feature = "hydrate")]
    {
        PreferenceStore::new(BrowserStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        PreferenceStore::new(MemoryStorage::default())
    }
}
