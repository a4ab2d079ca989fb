//! # Key-value persistence seam
//!
//! The session layer never talks to a concrete storage API. It goes through
//! [`KeyValueStore`], a small synchronous string-to-string interface with three
//! backends:
//!
//! | Backend | Platform | Module |
//! |---------|----------|--------|
//! | [`crate::MemoryStore`] | tests, headless runs | `memory` |
//! | [`crate::FileStore`] | native (one file per key) | `file_store` |
//! | `LocalStorageStore` | browser, `web` feature | `local` |
//!
//! The trait is synchronous, like `localStorage` itself: a session teardown has
//! to finish before the next user event is processed.

use crate::error::StoreError;

/// Synchronous string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
