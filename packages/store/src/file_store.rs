//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] that persists each key as a small text
//! file. It is used by native builds so that a session survives a restart the
//! same way `localStorage` does in the browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── jwt_token
//! ├── token_expiration
//! └── user_profile
//! ```

use std::path::PathBuf;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for native builds.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileStore::new(dir.path().join("session"));
        store.set("jwt_token", "token-1").unwrap();

        let reopened = FileStore::new(dir.path().join("session"));
        assert_eq!(reopened.get("jwt_token").as_deref(), Some("token-1"));

        reopened.remove("jwt_token");
        assert!(store.get("jwt_token").is_none());
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        store.remove("never-written");
        assert!(store.get("never-written").is_none());
    }
}
