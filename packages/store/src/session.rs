//! # Session store: token, expiry and cached profile
//!
//! [`SessionStore`] owns the three persisted session keys and guarantees that
//! they are written and cleared together:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] | opaque bearer token issued by the backend |
//! | [`EXPIRES_KEY`] | absolute expiry, milliseconds since the Unix epoch |
//! | [`PROFILE_KEY`] | JSON snapshot of the [`Profile`] |
//!
//! A persisted session is only a same-session cache. Callers must re-resolve the
//! profile from the backend before trusting it.

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::models::Profile;

pub const TOKEN_KEY: &str = "jwt_token";
pub const EXPIRES_KEY: &str = "token_expiration";
pub const PROFILE_KEY: &str = "user_profile";

/// Client-side token lifetime.
pub const DEFAULT_LIFETIME_DAYS: u32 = 15;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// A complete persisted session.
#[derive(Clone, Debug, PartialEq)]
pub struct PersistedSession {
    pub token: String,
    /// Absolute expiry, milliseconds since the Unix epoch.
    pub expires_at: i64,
    pub profile: Profile,
}

impl PersistedSession {
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at
    }
}

/// Reads and writes the persisted session through a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    kv: S,
    lifetime_days: u32,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(kv: S) -> Self {
        Self {
            kv,
            lifetime_days: DEFAULT_LIFETIME_DAYS,
        }
    }

    /// Builder method to override the token lifetime.
    pub fn with_lifetime_days(mut self, days: u32) -> Self {
        self.lifetime_days = days;
        self
    }

    /// Expiry instant for a token issued at `now`.
    pub fn expiry_for(&self, now: i64) -> i64 {
        now + i64::from(self.lifetime_days) * MILLIS_PER_DAY
    }

    /// Load the persisted session.
    ///
    /// Returns `None` when any key is missing or unreadable, or when `now` has
    /// reached the expiry instant.
    pub fn load(&self, now: i64) -> Option<PersistedSession> {
        let token = self.kv.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let expires_at = self.kv.get(EXPIRES_KEY)?.trim().parse::<i64>().ok()?;
        let profile: Profile = serde_json::from_str(&self.kv.get(PROFILE_KEY)?).ok()?;
        let session = PersistedSession {
            token,
            expires_at,
            profile,
        };
        (!session.is_expired(now)).then_some(session)
    }

    /// The bearer token, if one is present and not yet expired.
    ///
    /// Unlike [`load`](Self::load) this does not need the profile snapshot.
    pub fn token(&self, now: i64) -> Option<String> {
        let token = self.kv.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let expires_at = self.kv.get(EXPIRES_KEY)?.trim().parse::<i64>().ok()?;
        (now < expires_at).then_some(token)
    }

    /// Persist all three keys. On any write failure the store is cleared so
    /// that no partial session survives.
    pub fn save(&self, session: &PersistedSession) -> Result<(), StoreError> {
        let write = || -> Result<(), StoreError> {
            let profile = serde_json::to_string(&session.profile)?;
            self.kv.set(TOKEN_KEY, &session.token)?;
            self.kv.set(EXPIRES_KEY, &session.expires_at.to_string())?;
            self.kv.set(PROFILE_KEY, &profile)?;
            Ok(())
        };
        write().inspect_err(|_| self.clear())
    }

    /// Remove every session key.
    pub fn clear(&self) {
        self.kv.remove(TOKEN_KEY);
        self.kv.remove(EXPIRES_KEY);
        self.kv.remove(PROFILE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::Role;

    const NOW: i64 = 1_714_641_300_000;

    fn session(expires_at: i64) -> PersistedSession {
        PersistedSession {
            token: "tok".into(),
            expires_at,
            profile: Profile::new("d@labo.fr", Role::Delegate, "9", None),
        }
    }

    #[test]
    fn test_save_then_load() {
        let kv = MemoryStore::new();
        let store = SessionStore::new(kv.clone());
        let s = session(store.expiry_for(NOW));
        store.save(&s).unwrap();

        assert_eq!(kv.len(), 3);
        assert_eq!(store.load(NOW), Some(s));
    }

    #[test]
    fn test_expiry_is_fifteen_days() {
        let store = SessionStore::new(MemoryStore::new());
        assert_eq!(store.expiry_for(NOW) - NOW, 15 * MILLIS_PER_DAY);
        let store = store.with_lifetime_days(1);
        assert_eq!(store.expiry_for(NOW) - NOW, MILLIS_PER_DAY);
    }

    #[test]
    fn test_load_rejects_expired() {
        let store = SessionStore::new(MemoryStore::new());
        store.save(&session(NOW)).unwrap();
        // now == expires_at counts as expired
        assert!(store.load(NOW).is_none());
        assert!(store.token(NOW).is_none());
        assert!(store.load(NOW - 1).is_some());
        assert_eq!(store.token(NOW - 1).as_deref(), Some("tok"));
    }

    #[test]
    fn test_load_requires_every_key() {
        let kv = MemoryStore::new();
        let store = SessionStore::new(kv.clone());
        store.save(&session(NOW + 1000)).unwrap();

        kv.remove(PROFILE_KEY);
        assert!(store.load(NOW).is_none());

        store.save(&session(NOW + 1000)).unwrap();
        kv.set(EXPIRES_KEY, "soon").unwrap();
        assert!(store.load(NOW).is_none());
    }

    #[test]
    fn test_clear_removes_everything() {
        let kv = MemoryStore::new();
        let store = SessionStore::new(kv.clone());
        store.save(&session(NOW + 1000)).unwrap();
        store.clear();
        assert!(kv.is_empty());
        assert!(store.load(NOW).is_none());
    }

    struct FailingProfileWrites(MemoryStore);

    impl KeyValueStore for FailingProfileWrites {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if key == PROFILE_KEY {
                return Err(StoreError::Unavailable("quota exceeded".into()));
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_partial_write_is_rolled_back() {
        let kv = MemoryStore::new();
        let store = SessionStore::new(FailingProfileWrites(kv.clone()));
        assert!(store.save(&session(NOW + 1000)).is_err());
        assert!(kv.is_empty());
    }
}
