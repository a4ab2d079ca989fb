//! Shared session-store constructor for all platforms.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **WASM without `web`**: in-memory, nothing survives a reload
//! - **Native**: filesystem via [`store::FileStore`]

use store::SessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Directory name used under the platform data dir on native builds.
#[cfg(not(target_arch = "wasm32"))]
const APP_DIR: &str = "market-intel";

/// Create a platform-appropriate session store with the given token lifetime.
pub fn make_session_store(lifetime_days: u32) -> SessionStore<PlatformStore> {
    SessionStore::new(platform_store()).with_lifetime_days(lifetime_days)
}

fn platform_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(APP_DIR);
        store::FileStore::new(base)
    }
}
