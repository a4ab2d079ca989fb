pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod kv;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use catalog::{LabCatalog, LabEntry};
pub use config::ClientConfig;
pub use error::StoreError;
pub use kv::KeyValueStore;
pub use models::{
    BusinessUnit, InformationRecord, InformationType, Profile, Role, Submitter, UserAccount,
};
pub use session::{PersistedSession, SessionStore};
