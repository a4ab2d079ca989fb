//! This crate contains the client core and all shared UI for the workspace.
//!
//! The non-UI modules (`scope`, `pipeline`, `wizard`, `router`, `state`,
//! `actions`, ...) are plain Rust and tested without a renderer. Components
//! read [`AppState`] through [`use_app_state`] and change it through
//! [`use_actions`].

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod accounts;
pub mod actions;
pub mod activity_log;
pub mod autocomplete;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod router;
pub mod scope;
pub mod state;
pub mod wizard;

mod platform;
pub use platform::{make_session_store, PlatformStore};

pub use actions::AppActions;
pub use activity_log::{ActivityLog, LogLevel};
pub use error::ValidationError;
pub use router::View;
pub use state::{AppState, AuthStatus, RecordCollection, StateHandle};

pub mod views;
pub use views::AppShell;

pub const APP_CSS: Asset = asset!("/assets/styling/app.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_actions, use_app_state, use_catalog, Actions, AppProvider, LogoutButton};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
