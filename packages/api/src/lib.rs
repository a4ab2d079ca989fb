//! # API crate: backend contract for the intelligence client
//!
//! Everything the client knows about the REST backend lives here. The backend
//! itself is an external collaborator; this crate only describes and consumes
//! its contract.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`Backend`] trait: one async method per endpoint |
//! | [`http`] | [`HttpBackend`], the `reqwest` implementation (native and WASM) |
//! | [`error`] | [`ApiError`], the read/write failure taxonomy and its user-facing messages |
//! | [`auth`] | Profile Resolver: turns a bearer token into a [`store::Profile`] |
//! | [`models`] | Wire DTOs for requests and for responses that are not domain models |
//!
//! ## Endpoints
//!
//! | Method | Path | Backend method |
//! |--------|------|----------------|
//! | `POST` | `/auth/login` | `login` |
//! | `GET` | `/informations/profile` | `profile` |
//! | `GET` | `/informations/my-informations` | `my_informations` |
//! | `GET` | `/informations/all-informations` | `all_informations` |
//! | `GET` | `/informations/my-view` | `authorized_view` |
//! | `POST` | `/informations/add` | `submit_information` |
//! | `GET`/`POST` | `/informations/users` | `list_users` / `create_user` |
//! | `PUT`/`DELETE` | `/informations/users/:id` | `update_user` / `delete_user` |

pub mod auth;
pub mod backend;
pub mod error;
pub mod http;
pub mod models;

pub use auth::resolve_profile;
pub use backend::{Backend, Query};
pub use error::ApiError;
pub use http::HttpBackend;
pub use models::{NewInformation, NewUserAccount, ProfileResponse, UserUpdate};

pub use store::{InformationRecord, Profile, Role, UserAccount};
