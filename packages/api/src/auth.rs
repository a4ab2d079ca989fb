//! Profile Resolver.
//!
//! Exchanges a bearer token for the authoritative [`Profile`]. It runs on every
//! session (re)validation; a persisted profile is never trusted on its own.

use store::Profile;

use crate::backend::Backend;

/// Resolve the profile behind `token`.
///
/// Any failure (rejection, transport, undecodable body) yields `None`. The
/// caller treats that as an invalid session; there is no retry.
pub async fn resolve_profile<B: Backend>(backend: &B, token: &str) -> Option<Profile> {
    match backend.profile(token).await {
        Ok(response) => Some(response.into_profile()),
        Err(e) => {
            tracing::warn!(error = %e, "profile resolution failed");
            None
        }
    }
}
