//! The backend contract as a trait, so the action layer can run against the
//! real HTTP client in the app and against canned responses in tests.

use std::future::Future;

use store::{InformationRecord, UserAccount};

use crate::error::ApiError;
use crate::models::{NewInformation, NewUserAccount, ProfileResponse, UserUpdate};

/// Query parameters for the filtered list endpoints. Only set filters are
/// included.
pub type Query = Vec<(&'static str, String)>;

/// One async method per backend endpoint. Every method except `login` takes
/// the bearer token.
pub trait Backend {
    /// Exchange email and access code for a token.
    fn login(
        &self,
        email: &str,
        access_code: &str,
    ) -> impl Future<Output = Result<String, ApiError>>;

    fn profile(&self, token: &str) -> impl Future<Output = Result<ProfileResponse, ApiError>>;

    fn my_informations(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Vec<InformationRecord>, ApiError>>;

    fn all_informations(
        &self,
        token: &str,
        query: &[(&'static str, String)],
    ) -> impl Future<Output = Result<Vec<InformationRecord>, ApiError>>;

    fn authorized_view(
        &self,
        token: &str,
        query: &[(&'static str, String)],
    ) -> impl Future<Output = Result<Vec<InformationRecord>, ApiError>>;

    fn submit_information(
        &self,
        token: &str,
        record: &NewInformation,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn list_users(&self, token: &str) -> impl Future<Output = Result<Vec<UserAccount>, ApiError>>;

    fn create_user(
        &self,
        token: &str,
        account: &NewUserAccount,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn update_user(
        &self,
        token: &str,
        id: &str,
        update: &UserUpdate,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn delete_user(&self, token: &str, id: &str) -> impl Future<Output = Result<(), ApiError>>;
}
