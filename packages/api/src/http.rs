//! [`HttpBackend`]: the [`Backend`] over JSON/HTTP with `reqwest`.
//!
//! The same client compiles natively and for `wasm32` (where `reqwest` goes
//! through the browser `fetch`).

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::{InformationRecord, UserAccount};

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{
    DataEnvelope, LoginRequest, LoginResponse, NewInformation, NewUserAccount, ProfileResponse,
    UserUpdate,
};

#[derive(Clone, Debug)]
pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send the request and turn non-success statuses into [`ApiError`].
    async fn execute(&self, request: RequestBuilder, endpoint: &str) -> Result<Response, ApiError> {
        let response = request.send().await.inspect_err(|e| {
            tracing::error!(endpoint, error = %e, "request failed before a response");
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status.as_u16(), &body);
        tracing::warn!(endpoint, status = status.as_u16(), error = %err, "backend rejected request");
        Err(err)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        self.execute(request, endpoint)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<Vec<T>, ApiError> {
        let envelope: DataEnvelope<T> = self.fetch_json(request, endpoint).await?;
        Ok(envelope.data)
    }
}

impl Backend for HttpBackend {
    async fn login(&self, email: &str, access_code: &str) -> Result<String, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: access_code.to_string(),
        };
        let request = self.client.post(self.url("auth/login")).json(&body);
        let response: LoginResponse = self.fetch_json(request, "auth/login").await?;
        Ok(response.token)
    }

    async fn profile(&self, token: &str) -> Result<ProfileResponse, ApiError> {
        let request = self
            .client
            .get(self.url("informations/profile"))
            .bearer_auth(token);
        self.fetch_json(request, "informations/profile").await
    }

    async fn my_informations(&self, token: &str) -> Result<Vec<InformationRecord>, ApiError> {
        let request = self
            .client
            .get(self.url("informations/my-informations"))
            .bearer_auth(token);
        self.fetch_list(request, "informations/my-informations").await
    }

    async fn all_informations(
        &self,
        token: &str,
        query: &[(&'static str, String)],
    ) -> Result<Vec<InformationRecord>, ApiError> {
        let request = self
            .client
            .get(self.url("informations/all-informations"))
            .bearer_auth(token)
            .query(query);
        self.fetch_list(request, "informations/all-informations").await
    }

    async fn authorized_view(
        &self,
        token: &str,
        query: &[(&'static str, String)],
    ) -> Result<Vec<InformationRecord>, ApiError> {
        let request = self
            .client
            .get(self.url("informations/my-view"))
            .bearer_auth(token)
            .query(query);
        self.fetch_list(request, "informations/my-view").await
    }

    async fn submit_information(&self, token: &str, record: &NewInformation) -> Result<(), ApiError> {
        let request = self
            .client
            .post(self.url("informations/add"))
            .bearer_auth(token)
            .json(record);
        self.execute(request, "informations/add").await.map(|_| ())
    }

    async fn list_users(&self, token: &str) -> Result<Vec<UserAccount>, ApiError> {
        let request = self
            .client
            .get(self.url("informations/users"))
            .bearer_auth(token);
        self.fetch_list(request, "informations/users").await
    }

    async fn create_user(&self, token: &str, account: &NewUserAccount) -> Result<(), ApiError> {
        let request = self
            .client
            .post(self.url("informations/users"))
            .bearer_auth(token)
            .json(account);
        self.execute(request, "informations/users").await.map(|_| ())
    }

    async fn update_user(&self, token: &str, id: &str, update: &UserUpdate) -> Result<(), ApiError> {
        let request = self
            .client
            .put(self.url(&format!("informations/users/{id}")))
            .bearer_auth(token)
            .json(update);
        self.execute(request, "informations/users/:id").await.map(|_| ())
    }

    async fn delete_user(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let request = self
            .client
            .delete(self.url(&format!("informations/users/{id}")))
            .bearer_auth(token);
        self.execute(request, "informations/users/:id").await.map(|_| ())
    }
}
