//! # Actions
//!
//! [`AppActions`] performs every backend round trip and applies the outcome to
//! the [`AppState`] through its transition methods. Views call these methods
//! from event handlers; nothing fetches implicitly on render.
//!
//! | Failure | Effect |
//! |---------|--------|
//! | validation | flash message, no network call |
//! | `ApiError::Unauthorized` or expired token | session cleared, state torn down, "session expired" message |
//! | other backend error on a write | flash message with the backend text or a fallback |
//! | other backend error on a list | the collection's own error slot |

use std::rc::Rc;

use api::{resolve_profile, ApiError, Backend};
use store::{clock, KeyValueStore, PersistedSession, SessionStore};

use crate::accounts::{EditAccountForm, NewAccountForm};
use crate::activity_log::LogLevel;
use crate::error::ValidationError;
use crate::export::{download_csv, records_to_csv, ExportKind, EMPTY_EXPORT_MESSAGE};
use crate::pipeline::Pipeline;
use crate::router::View;
use crate::state::{AppState, RecordCollection, StateHandle};

const LOGIN_FALLBACK: &str = "Échec de la connexion";
const PROFILE_FAILED: &str = "Erreur lors de la récupération du profil";
const SESSION_NOT_SAVED: &str = "Impossible d'enregistrer la session";
const FETCH_FALLBACK: &str = "Erreur lors de la récupération des informations.";
const SUBMIT_FALLBACK: &str = "Erreur lors de la soumission";
const SUBMITTED: &str = "Votre information a été envoyée avec succès !";
const CREATE_FALLBACK: &str = "Erreur lors de la création";
const CREATED: &str = "Utilisateur créé avec succès";
const UPDATE_FALLBACK: &str = "Erreur lors de la mise à jour";
const UPDATED: &str = "Utilisateur mis à jour";
const DELETE_FALLBACK: &str = "Erreur lors de la suppression";
const DELETED: &str = "Utilisateur supprimé";
const EXPORT_FAILED: &str = "Échec de l'export CSV";

pub struct AppActions<B, S: KeyValueStore, H> {
    backend: Rc<B>,
    session: Rc<SessionStore<S>>,
    state: H,
    now: fn() -> i64,
}

impl<B, S: KeyValueStore, H: Clone> Clone for AppActions<B, S, H> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            session: self.session.clone(),
            state: self.state.clone(),
            now: self.now,
        }
    }
}

impl<B, S, H> AppActions<B, S, H>
where
    B: Backend + 'static,
    S: KeyValueStore + 'static,
    H: StateHandle,
{
    pub fn new(backend: B, session: SessionStore<S>, state: H) -> Self {
        Self {
            backend: Rc::new(backend),
            session: Rc::new(session),
            state,
            now: clock::now_millis,
        }
    }

    /// Builder method to replace the wall clock.
    pub fn with_clock(mut self, now: fn() -> i64) -> Self {
        self.now = now;
        self
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    /// Validate the persisted session at start-up. Any failure is a silent
    /// teardown.
    pub async fn start(&self) {
        let now = (self.now)();
        let Some(persisted) = self.session.load(now) else {
            self.session.clear();
            self.state.update(AppState::teardown);
            return;
        };

        // Show the cached profile while it is re-validated.
        self.state.update(|s| s.sign_in(persisted.profile.clone()));

        let Some(profile) = resolve_profile(&*self.backend, &persisted.token).await else {
            tracing::info!("persisted session rejected at start-up");
            self.session.clear();
            self.state.update(AppState::teardown);
            return;
        };
        let refreshed = PersistedSession {
            profile: profile.clone(),
            ..persisted
        };
        if let Err(e) = self.session.save(&refreshed) {
            tracing::warn!(error = %e, "could not refresh the persisted profile");
        }
        let view = self.state.update(|s| s.refresh_profile(profile));
        self.load_view(view).await;
    }

    pub async fn login(&self, email: &str, access_code: &str) {
        let now = (self.now)();
        let email = email.trim();
        if email.is_empty() || access_code.is_empty() {
            let err = ValidationError::MissingCredentials;
            self.state.update(|s| s.flash_error(&err.to_string(), now));
            return;
        }

        self.state.update(|s| {
            s.busy = true;
            s.clear_flash();
        });
        match self.backend.login(email, access_code).await {
            Ok(token) => self.establish_session(token).await,
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                let text = match &e {
                    ApiError::Transport(_) => e.user_message(LOGIN_FALLBACK),
                    _ => e.backend_message().unwrap_or(LOGIN_FALLBACK).to_string(),
                };
                self.state.update(|s| {
                    s.busy = false;
                    s.flash_error(&text, now);
                });
            }
        }
    }

    /// Resolve the profile for a fresh token, persist the session and enter
    /// the landing view.
    async fn establish_session(&self, token: String) {
        let now = (self.now)();
        let Some(profile) = resolve_profile(&*self.backend, &token).await else {
            self.fail_sign_in(PROFILE_FAILED, now);
            return;
        };
        let persisted = PersistedSession {
            token,
            expires_at: self.session.expiry_for(now),
            profile: profile.clone(),
        };
        if let Err(e) = self.session.save(&persisted) {
            tracing::error!(error = %e, "could not persist the session");
            self.fail_sign_in(SESSION_NOT_SAVED, now);
            return;
        }
        tracing::info!(role = ?profile.role, "session established");
        let greeting = format!("Connecté en tant que {}", profile.email);
        let view = self.state.update(|s| {
            s.busy = false;
            s.log.push(LogLevel::Info, &greeting, now);
            s.sign_in(profile)
        });
        self.load_view(view).await;
    }

    fn fail_sign_in(&self, message: &str, now: i64) {
        self.session.clear();
        self.state.update(|s| {
            s.teardown();
            s.flash_error(message, now);
        });
    }

    pub fn logout(&self) {
        tracing::info!("logout");
        self.session.clear();
        self.state.update(AppState::teardown);
    }

    /// Tear down a dead session after a user action.
    fn expire(&self) {
        let now = (self.now)();
        tracing::info!("session expired");
        self.session.clear();
        self.state.update(|s| s.expire(now));
    }

    /// The bearer token, or `None` after tearing the session down.
    fn token(&self) -> Option<String> {
        let token = self.session.token((self.now)());
        if token.is_none() {
            self.expire();
        }
        token
    }

    /// Whether the session that issued a write at `epoch` is still the current one.
    fn same_session(&self, epoch: u64) -> bool {
        let current = self.state.read_with(|s| s.epoch == epoch && s.is_signed_in());
        if !current {
            tracing::debug!(epoch, "discarded write result from an ended session");
        }
        current
    }

    /// Surface a failed write.
    fn fail(&self, err: ApiError, fallback: &str) {
        if err.is_session_expired() {
            self.expire();
            return;
        }
        tracing::warn!(error = %err, "request failed");
        let now = (self.now)();
        let text = err.user_message(fallback);
        self.state.update(|s| s.flash_error(&text, now));
    }

    pub async fn navigate(&self, view: View) {
        if self.state.update(|s| s.enter_view(view)) {
            self.load_view(view).await;
        }
    }

    /// The single fetch that entering `view` triggers.
    async fn load_view(&self, view: View) {
        match view {
            View::Home => {}
            View::MySubmissions => self.refresh(RecordCollection::Mine).await,
            View::AllSubmissions => {
                self.refresh(RecordCollection::All).await;
                // the submitter selector needs the account list
                if !self.state.read_with(|s| s.users.is_loaded()) {
                    self.refresh_users().await;
                }
            }
            View::UserManagement => self.refresh_users().await,
            View::AuthorizedView => self.refresh(RecordCollection::Authorized).await,
        }
    }

    /// Fetch a record collection with its current filters.
    pub async fn refresh(&self, kind: RecordCollection) {
        let Some(token) = self.token() else {
            return;
        };
        let (seq, query) = self.state.update(|s| {
            let query = s.record_query(kind);
            (s.records_mut(kind).begin_fetch(), query)
        });
        tracing::debug!(collection = kind.name(), seq, ?query, "fetching");
        let result = match kind {
            RecordCollection::Mine => self.backend.my_informations(&token).await,
            RecordCollection::All => self.backend.all_informations(&token, &query).await,
            RecordCollection::Authorized => self.backend.authorized_view(&token, &query).await,
        };
        self.settle(kind.name(), seq, result, |s| s.records_mut(kind));
    }

    pub async fn refresh_users(&self) {
        let Some(token) = self.token() else {
            return;
        };
        let seq = self.state.update(|s| s.users.begin_fetch());
        let result = self.backend.list_users(&token).await;
        self.settle("users", seq, result, |s| &mut s.users);
    }

    fn settle<T>(
        &self,
        collection: &str,
        seq: u64,
        result: Result<Vec<T>, ApiError>,
        pipeline: impl Fn(&mut AppState) -> &mut Pipeline<T>,
    ) {
        // Checked before the 401 arm: a stale 401 belongs to an ended session.
        if !self.state.update(|s| pipeline(s).is_current(seq)) {
            tracing::debug!(collection, seq, "discarded stale response");
            return;
        }
        let outcome = match result {
            Ok(items) => Ok(items),
            Err(e) if e.is_session_expired() => {
                self.expire();
                return;
            }
            Err(e) => {
                tracing::warn!(collection, error = %e, "fetch failed");
                Err(e.user_message(FETCH_FALLBACK))
            }
        };
        let now = (self.now)();
        self.state.update(|s| {
            if let Err(text) = &outcome {
                s.log.push(LogLevel::Warning, text, now);
            }
            pipeline(s).receive(seq, outcome);
        });
    }

    /// Run the server-side filters of `kind`.
    pub async fn apply_filters(&self, kind: RecordCollection) {
        self.refresh(kind).await;
    }

    pub async fn clear_filters(&self, kind: RecordCollection) {
        self.state.update(|s| s.records_mut(kind).clear_filters());
        self.refresh(kind).await;
    }

    /// Validate and send the wizard's pending record.
    pub async fn submit_information(&self) {
        let now = (self.now)();
        let payload = self
            .state
            .read_with(|s| s.wizard.payload(clock::rfc3339(now)));
        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => {
                self.state.update(|s| s.flash_error(&e.to_string(), now));
                return;
            }
        };
        let Some(token) = self.token() else {
            return;
        };

        let epoch = self.begin_write();
        let result = self.backend.submit_information(&token, &payload).await;
        if !self.same_session(epoch) {
            return;
        }
        self.state.update(|s| s.busy = false);

        match result {
            Ok(()) => {
                tracing::info!(bu = %payload.type_bu, kind = %payload.type_info, "information submitted");
                let reload = self.state.update(|s| {
                    s.wizard.confirm_submitted();
                    s.flash_success(SUBMITTED, now);
                    s.mine.is_loaded()
                });
                if reload {
                    self.refresh(RecordCollection::Mine).await;
                }
            }
            Err(e) => self.fail(e, SUBMIT_FALLBACK),
        }
    }

    /// Returns `true` when the account was created.
    pub async fn create_user(&self, form: &NewAccountForm) -> bool {
        let request = match form.to_request() {
            Ok(request) => request,
            Err(e) => {
                self.flash_validation(e);
                return false;
            }
        };
        let Some(token) = self.token() else {
            return false;
        };
        let epoch = self.begin_write();
        let result = self.backend.create_user(&token, &request).await;
        self.finish_write(epoch, result, CREATED, CREATE_FALLBACK).await
    }

    /// Returns `true` when the account was updated.
    pub async fn update_user(&self, form: &EditAccountForm) -> bool {
        let update = match form.to_update() {
            Ok(update) => update,
            Err(e) => {
                self.flash_validation(e);
                return false;
            }
        };
        let Some(token) = self.token() else {
            return false;
        };
        let epoch = self.begin_write();
        let result = self.backend.update_user(&token, &form.id, &update).await;
        self.finish_write(epoch, result, UPDATED, UPDATE_FALLBACK).await
    }

    /// Delete an account. The view asks for confirmation first.
    pub async fn delete_user(&self, id: &str) -> bool {
        let Some(token) = self.token() else {
            return false;
        };
        let epoch = self.begin_write();
        let result = self.backend.delete_user(&token, id).await;
        self.finish_write(epoch, result, DELETED, DELETE_FALLBACK).await
    }

    fn flash_validation(&self, err: ValidationError) {
        let now = (self.now)();
        self.state.update(|s| s.flash_error(&err.to_string(), now));
    }

    /// Mark a write in progress and return the session epoch it belongs to.
    fn begin_write(&self) -> u64 {
        self.state.update(|s| {
            s.busy = true;
            s.clear_flash();
            s.epoch
        })
    }

    async fn finish_write(
        &self,
        epoch: u64,
        result: Result<(), ApiError>,
        success: &str,
        fallback: &str,
    ) -> bool {
        if !self.same_session(epoch) {
            return false;
        }
        self.state.update(|s| s.busy = false);
        match result {
            Ok(()) => {
                let now = (self.now)();
                tracing::info!(success, "account change applied");
                self.state.update(|s| s.flash_success(success, now));
                self.refresh_users().await;
                true
            }
            Err(e) => {
                self.fail(e, fallback);
                false
            }
        }
    }

    /// Export the searched set of `kind` (every page, not only the visible one).
    pub fn export_csv(&self, kind: ExportKind) {
        let now = (self.now)();
        let content = self.state.read_with(|s| {
            let pipeline = match kind {
                ExportKind::AllSubmissions => &s.all,
                ExportKind::AuthorizedView => &s.authorized,
            };
            records_to_csv(&pipeline.filtered())
        });
        let Some(content) = content else {
            self.state.update(|s| s.flash_error(EMPTY_EXPORT_MESSAGE, now));
            return;
        };
        let file_name = kind.file_name(&clock::iso_date(now));
        match download_csv(&file_name, &content) {
            Ok(()) => {
                tracing::info!(%file_name, "csv exported");
                self.state
                    .update(|s| s.flash_success(&format!("Export CSV : {file_name}"), now));
            }
            Err(e) => {
                tracing::error!(%file_name, error = %e, "csv export failed");
                self.state.update(|s| s.flash_error(EXPORT_FAILED, now));
            }
        }
    }
}
