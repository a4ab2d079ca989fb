//! # Application state
//!
//! [`AppState`] is the single state object owned by the app shell. Views read
//! it; it is only changed through the transition methods below or through
//! [`crate::AppActions`], which wraps them around backend calls.
//!
//! | Part | Reset by teardown |
//! |------|-------------------|
//! | `auth` (profile) | yes, back to `SignedOut` |
//! | `view` | yes, back to `Home` |
//! | `wizard` | yes |
//! | `mine`, `all`, `authorized`, `users` pipelines | yes, in-flight fetches invalidated |
//! | `flash`, `log`, `comment` | yes |
//! | `epoch` | incremented, so pending writes are ignored |

use api::Query;
use store::{InformationRecord, Profile, Role, UserAccount};

use crate::activity_log::{ActivityLog, LogLevel};
use crate::pipeline::{account_fields, record_fields, record_fields_with_submitter, Pipeline};
use crate::router::{can_access, default_view, View};
use crate::scope::business_unit_filter_enabled;
use crate::wizard::{Wizard, WizardStep};

pub const ALL_SUBMISSIONS_FILTERS: [&str; 6] = ["date", "from", "to", "type_bu", "type_info", "user_id"];
pub const AUTHORIZED_VIEW_FILTERS: [&str; 5] = ["type_info", "type_bu", "date", "from", "to"];

#[derive(Clone, Debug, PartialEq)]
pub enum AuthStatus {
    /// Start-up validation has not finished yet.
    Checking,
    SignedOut,
    SignedIn(Profile),
}

/// The three record listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordCollection {
    Mine,
    All,
    Authorized,
}

impl RecordCollection {
    pub fn name(self) -> &'static str {
        match self {
            RecordCollection::Mine => "my-informations",
            RecordCollection::All => "all-informations",
            RecordCollection::Authorized => "my-view",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// The transient message banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: AuthStatus,
    pub view: View,
    pub wizard: Wizard,
    pub mine: Pipeline<InformationRecord>,
    pub all: Pipeline<InformationRecord>,
    pub authorized: Pipeline<InformationRecord>,
    pub users: Pipeline<UserAccount>,
    pub flash: Option<Flash>,
    pub log: ActivityLog,
    /// A login, submission or account write is in progress.
    pub busy: bool,
    /// Full comment shown in the comment modal.
    pub comment: Option<String>,
    /// Bumped by every teardown. A write that resolves under a different
    /// epoch belongs to a session that no longer exists.
    pub epoch: u64,
}

impl AppState {
    pub fn new(page_size: usize) -> Self {
        Self {
            auth: AuthStatus::Checking,
            view: View::Home,
            wizard: Wizard::new(),
            mine: Pipeline::new(&[], record_fields, page_size),
            all: Pipeline::new(&ALL_SUBMISSIONS_FILTERS, record_fields_with_submitter, page_size),
            authorized: Pipeline::new(
                &AUTHORIZED_VIEW_FILTERS,
                record_fields_with_submitter,
                page_size,
            ),
            users: Pipeline::new(&[], account_fields, page_size),
            flash: None,
            log: ActivityLog::default(),
            busy: false,
            comment: None,
            epoch: 0,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match &self.auth {
            AuthStatus::SignedIn(profile) => Some(profile),
            AuthStatus::Checking | AuthStatus::SignedOut => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.profile().map(|p| p.role)
    }

    pub fn is_signed_in(&self) -> bool {
        self.profile().is_some()
    }

    /// Enter the signed-in shell on the role's landing view.
    pub fn sign_in(&mut self, profile: Profile) -> View {
        let view = default_view(profile.role);
        self.auth = AuthStatus::SignedIn(profile);
        self.view = view;
        view
    }

    /// Replace the profile after re-validation without moving the user.
    pub fn refresh_profile(&mut self, profile: Profile) -> View {
        let role = profile.role;
        let role_changed = self.role() != Some(role);
        self.auth = AuthStatus::SignedIn(profile);
        if role_changed || !can_access(role, self.view) {
            self.view = default_view(role);
        }
        self.view
    }

    /// Clear every piece of session-dependent state.
    pub fn teardown(&mut self) {
        self.auth = AuthStatus::SignedOut;
        self.view = View::Home;
        self.wizard.reset();
        self.mine.reset();
        self.all.reset();
        self.authorized.reset();
        self.users.reset();
        self.flash = None;
        self.log.clear();
        self.busy = false;
        self.comment = None;
        self.epoch += 1;
    }

    /// Teardown caused by a user action on a dead session.
    pub fn expire(&mut self, now: i64) {
        self.teardown();
        self.flash_error(api::error::SESSION_EXPIRED_MESSAGE, now);
    }

    /// Switch to `view` if the current role may see it. Going Home from the
    /// confirmation screen restarts the wizard.
    pub fn enter_view(&mut self, view: View) -> bool {
        let Some(role) = self.role() else {
            return false;
        };
        if !can_access(role, view) {
            tracing::warn!(?role, ?view, "navigation refused");
            return false;
        }
        if view == View::Home && self.wizard.step() == WizardStep::Confirmed {
            self.wizard.reset();
        }
        self.view = view;
        true
    }

    pub fn records(&self, kind: RecordCollection) -> &Pipeline<InformationRecord> {
        match kind {
            RecordCollection::Mine => &self.mine,
            RecordCollection::All => &self.all,
            RecordCollection::Authorized => &self.authorized,
        }
    }

    pub fn records_mut(&mut self, kind: RecordCollection) -> &mut Pipeline<InformationRecord> {
        match kind {
            RecordCollection::Mine => &mut self.mine,
            RecordCollection::All => &mut self.all,
            RecordCollection::Authorized => &mut self.authorized,
        }
    }

    /// Whether the authorized view offers a business-unit filter.
    pub fn authorized_bu_filter_enabled(&self) -> bool {
        let scope = self.profile().and_then(|p| p.authorized_scope.as_deref());
        business_unit_filter_enabled(scope)
    }

    /// Query parameters for the next fetch of `kind`. A scoped user's
    /// authorized view never sends `type_bu`.
    pub fn record_query(&self, kind: RecordCollection) -> Query {
        let mut query = self.records(kind).filters().to_query();
        if kind == RecordCollection::Authorized && !self.authorized_bu_filter_enabled() {
            query.retain(|(key, _)| *key != "type_bu");
        }
        query
    }

    pub fn flash_success(&mut self, text: &str, now: i64) {
        self.log.push(LogLevel::Success, text, now);
        self.flash = Some(Flash {
            kind: FlashKind::Success,
            text: text.to_string(),
        });
    }

    pub fn flash_error(&mut self, text: &str, now: i64) {
        self.log.push(LogLevel::Error, text, now);
        self.flash = Some(Flash {
            kind: FlashKind::Error,
            text: text.to_string(),
        });
    }

    pub fn clear_flash(&mut self) {
        self.flash = None;
    }

    /// Apply a wizard edit coming from user input.
    pub fn edit_wizard(&mut self, edit: impl FnOnce(&mut Wizard)) {
        self.clear_flash();
        edit(&mut self.wizard);
    }

    /// Apply a search term coming from user input.
    pub fn set_record_search(&mut self, kind: RecordCollection, term: String) {
        self.clear_flash();
        self.records_mut(kind).set_search(term);
    }

    pub fn set_user_search(&mut self, term: String) {
        self.clear_flash();
        self.users.set_search(term);
    }
}

/// Shared access to the [`AppState`].
///
/// The app uses a Dioxus `Signal`; tests use `Rc<RefCell<_>>`.
pub trait StateHandle: Clone + 'static {
    /// Read without subscribing the caller to changes.
    fn read_with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R;
}

impl StateHandle for dioxus::prelude::Signal<AppState> {
    fn read_with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        use dioxus::prelude::*;
        f(&*self.peek())
    }

    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        use dioxus::prelude::*;
        let mut signal = *self;
        signal.with_mut(f)
    }
}

impl StateHandle for std::rc::Rc<std::cell::RefCell<AppState>> {
    fn read_with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&*self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::BusinessUnit;

    const NOW: i64 = 1_714_641_300_000;

    fn restricted(scope: &str) -> Profile {
        Profile::new("resp@labo.fr", Role::Restricted, "8", Some(scope.into()))
    }

    fn signed_in(profile: Profile) -> AppState {
        let mut state = AppState::new(10);
        state.sign_in(profile);
        state
    }

    #[test]
    fn test_sign_in_lands_on_role_view() {
        let mut state = AppState::new(10);
        assert_eq!(state.auth, AuthStatus::Checking);
        assert_eq!(state.sign_in(restricted("CVS")), View::AuthorizedView);
        let admin = Profile::new("a@labo.fr", Role::Admin, "1", None);
        assert_eq!(state.sign_in(admin), View::Home);
    }

    #[test]
    fn test_teardown_clears_everything() {
        let mut state = signed_in(Profile::new("d@labo.fr", Role::Delegate, "2", None));
        state.enter_view(View::MySubmissions);
        state.mine.set_search("acme");
        let seq = state.mine.begin_fetch();
        state.wizard.choose_business_unit(BusinessUnit::Cvs);
        state.all.set_filter("type_bu", "CVS");
        state.flash_success("ok", NOW);
        state.comment = Some("long".into());
        state.busy = true;

        state.teardown();

        assert_eq!(state.auth, AuthStatus::SignedOut);
        assert_eq!(state.view, View::Home);
        assert_eq!(state.wizard, Wizard::new());
        assert_eq!(state.mine.search(), "");
        assert!(state.all.filters().is_empty());
        assert!(state.flash.is_none());
        assert!(state.log.entries.is_empty());
        assert!(state.comment.is_none());
        assert!(!state.busy);
        assert_eq!(state.epoch, 1);
        assert!(!state.mine.receive(seq, Ok(Vec::new())));
    }

    #[test]
    fn test_expire_leaves_one_message() {
        let mut state = signed_in(Profile::new("d@labo.fr", Role::Delegate, "2", None));
        state.expire(NOW);
        assert!(!state.is_signed_in());
        let flash = state.flash.unwrap();
        assert_eq!(flash.kind, FlashKind::Error);
        assert_eq!(flash.text, "Session expirée. Veuillez vous reconnecter.");
    }

    #[test]
    fn test_enter_view_respects_role() {
        let mut state = signed_in(Profile::new("d@labo.fr", Role::Delegate, "2", None));
        assert!(!state.enter_view(View::UserManagement));
        assert_eq!(state.view, View::Home);
        assert!(state.enter_view(View::MySubmissions));

        let mut signed_out = AppState::new(10);
        assert!(!signed_out.enter_view(View::Home));
    }

    #[test]
    fn test_home_from_confirmation_restarts_wizard() {
        let mut state = signed_in(Profile::new("d@labo.fr", Role::Delegate, "2", None));
        state.wizard.choose_business_unit(BusinessUnit::Cvs);
        state.wizard.choose_information_type(store::InformationType::Recommendation);
        state.wizard.confirm_submitted();
        state.enter_view(View::MySubmissions);
        state.enter_view(View::Home);
        assert_eq!(state.wizard.step(), WizardStep::ChooseBusinessUnit);
    }

    #[test]
    fn test_scoped_user_never_sends_bu_filter() {
        let mut state = signed_in(restricted("CVS"));
        assert!(!state.authorized_bu_filter_enabled());
        state.authorized.set_filter("type_bu", "CNS");
        state.authorized.set_filter("type_info", "Veille commerciale");
        assert_eq!(
            state.record_query(RecordCollection::Authorized),
            vec![("type_info", "Veille commerciale".to_string())]
        );

        let mut state = signed_in(restricted("ALL"));
        assert!(state.authorized_bu_filter_enabled());
        state.authorized.set_filter("type_bu", "CNS");
        assert_eq!(
            state.record_query(RecordCollection::Authorized),
            vec![("type_bu", "CNS".to_string())]
        );
    }

    #[test]
    fn test_input_clears_flash() {
        let mut state = signed_in(Profile::new("d@labo.fr", Role::Delegate, "2", None));
        state.flash_error("Le champ Laboratoire est obligatoire", NOW);
        state.edit_wizard(|w| w.set_comment("x"));
        assert!(state.flash.is_none());
        assert_eq!(state.log.entries.len(), 1);
    }

    #[test]
    fn test_refresh_profile_keeps_current_view() {
        let admin = Profile::new("a@labo.fr", Role::Admin, "1", None);
        let mut state = signed_in(admin.clone());
        state.enter_view(View::UserManagement);
        assert_eq!(state.refresh_profile(admin), View::UserManagement);
        let demoted = Profile::new("a@labo.fr", Role::Delegate, "1", None);
        assert_eq!(state.refresh_profile(demoted), View::Home);
    }
}
