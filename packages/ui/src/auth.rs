//! Application context and hooks for the UI.

use std::rc::Rc;

use api::HttpBackend;
use dioxus::prelude::*;
use store::{ClientConfig, LabCatalog};

use crate::actions::AppActions;
use crate::platform::{make_session_store, PlatformStore};
use crate::state::AppState;

/// The action layer as wired in the running app.
pub type Actions = AppActions<HttpBackend, PlatformStore, Signal<AppState>>;

/// Get the application state.
/// Returns a signal that updates on every transition.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

pub fn use_actions() -> Actions {
    use_context::<Actions>()
}

/// Lab/product catalog used by the submission autocomplete.
pub fn use_catalog() -> Rc<LabCatalog> {
    use_context::<Rc<LabCatalog>>()
}

/// Provider component that owns the state, the backend and the session store.
/// Wrap your app with this component; it validates the persisted session once
/// on mount.
#[component]
pub fn AppProvider(config: ClientConfig, children: Element) -> Element {
    let page_size = config.pagination.page_size;
    let state = use_context_provider(|| Signal::new(AppState::new(page_size)));

    let actions = use_context_provider(|| {
        let backend = HttpBackend::new(config.api.base_url.clone());
        let session = make_session_store(config.session.lifetime_days);
        AppActions::new(backend, session, state)
    });

    use_context_provider(|| {
        Rc::new(LabCatalog::bundled().unwrap_or_else(|e| {
            tracing::error!(error = %e, "lab catalog unreadable, autocomplete disabled");
            LabCatalog::default()
        }))
    });

    use_hook(move || {
        spawn(async move {
            actions.start().await;
        })
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Déconnexion".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let actions = use_actions();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| actions.logout(),
            "{label}"
        }
    }
}
