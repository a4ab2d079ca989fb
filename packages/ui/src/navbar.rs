use dioxus::prelude::*;

use crate::router::nav_entries;
use crate::scope::{format_scope_label, has_unrestricted_view};
use crate::{use_actions, use_app_state, ActivityLogToggle, LogoutButton};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Top bar of the signed-in shell: role navigation and profile card.
#[component]
pub fn Navbar() -> Element {
    let state = use_app_state();
    let actions = use_actions();

    let Some(profile) = state.read().profile().cloned() else {
        return rsx! {};
    };
    let current = state.read().view;
    let scope = profile.authorized_scope.as_deref();
    let scope_label = match scope {
        _ if has_unrestricted_view(scope) => Some("TOUTES LES BU".to_string()),
        Some(scope) if !scope.trim().is_empty() => Some(format_scope_label(scope)),
        _ => None,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "navbar",
            nav {
                class: "navbar-links",
                for view in nav_entries(profile.role).iter().copied() {
                    button {
                        key: "{view.title()}",
                        class: if view == current { "nav-link active" } else { "nav-link" },
                        onclick: {
                            let actions = actions.clone();
                            move |_| {
                                let actions = actions.clone();
                                spawn(async move { actions.navigate(view).await });
                            }
                        },
                        "{view.title()}"
                    }
                }
            }
            div {
                class: "profile-card",
                span { class: "avatar", "{profile.initial}" }
                div {
                    class: "profile-text",
                    span { class: "profile-name", "{profile.display_name}" }
                    span { class: "role-badge role-{profile.role.code()}", "{profile.role.label()}" }
                    if let Some(label) = scope_label {
                        span { class: "profile-scope", "Vue : {label}" }
                    }
                }
                ActivityLogToggle {}
                LogoutButton { class: "btn" }
            }
        }
    }
}
