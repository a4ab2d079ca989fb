//! Top-level switch between the checking screen, the login form and the
//! signed-in shell.

use dioxus::prelude::*;

use crate::router::View;
use crate::state::AuthStatus;
use crate::{use_app_state, ActivityLogPanel, Navbar};

use super::{
    AllSubmissionsView, AuthorizedRecordsView, FlashBanner, LoginView, MySubmissionsView,
    SubmissionWizard, UserManagementView,
};

#[component]
pub fn AppShell() -> Element {
    let state = use_app_state();
    let (checking, signed_in, view) = {
        let s = state.read();
        (s.auth == AuthStatus::Checking, s.is_signed_in(), s.view)
    };

    if checking {
        return rsx! {
            div { class: "app-checking", "Chargement…" }
        };
    }
    if !signed_in {
        return rsx! { LoginView {} };
    }

    rsx! {
        div {
            class: "app-shell",
            Navbar {}
            main {
                class: "app-content",
                FlashBanner {}
                {match view {
                    View::Home => rsx! { SubmissionWizard {} },
                    View::MySubmissions => rsx! { MySubmissionsView {} },
                    View::AllSubmissions => rsx! { AllSubmissionsView {} },
                    View::UserManagement => rsx! { UserManagementView {} },
                    View::AuthorizedView => rsx! { AuthorizedRecordsView {} },
                }}
            }
            ActivityLogPanel {}
        }
    }
}
