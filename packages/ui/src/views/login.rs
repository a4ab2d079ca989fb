//! Sign-in form: email plus access code.

use dioxus::prelude::*;

use crate::{use_actions, use_app_state};

use super::FlashBanner;

#[component]
pub fn LoginView() -> Element {
    let mut state = use_app_state();
    let actions = use_actions();
    let mut email = use_signal(String::new);
    let mut access_code = use_signal(String::new);
    let busy = state.read().busy;

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let actions = actions.clone();
        spawn(async move {
            actions.login(&email(), &access_code()).await;
        });
    };

    rsx! {
        div {
            class: "login-container",
            form {
                class: "login-card",
                onsubmit: onsubmit,
                h1 { "Veille concurrentielle" }
                p { class: "login-subtitle", "Connectez-vous avec votre email et votre code utilisateur" }

                FlashBanner {}

                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    autocomplete: "username",
                    value: "{email}",
                    oninput: move |evt| {
                        email.set(evt.value());
                        state.write().clear_flash();
                    },
                }

                label { r#for: "login-code", "Code utilisateur" }
                input {
                    id: "login-code",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{access_code}",
                    oninput: move |evt| {
                        access_code.set(evt.value());
                        state.write().clear_flash();
                    },
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Connexion…" } else { "Se connecter" }
                }
            }
        }
    }
}
