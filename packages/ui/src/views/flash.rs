use dioxus::prelude::*;

use crate::state::FlashKind;
use crate::use_app_state;

/// The application-level transient message, if any.
#[component]
pub fn FlashBanner() -> Element {
    let mut state = use_app_state();
    let Some(flash) = state.read().flash.clone() else {
        return rsx! {};
    };

    let class = match flash.kind {
        FlashKind::Success => "flash flash-success",
        FlashKind::Error => "flash flash-error",
    };

    rsx! {
        div {
            class: class,
            role: "status",
            span { "{flash.text}" }
            button {
                class: "flash-close",
                r#type: "button",
                onclick: move |_| state.write().clear_flash(),
                "×"
            }
        }
    }
}
