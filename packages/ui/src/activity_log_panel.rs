//! Session message history, opened from the navbar.

use dioxus::prelude::*;

use crate::activity_log::{LogEntry, LogLevel};
use crate::icons::{FaCircleCheck, FaCircleInfo, FaCircleXmark, FaClockRotateLeft, FaTriangleExclamation};
use crate::{use_app_state, Icon};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

fn level_class(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Info => "log-line log-info",
        LogLevel::Success => "log-line log-success",
        LogLevel::Warning => "log-line log-warning",
        LogLevel::Error => "log-line log-error",
    }
}

#[component]
fn LogLine(entry: LogEntry) -> Element {
    let icon = match entry.level {
        LogLevel::Info => rsx! { Icon { icon: FaCircleInfo, width: 12, height: 12 } },
        LogLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 12, height: 12 } },
        LogLevel::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 12, height: 12 } },
        LogLevel::Error => rsx! { Icon { icon: FaCircleXmark, width: 12, height: 12 } },
    };

    rsx! {
        li {
            class: level_class(entry.level),
            span { class: "log-icon", {icon} }
            time { class: "log-time", "{entry.timestamp}" }
            span { class: "log-text", "{entry.message}" }
        }
    }
}

/// Newest first. Closing keeps the history; "Vider" drops it.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut state = use_app_state();
    let (visible, entries, errors) = {
        let s = state.read();
        (s.log.visible, s.log.entries.clone(), s.log.count(LogLevel::Error))
    };
    if !visible {
        return rsx! {};
    }

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        aside {
            class: "log-drawer",
            header {
                h3 { "Historique de la session" }
                if errors > 0 {
                    span { class: "log-error-count", "{errors} erreur(s)" }
                }
                button {
                    class: "btn",
                    disabled: entries.is_empty(),
                    onclick: move |_| state.write().log.entries.clear(),
                    "Vider"
                }
                button {
                    class: "btn",
                    onclick: move |_| state.write().log.visible = false,
                    "Fermer"
                }
            }
            if entries.is_empty() {
                p { class: "log-empty", "Aucun message pour le moment." }
            } else {
                ol {
                    class: "log-lines",
                    for (i, entry) in entries.clone().into_iter().enumerate().rev() {
                        LogLine { key: "{i}", entry: entry }
                    }
                }
            }
        }
    }
}

/// Navbar button with the number of errors of the session.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut state = use_app_state();
    let errors = state.read().log.count(LogLevel::Error);

    rsx! {
        button {
            class: "icon-button log-toggle",
            title: "Historique de la session",
            onclick: move |_| {
                let mut s = state.write();
                s.log.visible = !s.log.visible;
            },
            Icon { icon: FaClockRotateLeft, width: 14, height: 14 }
            if errors > 0 {
                span { class: "log-badge", "{errors}" }
            }
        }
    }
}
