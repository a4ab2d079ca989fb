use dioxus::prelude::*;

use store::ClientConfig;
use ui::{AppProvider, AppShell};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded client configuration.
const CONFIG_TOML: &str = include_str!("../config.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid embedded config, using defaults");
        ClientConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::APP_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Veille concurrentielle" }

        AppProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

/// The whole client lives under `/`; views are switched in state.
#[component]
fn Root() -> Element {
    rsx! { AppShell {} }
}

/// Redirect any other path to `/`
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!(path = %segments.join("/"), "unknown path");
    nav.replace(Route::Root {});
    rsx! {}
}
