use api::{ApiConfig, HttpApi};
use dioxus::prelude::*;

use ui::{ApiProvider, ToastProvider};
use views::{NotFound, Profiles};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Profiles {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Embedded so the browser build needs no filesystem.
const ADMIN_TOML: &str = include_str!("../admin.toml");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

fn make_api() -> Result<HttpApi, String> {
    let config = ApiConfig::from_toml(ADMIN_TOML)
        .map_err(|e| format!("{} is invalid: {e}", ApiConfig::filename()))?
        .with_env_override();
    HttpApi::new(&config).map_err(|e| e.to_string())
}

#[component]
fn App() -> Element {
    let api = use_hook(make_api);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::ADMIN_CSS }

        match api {
            Ok(api) => rsx! {
                ApiProvider {
                    api,
                    ToastProvider {
                        Router::<Route> {}
                    }
                }
            },
            Err(message) => {
                tracing::error!("Cannot start: {message}");
                rsx! {
                    div {
                        class: "startup-error",
                        h1 { "Configuration error" }
                        p { "{message}" }
                    }
                }
            }
        }
    }
}
