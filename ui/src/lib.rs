// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod block_source;
pub mod compat;
mod components;
pub mod fetch_state;
pub mod format;
pub mod hooks;
mod screens;
pub mod view_model;

use app_state::AppState;
use components::pico::Container;
use screens::latest_block::LatestBlockScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

#[allow(non_snake_case)]
pub fn App() -> Element {
    let page_css = r#"
    html, body {
        margin: 0;
        padding: 0;
    }

    main.container {
        padding-top: 1rem;
        padding-bottom: 2rem;
    }

    main.container > footer {
        text-align: center;
        color: var(--pico-muted-color);
        margin-top: 1rem;
    }

    td code, dd code {
        white-space: nowrap;
    }
    "#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "Latest Ethereum Block" }
        document::Stylesheet { href: PICO_CSS }
        style { "{page_css}" }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let config_future = use_server_future(move || async move { api::view_config().await })?;

    // Read from the future to ensure it's polled during SSR.
    let body = match &*config_future.read() {
        Some(Ok(config)) => {
            dioxus_logger::tracing::info!(
                "network: {}, poll interval: {:?}",
                config.network(),
                config.poll_interval()
            );
            rsx! {
                LoadedApp {
                    app_state: AppState::new(*config),
                }
            }
        }
        Some(Err(e)) => rsx! {
            Container {
                p {
                    "An error occurred: {e}"
                }
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// Only runs once the configuration is known.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    use_context_provider(|| app_state.clone());

    rsx! {
        Container {
            LatestBlockScreen {}
        }
    }
}
