use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::empty_state::EmptyState;
use crate::components::hash_display::HashDisplay;
use crate::components::pico::Accordion;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::hooks::use_latest_block::use_latest_block;
use crate::view_model::PageContent;
use crate::view_model::PageView;

#[component]
pub fn LatestBlockScreen() -> Element {
    let app_state = use_context::<AppState>();
    let controller = use_latest_block(app_state.config.poll_interval());
    let network = app_state.config.network().label();

    let view = PageView::from_state(&controller.state().read());
    let loading = controller.state().read().is_loading();

    rsx! {
        header {
            nav {
                ul {
                    li {
                        h1 {
                            style: "margin: 0; font-size: 1.5rem;",
                            "Latest Ethereum Block"
                        }
                    }
                }
                ul {
                    li {
                        Button {
                            disabled: loading,
                            busy: loading,
                            on_click: move |_| controller.refresh(),
                            if loading { "Updating…" } else { "Refresh" }
                        }
                    }
                }
            }
        }
        match view {
            PageView::Error(message) => rsx! {
                Card {
                    title: Some("Error".to_string()),
                    p { "{message}" }
                    Button {
                        button_type: ButtonType::Secondary,
                        on_click: move |_| controller.refresh(),
                        "Retry"
                    }
                }
            },
            PageView::Content(content) => rsx! {
                BlockContent { content }
            },
        }
        footer {
            small { "Network: {network}" }
        }
    }
}

#[component]
fn BlockContent(content: PageContent) -> Element {
    let PageContent {
        loading,
        block_number,
        last_seen,
        details,
        transactions,
        transactions_note,
        raw_json,
    } = content;

    rsx! {
        Card {
            title: Some("Summary".to_string()),
            Grid {
                div {
                    small { "Block Number" }
                    h2 {
                        style: "margin: 0;",
                        "{block_number}"
                    }
                }
                div {
                    small { "Last Seen" }
                    p {
                        style: "margin: 0;",
                        "{last_seen}"
                    }
                }
            }
        }
        Card {
            title: Some("Details".to_string()),
            div {
                style: "display: grid; grid-template-columns: max-content 1fr; gap: 0.25rem 1rem;",
                for row in details {
                    strong { "{row.label}" }
                    if row.full.is_some() {
                        HashDisplay {
                            text: row.value,
                            full: row.full,
                        }
                    } else {
                        span { "{row.value}" }
                    }
                }
            }
        }
        Card {
            title: Some("Transactions".to_string()),
            if !transactions.is_empty() {
                div {
                    style: "overflow-x: auto;",
                    table {
                        thead {
                            tr {
                                th { "Hash" }
                                th { "From" }
                                th { "To" }
                                th { "Nonce" }
                            }
                        }
                        tbody {
                            for (i, tx) in transactions.into_iter().enumerate() {
                                tr {
                                    key: "{i}",
                                    td {
                                        HashDisplay {
                                            text: tx.hash,
                                            full: tx.hash_full,
                                        }
                                    }
                                    td {
                                        HashDisplay {
                                            text: tx.from,
                                            full: tx.from_full,
                                        }
                                    }
                                    td {
                                        HashDisplay {
                                            text: tx.to,
                                            full: tx.to_full,
                                        }
                                    }
                                    td { "{tx.nonce}" }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(note) = transactions_note {
                if loading {
                    p { "aria-busy": "true", "{note}" }
                } else {
                    EmptyState {
                        title: note.to_string(),
                    }
                }
            }
        }
        Accordion {
            title: "See raw JSON".to_string(),
            pre {
                style: "max-height: 60vh; overflow: auto;",
                code { "{raw_json}" }
            }
        }
    }
}
