use dioxus::prelude::*;

/// A shortened hash or address; hovering shows the full value.
#[component]
pub fn HashDisplay(text: String, full: Option<String>) -> Element {
    rsx! {
        code {
            title: full.unwrap_or_default(),
            "{text}"
        }
    }
}
