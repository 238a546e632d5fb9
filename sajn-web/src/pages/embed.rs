//! Bare embed page, the target of share links

use dioxus::prelude::*;

use crate::components::EmbedWidget;
use crate::query::ConfigQuery;

#[component]
pub fn EmbedPage(query: ConfigQuery) -> Element {
    rsx! {
        div { class: "h-screen w-screen bg-white",
            EmbedWidget {
                state: query.into_state(),
                placeholder: "Missing documentId or token".to_string(),
                placeholder_class: "flex h-screen w-screen items-center justify-center bg-white",
            }
        }
    }
}
