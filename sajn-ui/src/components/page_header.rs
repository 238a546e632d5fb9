//! Demo page header

use crate::components::icons::GitHubIcon;
use dioxus::prelude::*;

#[component]
pub fn PageHeader(title: String, subtitle: String, source_url: String) -> Element {
    rsx! {
        header { class: "border-b border-zinc-200 bg-white px-6 py-4",
            div { class: "mx-auto flex max-w-7xl items-start justify-between",
                div {
                    h1 { class: "text-xl font-semibold text-zinc-900", "{title}" }
                    p { class: "mt-1 text-sm text-zinc-500", "{subtitle}" }
                }
                a {
                    href: "{source_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "flex items-center gap-1.5 rounded-md bg-zinc-100 px-3 py-1.5 text-sm font-medium text-zinc-700 transition-colors hover:bg-zinc-200",
                    GitHubIcon {}
                    "Source"
                }
            }
        }
    }
}
