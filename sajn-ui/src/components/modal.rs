//! Modal view component
//!
//! Pure, props-based overlay. Clicking the backdrop or the close button calls
//! `on_close`; the caller owns the open flag.

use crate::components::icons::XIcon;
use dioxus::prelude::*;

#[component]
pub fn ModalView(
    is_open: bool,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !is_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 z-40 bg-black/50",
            onclick: move |_| on_close.call(()),
        }
        div { class: "fixed left-1/2 top-1/2 z-50 w-full max-w-2xl -translate-x-1/2 -translate-y-1/2 rounded-lg border border-zinc-200 bg-white p-0 shadow-xl",
            div { class: "flex items-center justify-between border-b border-zinc-200 px-5 py-3",
                h2 { class: "text-sm font-medium text-zinc-900", "{title}" }
                button {
                    class: "rounded-md p-1 text-zinc-400 hover:bg-zinc-100 hover:text-zinc-600",
                    onclick: move |_| on_close.call(()),
                    XIcon {}
                }
            }
            div { class: "h-[500px] p-4",
                div { class: "h-full w-full", {children} }
            }
        }
    }
}
