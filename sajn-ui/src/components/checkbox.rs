//! Checkbox component

use dioxus::prelude::*;

/// A checkbox with an inline label
#[component]
pub fn Checkbox(checked: bool, onchange: EventHandler<bool>, label: &'static str) -> Element {
    rsx! {
        label { class: "flex items-center gap-3",
            input {
                r#type: "checkbox",
                class: "h-4 w-4 rounded border-zinc-300 text-zinc-900 focus:ring-zinc-500",
                checked,
                onchange: move |e| onchange.call(e.checked()),
            }
            span { class: "text-sm text-zinc-700", "{label}" }
        }
    }
}
