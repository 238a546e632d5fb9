//! Native select component

use dioxus::prelude::*;

/// Styled native `<select>` over a fixed list of (value, label) options
#[component]
pub fn Select(
    /// Currently selected value
    value: String,
    /// Called with the newly selected value
    onchange: EventHandler<String>,
    options: Vec<(&'static str, &'static str)>,
) -> Element {
    rsx! {
        select {
            class: "w-full rounded-md border border-zinc-300 bg-white px-3 py-2 text-sm text-zinc-900 focus:border-zinc-500 focus:outline-none focus:ring-1 focus:ring-zinc-500",
            value: "{value}",
            onchange: move |e| onchange.call(e.value()),
            for (option_value , label) in options {
                option {
                    key: "{option_value}",
                    value: option_value,
                    selected: option_value == value,
                    "{label}"
                }
            }
        }
    }
}
