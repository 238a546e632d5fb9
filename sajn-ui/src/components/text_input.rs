//! Reusable text input component

use dioxus::prelude::*;

/// Text input size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextInputSize {
    /// Theme grid inputs
    Small,
    /// Standard form inputs
    Medium,
}

/// Controlled text input; every keystroke is reported through `on_input`
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    size: TextInputSize,
    #[props(default)] placeholder: Option<&'static str>,
) -> Element {
    let padding = match size {
        TextInputSize::Small => "px-2 py-1.5 text-sm",
        TextInputSize::Medium => "px-3 py-2 text-sm focus:ring-1 focus:ring-zinc-500",
    };

    let base = "w-full rounded-md border border-zinc-300 bg-white text-zinc-900 placeholder:text-zinc-400 focus:border-zinc-500 focus:outline-none";

    rsx! {
        input {
            r#type: "text",
            class: "{base} {padding}",
            value: "{value}",
            placeholder,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
