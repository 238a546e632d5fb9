//! Event log view

use dioxus::prelude::*;
use sajn_core::LogEntry;

/// Widget callbacks in arrival order, with a Clear action once there is something to clear
#[component]
pub fn EventLogView(entries: Vec<LogEntry>, on_clear: EventHandler<()>) -> Element {
    rsx! {
        section { class: "rounded-lg border border-zinc-200 bg-white",
            div { class: "flex items-center justify-between border-b border-zinc-200 px-5 py-3",
                h2 { class: "text-sm font-medium text-zinc-900", "Event Log" }
                if !entries.is_empty() {
                    button {
                        class: "text-xs text-zinc-500 hover:text-zinc-700",
                        onclick: move |_| on_clear.call(()),
                        "Clear"
                    }
                }
            }
            div { class: "h-[160px] overflow-y-auto p-4",
                if entries.is_empty() {
                    p { class: "text-sm text-zinc-400", "Events will appear here..." }
                } else {
                    div { class: "space-y-2 font-mono text-xs",
                        for (idx , entry) in entries.iter().enumerate() {
                            div { key: "{idx}", class: "text-zinc-600",
                                span { class: "text-zinc-400", "{entry.display_time()}" }
                                " "
                                span { class: "font-medium text-zinc-800", "{entry.event}" }
                                if let Some(data) = entry.display_data() {
                                    span { class: "ml-2 text-zinc-500", "{data}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
