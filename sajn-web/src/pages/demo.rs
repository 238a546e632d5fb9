//! Demo page: configuration form, live preview, event log

use dioxus::prelude::*;
use sajn_core::{EventLog, Field, FieldValue, SetOutcome};
use sajn_ui::{ConfigPanelView, EventLogView, ModalView, PageHeader, PreviewToolbar};

use crate::components::EmbedWidget;
use crate::query::{apply_edit, current_origin, ConfigQuery};

const TITLE: &str = "@sajn/embed-react Demo";
const SUBTITLE: &str = "Configure and preview the sajn document embedding components";
const SOURCE_URL: &str = "https://github.com/sajn-se/sajn-embedding-demo";
const PREVIEW_PLACEHOLDER: &str = "Enter a Document ID and Token to preview";

#[component]
pub fn DemoPage(query: ConfigQuery) -> Element {
    let state = query.into_state();
    let mut log = use_signal(EventLog::new);
    let mut dialog_open = use_signal(|| false);

    let share_url = state
        .can_preview()
        .then(|| state.build_shareable_url(&current_origin()));
    let dialog_title = state.mode.component_name().to_string();

    let on_change = {
        let state = state.clone();
        move |(field, value): (Field, FieldValue)| {
            if apply_edit(&state, field, value) == SetOutcome::Rejected {
                tracing::warn!("Ignored invalid value for {}", field.param());
            }
        }
    };

    rsx! {
        div { class: "min-h-screen bg-zinc-50",
            PageHeader {
                title: TITLE.to_string(),
                subtitle: SUBTITLE.to_string(),
                source_url: SOURCE_URL.to_string(),
            }
            main { class: "mx-auto max-w-7xl px-6 py-8",
                div { class: "grid gap-8 lg:grid-cols-[380px_1fr]",
                    ConfigPanelView { state: state.clone(), on_change }
                    div { class: "space-y-6",
                        section { class: "rounded-lg border border-zinc-200 bg-white",
                            PreviewToolbar {
                                share_url,
                                on_open_dialog: move |_| dialog_open.set(true),
                            }
                            div { class: "h-[500px] p-4",
                                div { class: "h-full w-full",
                                    EmbedWidget {
                                        state: state.clone(),
                                        placeholder: PREVIEW_PLACEHOLDER.to_string(),
                                        log: Some(log),
                                    }
                                }
                            }
                        }
                        EventLogView {
                            entries: log.read().entries().to_vec(),
                            on_clear: move |_| log.write().clear(),
                        }
                    }
                }
            }
            ModalView {
                is_open: dialog_open(),
                title: dialog_title,
                on_close: move |_| dialog_open.set(false),
                EmbedWidget {
                    state: state.clone(),
                    placeholder: PREVIEW_PLACEHOLDER.to_string(),
                    log: Some(log),
                }
            }
        }
    }
}
