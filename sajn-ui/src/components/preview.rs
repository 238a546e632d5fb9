//! Preview chrome: placeholder and toolbar

use dioxus::prelude::*;

/// Shown in place of the widget while the configuration is not ready
#[component]
pub fn PreviewPlaceholder(
    message: String,
    #[props(default = "flex h-full items-center justify-center rounded-md border-2 border-dashed border-zinc-200")]
    class: &'static str,
) -> Element {
    rsx! {
        div { class: "{class}",
            p { class: "text-sm text-zinc-400", "{message}" }
        }
    }
}

/// Preview header with the fullscreen link and the dialog trigger
///
/// `share_url` is `None` while the preview is not ready; both actions are
/// disabled then.
#[component]
pub fn PreviewToolbar(share_url: Option<String>, on_open_dialog: EventHandler<()>) -> Element {
    let enabled = share_url.is_some();
    let href = share_url.unwrap_or_else(|| "#".to_string());
    let link_state = if enabled {
        ""
    } else {
        "pointer-events-none opacity-50"
    };

    rsx! {
        div { class: "flex items-center justify-between border-b border-zinc-200 px-5 py-3",
            h2 { class: "text-sm font-medium text-zinc-900", "Preview" }
            div { class: "flex gap-2",
                a {
                    href: "{href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "rounded-md bg-zinc-100 px-3 py-1.5 text-xs font-medium text-zinc-700 transition-colors hover:bg-zinc-200 {link_state}",
                    "Open Fullscreen"
                }
                button {
                    class: "rounded-md bg-zinc-100 px-3 py-1.5 text-xs font-medium text-zinc-700 transition-colors hover:bg-zinc-200 disabled:cursor-not-allowed disabled:opacity-50",
                    disabled: !enabled,
                    onclick: move |_| on_open_dialog.call(()),
                    "Open in Dialog"
                }
            }
        }
    }
}
