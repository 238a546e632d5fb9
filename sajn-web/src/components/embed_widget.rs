use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use sajn_core::{ConfigState, EmbedSlot, EventLog};
use sajn_ui::PreviewPlaceholder;

use crate::frame::FrameFactory;

const FRAME_CLASS: &str = "h-full w-full border-0";

/// The embed widget for `state`, or a placeholder until it can be shown
///
/// Any configuration change replaces the frame with a fresh one: the iframe
/// is keyed by instance, so the old document is unloaded with its instance.
#[component]
pub fn EmbedWidget(
    state: ConfigState,
    placeholder: String,
    #[props(default)] log: Option<Signal<EventLog>>,
    #[props(default)] placeholder_class: Option<&'static str>,
) -> Element {
    let slot = use_hook(|| Rc::new(RefCell::new(EmbedSlot::new(FrameFactory::new(log)))));

    let frame = {
        let mut slot = slot.borrow_mut();
        slot.sync(&state);
        slot.instance().map(|f| (f.dom_id.clone(), f.src.clone()))
    };

    match (frame, placeholder_class) {
        (Some((dom_id, src)), _) => rsx! {
            iframe {
                key: "{dom_id}",
                id: "{dom_id}",
                class: FRAME_CLASS,
                title: state.mode.component_name(),
                src: "{src}",
            }
        },
        (None, Some(class)) => rsx! {
            PreviewPlaceholder { message: placeholder, class }
        },
        (None, None) => rsx! {
            PreviewPlaceholder { message: placeholder }
        },
    }
}
