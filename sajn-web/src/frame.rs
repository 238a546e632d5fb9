//! Iframe-backed widget instances
//!
//! The widget runs on its own origin and talks to the page through
//! `postMessage`. Each instance owns a window `message` listener that only
//! accepts messages from its own frame, so two previews of the same document
//! (inline and in the dialog) never log each other's callbacks.
//!
//! Listener cleanup follows the usual RAII pattern: the `Closure` lives in a
//! struct whose `Drop` removes it, so destroying an instance detaches it.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use sajn_core::widget::{frame_url, origin_of};
use sajn_core::{DerivedProps, EventLog, WidgetEvent, WidgetFactory};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

static FRAME_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A window `message` listener that removes itself when dropped.
pub struct WindowMessageListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut(web_sys::MessageEvent)>,
}

impl WindowMessageListener {
    pub fn new(
        window: web_sys::Window,
        callback: impl FnMut(web_sys::MessageEvent) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(web_sys::MessageEvent)> =
            Closure::wrap(Box::new(callback));

        window
            .add_event_listener_with_callback("message", callback.as_ref().unchecked_ref())
            .ok();

        Self { window, callback }
    }
}

impl Drop for WindowMessageListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("message", self.callback.as_ref().unchecked_ref());
    }
}

/// One mounted widget frame
pub struct FrameInstance {
    /// DOM id of the iframe, unique per instance
    pub dom_id: String,
    pub src: String,
    _listener: Option<WindowMessageListener>,
}

/// Builds widget frames, forwarding their callbacks to an event log
pub struct FrameFactory {
    log: Option<Signal<EventLog>>,
}

impl FrameFactory {
    /// `log` receives every callback; `None` ignores them.
    pub fn new(log: Option<Signal<EventLog>>) -> Self {
        Self { log }
    }
}

impl WidgetFactory for FrameFactory {
    type Instance = FrameInstance;

    fn create(&mut self, props: &DerivedProps) -> FrameInstance {
        let id = FRAME_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        let dom_id = format!("sajn-embed-{id}");
        let src = frame_url(props);

        let listener = match (self.log, origin_of(&src), web_sys::window()) {
            (Some(log), Some(origin), Some(window)) => Some(WindowMessageListener::new(
                window,
                forward_to_log(log, origin, dom_id.clone()),
            )),
            _ => None,
        };

        FrameInstance {
            dom_id,
            src,
            _listener: listener,
        }
    }
}

fn forward_to_log(
    mut log: Signal<EventLog>,
    origin: String,
    dom_id: String,
) -> impl FnMut(web_sys::MessageEvent) + 'static {
    move |event: web_sys::MessageEvent| {
        if event.origin() != origin || !sent_by_frame(&event, &dom_id) {
            return;
        }
        let Some(message) = message_json(&event.data()) else {
            return;
        };
        if let Some(widget_event) = WidgetEvent::from_message(message) {
            log.write().record(&widget_event);
        }
    }
}

fn sent_by_frame(event: &web_sys::MessageEvent, dom_id: &str) -> bool {
    let frame_window = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(dom_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlIFrameElement>().ok())
        .and_then(|frame| frame.content_window());

    match (frame_window, event.source()) {
        (Some(frame_window), Some(source)) => {
            js_sys::Object::is(&JsValue::from(frame_window), &JsValue::from(source))
        }
        _ => false,
    }
}

/// Message data as JSON. Frames may post either objects or JSON strings.
fn message_json(data: &JsValue) -> Option<serde_json::Value> {
    let text = match data.as_string() {
        Some(text) => text,
        None => js_sys::JSON::stringify(data).ok()?.as_string()?,
    };
    serde_json::from_str(&text).ok()
}
