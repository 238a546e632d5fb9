//! Embed widget contract and lifecycle
//!
//! The widget is an external component. This module covers what the demo
//! needs from it: the callbacks it raises, where its frame lives, and the
//! rule that any configuration change gets a fresh widget instance instead
//! of a live prop update.

use std::fmt;

use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info};
use url::Url;

use crate::props::DerivedProps;
use crate::state::ConfigState;

/// Host the widget loads from when no host override is configured.
pub const DEFAULT_WIDGET_HOST: &str = "https://app.sajn.se";

/// A callback raised by the embed widget
///
/// Payloads are kept exactly as the widget sent them, whatever their shape.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    DocumentReady,
    /// Usually `{ code, message }`
    DocumentError(Option<serde_json::Value>),
    SignerCompleted(Option<serde_json::Value>),
    SignerRejected(Option<serde_json::Value>),
}

/// What widget frames post: `{ "event": <callback name>, "data": <payload> }`
#[derive(Deserialize)]
struct WidgetMessage {
    event: String,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

impl WidgetEvent {
    /// Callback name as the widget API spells it.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetEvent::DocumentReady => "onDocumentReady",
            WidgetEvent::DocumentError(_) => "onDocumentError",
            WidgetEvent::SignerCompleted(_) => "onSignerCompleted",
            WidgetEvent::SignerRejected(_) => "onSignerRejected",
        }
    }

    pub fn payload(&self) -> Option<serde_json::Value> {
        match self {
            WidgetEvent::DocumentReady => None,
            WidgetEvent::DocumentError(data)
            | WidgetEvent::SignerCompleted(data)
            | WidgetEvent::SignerRejected(data) => data.clone(),
        }
    }

    /// Decode a message posted by a widget frame. Anything else yields `None`.
    pub fn from_message(message: serde_json::Value) -> Option<Self> {
        let WidgetMessage { event, data } = match serde_json::from_value(message) {
            Ok(message) => message,
            Err(e) => {
                debug!("Ignoring non-widget message: {e}");
                return None;
            }
        };

        match event.as_str() {
            "onDocumentReady" => Some(WidgetEvent::DocumentReady),
            "onDocumentError" => Some(WidgetEvent::DocumentError(data)),
            "onSignerCompleted" => Some(WidgetEvent::SignerCompleted(data)),
            "onSignerRejected" => Some(WidgetEvent::SignerRejected(data)),
            other => {
                debug!("Ignoring unknown widget event {other}");
                None
            }
        }
    }
}

/// Identity of a widget configuration
///
/// Two states share a key only if every configuration field is equal. The key
/// is a SHA-256 prefix of the state's share query, so it is stable across
/// processes and builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmbedKey([u8; 8]);

impl EmbedKey {
    pub fn of(state: &ConfigState) -> Self {
        let digest = Sha256::digest(state.share_query().as_bytes());
        let mut key = [0u8; 8];
        key.copy_from_slice(&digest[..8]);
        EmbedKey(key)
    }
}

impl fmt::Display for EmbedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Creates live widget instances. Dropping an instance destroys it.
pub trait WidgetFactory {
    type Instance;

    fn create(&mut self, props: &DerivedProps) -> Self::Instance;
}

/// What `EmbedSlot::sync` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotChange {
    /// Not ready and nothing was mounted
    Empty,
    /// Readiness was lost; the instance was destroyed
    Destroyed,
    Created,
    /// Configuration changed; the old instance was destroyed and a new one created
    Recreated,
    Unchanged,
}

/// Holds at most one widget instance, keyed by the configuration it was built from
pub struct EmbedSlot<F: WidgetFactory> {
    factory: F,
    current: Option<(EmbedKey, F::Instance)>,
}

impl<F: WidgetFactory> EmbedSlot<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            current: None,
        }
    }

    /// Bring the slot in line with `state`.
    pub fn sync(&mut self, state: &ConfigState) -> SlotChange {
        if !state.can_preview() {
            return match self.current.take() {
                Some((key, _)) => {
                    info!("Destroying widget {key}: document ID or token missing");
                    SlotChange::Destroyed
                }
                None => SlotChange::Empty,
            };
        }

        let key = state.embed_key();
        if let Some((current, _)) = &self.current {
            if *current == key {
                return SlotChange::Unchanged;
            }
        }

        // Tear down before creating so two instances never coexist
        let replaced = self.current.take().is_some();
        let instance = self.factory.create(&state.derive_props());
        self.current = Some((key, instance));

        if replaced {
            info!("Recreated {} widget as {key}", state.mode.component_name());
            SlotChange::Recreated
        } else {
            info!("Created {} widget as {key}", state.mode.component_name());
            SlotChange::Created
        }
    }

    pub fn instance(&self) -> Option<&F::Instance> {
        self.current.as_ref().map(|(_, instance)| instance)
    }

    pub fn key(&self) -> Option<EmbedKey> {
        self.current.as_ref().map(|(key, _)| *key)
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}

/// URL of the widget frame for the given props.
///
/// Layout: `<host>/embed/<sign|view>/<documentId>?token=…&language=…` followed
/// by the remaining props; `cssVars` travels as a JSON string.
pub fn frame_url(props: &DerivedProps) -> String {
    let host = props
        .host
        .as_deref()
        .unwrap_or(DEFAULT_WIDGET_HOST)
        .trim_end_matches('/');

    let mut url = format!(
        "{host}/embed/{}/{}?token={}&language={}&showScrollIndicator={}",
        props.mode,
        urlencoding::encode(&props.document_id),
        urlencoding::encode(&props.token),
        props.language,
        props.show_scroll_indicator,
    );

    if let Some(allow) = props.allow_document_rejection {
        url.push_str(&format!("&allowDocumentRejection={allow}"));
    }

    if let Some(css_vars) = &props.css_vars {
        if let Ok(json) = serde_json::to_string(css_vars) {
            url.push_str("&cssVars=");
            url.push_str(&urlencoding::encode(&json));
        }
    }

    url
}

/// Origin of an absolute URL as browsers report it in `MessageEvent.origin`:
/// lowercase host, default port dropped. `None` for URLs with an opaque origin.
pub fn origin_of(url: &str) -> Option<String> {
    let origin = Url::parse(url).ok()?.origin();
    origin.is_tuple().then(|| origin.ascii_serialization())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Mode;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Instance {
        id: u32,
        mode: Mode,
        dropped: Rc<RefCell<Vec<u32>>>,
    }

    impl Drop for Instance {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.id);
        }
    }

    #[derive(Default)]
    struct CountingFactory {
        created: u32,
        dropped: Rc<RefCell<Vec<u32>>>,
    }

    impl WidgetFactory for CountingFactory {
        type Instance = Instance;

        fn create(&mut self, props: &DerivedProps) -> Instance {
            self.created += 1;
            Instance {
                id: self.created,
                mode: props.mode,
                dropped: self.dropped.clone(),
            }
        }
    }

    fn ready_state() -> ConfigState {
        ConfigState::parse("documentId=doc1&token=tok1")
    }

    #[test]
    fn mode_change_creates_new_instance() {
        let mut slot = EmbedSlot::new(CountingFactory::default());
        let mut state = ready_state();

        assert_eq!(slot.sync(&state), SlotChange::Created);
        assert_eq!(slot.instance().unwrap().mode, Mode::Sign);

        state.mode = Mode::View;
        assert_eq!(slot.sync(&state), SlotChange::Recreated);

        let instance = slot.instance().unwrap();
        assert_eq!(instance.id, 2);
        assert_eq!(instance.mode, Mode::View);
        assert_eq!(*slot.factory().dropped.borrow(), vec![1]);
    }

    #[test]
    fn unchanged_state_keeps_instance() {
        let mut slot = EmbedSlot::new(CountingFactory::default());
        let state = ready_state();

        slot.sync(&state);
        let key = slot.key();
        assert_eq!(slot.sync(&state.clone()), SlotChange::Unchanged);
        assert_eq!(slot.key(), key);
        assert_eq!(slot.factory().created, 1);
    }

    #[test]
    fn any_field_change_rekeys() {
        let base = ready_state();
        let mut themed = base.clone();
        themed.muted_foreground = "#737373".to_string();
        let mut hidden_flag = base.clone();
        hidden_flag.mode = Mode::View;
        let mut hidden_flag_set = hidden_flag.clone();
        hidden_flag_set.allow_document_rejection = true;

        assert_ne!(base.embed_key(), themed.embed_key());
        assert_ne!(hidden_flag.embed_key(), hidden_flag_set.embed_key());
        assert_eq!(base.embed_key(), ready_state().embed_key());
    }

    #[test]
    fn losing_readiness_destroys_instance() {
        let mut slot = EmbedSlot::new(CountingFactory::default());
        let mut state = ConfigState::default();

        assert_eq!(slot.sync(&state), SlotChange::Empty);
        assert!(slot.instance().is_none());

        state = ready_state();
        slot.sync(&state);
        state.token = "  ".to_string();
        assert_eq!(slot.sync(&state), SlotChange::Destroyed);
        assert!(slot.instance().is_none());
        assert_eq!(*slot.factory().dropped.borrow(), vec![1]);
    }

    #[test]
    fn decode_widget_messages() {
        let ready = WidgetEvent::from_message(json!({ "event": "onDocumentReady" })).unwrap();
        assert_eq!(ready, WidgetEvent::DocumentReady);
        assert_eq!(ready.payload(), None);

        let error = WidgetEvent::from_message(json!({
            "event": "onDocumentError",
            "data": { "code": "NOT_FOUND", "message": "Document not found" }
        }))
        .unwrap();
        assert_eq!(error.name(), "onDocumentError");
        assert_eq!(
            error.payload(),
            Some(json!({ "code": "NOT_FOUND", "message": "Document not found" }))
        );

        let completed = WidgetEvent::from_message(json!({
            "event": "onSignerCompleted",
            "data": { "signerId": 7 }
        }))
        .unwrap();
        assert_eq!(completed.payload(), Some(json!({ "signerId": 7 })));

        assert!(WidgetEvent::from_message(json!({ "event": "onSomethingElse" })).is_none());
        assert!(WidgetEvent::from_message(json!("hello")).is_none());
    }

    #[test]
    fn error_payloads_are_forwarded_verbatim() {
        let extra = json!({ "code": "EXPIRED", "message": "m", "status": 410 });
        let event = WidgetEvent::from_message(json!({
            "event": "onDocumentError",
            "data": extra.clone()
        }))
        .unwrap();
        assert_eq!(event.payload(), Some(extra));

        let numeric = WidgetEvent::from_message(json!({
            "event": "onDocumentError",
            "data": { "code": 404 }
        }))
        .unwrap();
        assert_eq!(numeric.payload(), Some(json!({ "code": 404 })));

        let text = WidgetEvent::from_message(json!({
            "event": "onDocumentError",
            "data": "network down"
        }))
        .unwrap();
        assert_eq!(text.payload(), Some(json!("network down")));
    }

    #[test]
    fn signer_events_without_data_are_still_raised() {
        let completed = WidgetEvent::from_message(json!({ "event": "onSignerCompleted" })).unwrap();
        assert_eq!(completed, WidgetEvent::SignerCompleted(None));
        assert_eq!(completed.payload(), None);

        let rejected =
            WidgetEvent::from_message(json!({ "event": "onSignerRejected", "data": null })).unwrap();
        assert_eq!(rejected.name(), "onSignerRejected");
        assert_eq!(rejected.payload(), None);
    }

    #[test]
    fn embed_key_is_stable() {
        assert_eq!(ConfigState::default().embed_key().to_string(), "f9def5a2a41fddbe");
        assert_eq!(ready_state().embed_key().to_string(), "c35580d228b84016");
    }

    #[test]
    fn frame_url_for_view_mode() {
        let state = ConfigState::parse("documentId=abc123&token=xyz789&mode=view&language=fr");
        assert_eq!(
            frame_url(&state.derive_props()),
            "https://app.sajn.se/embed/view/abc123?token=xyz789&language=fr&showScrollIndicator=true"
        );
    }

    #[test]
    fn frame_url_with_host_rejection_and_theme() {
        let state = ConfigState::parse(
            "documentId=d&token=t&host=http%3A%2F%2Flocalhost%3A3000%2F&allowRejection=true&bg=%23fff",
        );
        assert_eq!(
            frame_url(&state.derive_props()),
            "http://localhost:3000/embed/sign/d?token=t&language=en&showScrollIndicator=true\
             &allowDocumentRejection=true&cssVars=%7B%22background%22%3A%22%23fff%22%7D"
        );
    }

    #[test]
    fn origin_extraction() {
        assert_eq!(
            origin_of("https://app.sajn.se/embed/sign/d?token=t").as_deref(),
            Some("https://app.sajn.se")
        );
        assert_eq!(
            origin_of("http://localhost:3000?x=1").as_deref(),
            Some("http://localhost:3000")
        );
        assert_eq!(origin_of("not a url"), None);
        assert_eq!(origin_of("data:text/html,hi"), None);
    }

    #[test]
    fn origin_matches_browser_form() {
        assert_eq!(
            origin_of("https://App.Sajn.se:443/embed/sign/d?token=t").as_deref(),
            Some("https://app.sajn.se")
        );
        assert_eq!(
            origin_of("HTTP://Localhost:80/embed").as_deref(),
            Some("http://localhost")
        );
        assert_eq!(
            origin_of("https://staging.sajn.se:8443/embed").as_deref(),
            Some("https://staging.sajn.se:8443")
        );
    }
}
