//! Configuration controller with URL write-back
//!
//! The controller is the only writer of a ConfigState. Every accepted edit is
//! serialized back through a [`UrlBoundary`] straight away, so the address bar
//! always describes exactly what is on screen.

use tracing::debug;

use crate::props::DerivedProps;
use crate::schema::{Field, FieldValue};
use crate::state::ConfigState;

/// Where serialized state goes: normally the browser address bar.
pub trait UrlBoundary {
    /// Replace the current query string without adding a history entry.
    fn replace_query(&mut self, query: &str);
}

impl<F: FnMut(&str)> UrlBoundary for F {
    fn replace_query(&mut self, query: &str) {
        self(query)
    }
}

/// Result of `ConfigController::set`
///
/// Invalid input never surfaces as an error: it is rejected and the field
/// keeps its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Applied,
    /// Value equal to the current one; the URL was left alone
    Unchanged,
    Rejected,
}

pub struct ConfigController<B: UrlBoundary> {
    state: ConfigState,
    boundary: B,
}

impl<B: UrlBoundary> ConfigController<B> {
    pub fn new(state: ConfigState, boundary: B) -> Self {
        Self { state, boundary }
    }

    pub fn from_query(query: &str, boundary: B) -> Self {
        Self::new(ConfigState::parse(query), boundary)
    }

    pub fn get(&self, field: Field) -> FieldValue {
        self.state.get(field)
    }

    /// Update one field and write the whole state back to the URL.
    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) -> SetOutcome {
        let mut next = self.state.clone();
        if let Err(e) = next.apply(field, value.into()) {
            debug!("Rejected {} update: {e}", field.param());
            return SetOutcome::Rejected;
        }

        if next == self.state {
            return SetOutcome::Unchanged;
        }

        self.state = next;
        self.boundary.replace_query(&self.state.to_query());
        SetOutcome::Applied
    }

    /// Re-read state after the URL changed underneath us (e.g. navigation).
    pub fn reload(&mut self, query: &str) {
        self.state = ConfigState::parse(query);
    }

    pub fn state(&self) -> &ConfigState {
        &self.state
    }

    pub fn can_preview(&self) -> bool {
        self.state.can_preview()
    }

    pub fn derive_props(&self) -> DerivedProps {
        self.state.derive_props()
    }

    pub fn build_shareable_url(&self, origin: &str) -> String {
        self.state.build_shareable_url(origin)
    }

    pub fn boundary(&self) -> &B {
        &self.boundary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Language, Mode};

    #[derive(Default)]
    struct RecordingUrl {
        writes: Vec<String>,
    }

    impl UrlBoundary for RecordingUrl {
        fn replace_query(&mut self, query: &str) {
            self.writes.push(query.to_string());
        }
    }

    #[test]
    fn unsupported_language_is_rejected_silently() {
        let mut controller = ConfigController::from_query("language=de", RecordingUrl::default());

        assert_eq!(controller.set(Field::Language, "xx"), SetOutcome::Rejected);
        assert_eq!(controller.state().language, Language::De);
        assert!(controller.boundary().writes.is_empty());
    }

    #[test]
    fn each_edit_replaces_the_url() {
        let mut controller = ConfigController::from_query("", RecordingUrl::default());

        assert_eq!(controller.set(Field::DocumentId, "doc1"), SetOutcome::Applied);
        assert_eq!(controller.set(Field::Token, "tok1"), SetOutcome::Applied);
        assert_eq!(controller.set(Field::Mode, "view"), SetOutcome::Applied);

        assert_eq!(
            controller.boundary().writes,
            vec![
                "documentId=doc1",
                "documentId=doc1&token=tok1",
                "documentId=doc1&token=tok1&mode=view",
            ]
        );
        assert_eq!(
            ConfigState::parse(controller.boundary().writes.last().unwrap()),
            *controller.state()
        );
    }

    #[test]
    fn same_value_does_not_touch_url() {
        let mut controller = ConfigController::from_query("mode=view", RecordingUrl::default());
        assert_eq!(controller.set(Field::Mode, "view"), SetOutcome::Unchanged);
        assert!(controller.boundary().writes.is_empty());
    }

    #[test]
    fn get_reads_defaults_for_missing_and_invalid_params() {
        let controller = ConfigController::from_query("mode=bogus&scrollIndicator=", |_: &str| {});
        assert_eq!(controller.get(Field::Mode), FieldValue::String("sign".to_string()));
        assert_eq!(controller.get(Field::ScrollIndicator), FieldValue::Bool(true));
        assert_eq!(controller.get(Field::Host), FieldValue::String(String::new()));
    }

    #[test]
    fn closure_boundary_receives_query() {
        let mut last = String::new();
        {
            let mut controller = ConfigController::from_query("", |q: &str| last = q.to_string());
            controller.set(Field::AllowRejection, true);
            controller.set(Field::Background, "#fff");
        }
        assert_eq!(last, "allowRejection=true&bg=%23fff");
    }

    #[test]
    fn readiness_and_props_follow_edits() {
        let mut controller = ConfigController::from_query("", RecordingUrl::default());
        assert!(!controller.can_preview());

        controller.set(Field::DocumentId, "abc123");
        controller.set(Field::Token, "xyz789");
        controller.set(Field::Mode, "view");
        controller.set(Field::Language, "fr");
        assert!(controller.can_preview());

        let props = controller.derive_props();
        assert_eq!(props.mode, Mode::View);
        assert_eq!(props.allow_document_rejection, None);
        assert_eq!(
            controller.build_shareable_url("https://demo.example.com"),
            "https://demo.example.com/embed?documentId=abc123&token=xyz789&mode=view\
             &language=fr&scrollIndicator=true&allowRejection=false"
        );
    }

    #[test]
    fn reload_reparses_url() {
        let mut controller = ConfigController::from_query("token=a", RecordingUrl::default());
        controller.reload("token=b&language=it");
        assert_eq!(controller.state().token, "b");
        assert_eq!(controller.state().language, Language::It);
    }
}
