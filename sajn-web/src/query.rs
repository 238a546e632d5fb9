//! Route query binding
//!
//! The router hands us the raw query string and renders it back from our
//! `Display` impl, so the address bar stays the single source of truth:
//! edits go through the controller, which replaces the route, which
//! re-renders the page from the new URL.

use std::fmt;

use dioxus::prelude::*;
use dioxus::router::FromQuery;
use sajn_core::{ConfigController, ConfigState, Field, FieldValue, SetOutcome, UrlBoundary};

use crate::Route;

/// ConfigState carried in a route's query string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigQuery(pub ConfigState);

impl ConfigQuery {
    pub fn into_state(self) -> ConfigState {
        self.0
    }
}

impl FromQuery for ConfigQuery {
    fn from_query(query: &str) -> Self {
        Self(ConfigState::parse(query))
    }
}

impl fmt::Display for ConfigQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_query())
    }
}

/// Writes the demo page URL, replacing the current history entry
struct DemoRouteBoundary;

impl UrlBoundary for DemoRouteBoundary {
    fn replace_query(&mut self, query: &str) {
        navigator().replace(Route::DemoPage {
            query: ConfigQuery::from_query(query),
        });
    }
}

/// Apply a form edit to the demo page state and mirror it into the URL.
pub fn apply_edit(state: &ConfigState, field: Field, value: FieldValue) -> SetOutcome {
    ConfigController::new(state.clone(), DemoRouteBoundary).set(field, value)
}

/// Origin of the page, used as the base of share links.
pub fn current_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
