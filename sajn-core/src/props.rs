//! Props handed to the embed widget
//!
//! Only values that carry information are passed: an empty host or theme
//! color would override the widget's own defaults with nothing.

use serde::Serialize;

use crate::schema::{Language, Mode};
use crate::state::ConfigState;

/// Theme overrides, each present only when set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_foreground: Option<String>,
}

impl CssVars {
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Set variables as (widget variable name, value), in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("background", &self.background),
            ("primary", &self.primary),
            ("foreground", &self.foreground),
            ("mutedForeground", &self.muted_foreground),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }
}

/// The minimal prop set for the embed widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedProps {
    /// Selects the widget component; not itself a prop
    #[serde(skip)]
    pub mode: Mode,
    pub document_id: String,
    pub token: String,
    pub language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub show_scroll_indicator: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_vars: Option<CssVars>,
    /// Only the signing widget accepts this prop
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_document_rejection: Option<bool>,
}

impl DerivedProps {
    pub fn derive(state: &ConfigState) -> Self {
        let css_vars = CssVars {
            background: non_empty(&state.background),
            primary: non_empty(&state.primary),
            foreground: non_empty(&state.foreground),
            muted_foreground: non_empty(&state.muted_foreground),
        };

        Self {
            mode: state.mode,
            document_id: state.document_id.clone(),
            token: state.token.clone(),
            language: state.language,
            host: non_empty(&state.host),
            show_scroll_indicator: state.scroll_indicator,
            css_vars: (!css_vars.is_empty()).then_some(css_vars),
            allow_document_rejection: (state.mode == Mode::Sign)
                .then_some(state.allow_document_rejection),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
