//! ConfigState and its URL query representation
//!
//! Parsing is lenient: every parameter that is absent or does not fit its
//! field reads as the schema default, so any URL produces a renderable state.
//! Serialization goes through the same schema, which keeps
//! `parse(serialize(s)) == s` for every state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::props::DerivedProps;
use crate::schema::{Field, FieldKind, FieldValue, Language, Mode, SCHEMA};
use crate::widget::EmbedKey;

/// Path of the minimal embed page that share links point to.
pub const EMBED_PATH: &str = "/embed";

/// The complete, URL-derived configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigState {
    #[serde(rename = "documentId")]
    pub document_id: String,
    pub token: String,
    pub mode: Mode,
    pub language: Language,
    pub host: String,
    #[serde(rename = "scrollIndicator")]
    pub scroll_indicator: bool,
    #[serde(rename = "allowDocumentRejection")]
    pub allow_document_rejection: bool,
    #[serde(rename = "bg")]
    pub background: String,
    pub primary: String,
    #[serde(rename = "fg")]
    pub foreground: String,
    #[serde(rename = "muted")]
    pub muted_foreground: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            document_id: String::new(),
            token: String::new(),
            mode: Mode::Sign,
            language: Language::En,
            host: String::new(),
            scroll_indicator: true,
            allow_document_rejection: false,
            background: String::new(),
            primary: String::new(),
            foreground: String::new(),
            muted_foreground: String::new(),
        }
    }
}

/// Why a URL parameter was replaced by its default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticReason {
    /// Not one of the field's allowed values
    UnknownValue,
    MalformedBoolean,
}

/// A parameter that fell back to its default during parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDiagnostic {
    pub param: String,
    pub value: String,
    pub reason: DiagnosticReason,
}

impl ParamDiagnostic {
    fn from_error(param: &'static str, value: &str, err: &ConfigError) -> Self {
        let reason = match err {
            ConfigError::InvalidBool { .. } => DiagnosticReason::MalformedBoolean,
            ConfigError::InvalidChoice { .. } | ConfigError::TypeMismatch { .. } => {
                DiagnosticReason::UnknownValue
            }
        };
        Self {
            param: param.to_string(),
            value: value.to_string(),
            reason,
        }
    }

    pub fn to_error(&self) -> ConfigError {
        match self.reason {
            DiagnosticReason::UnknownValue => ConfigError::InvalidChoice {
                field: Field::from_param(&self.param).map_or("query", Field::param),
                value: self.value.clone(),
            },
            DiagnosticReason::MalformedBoolean => ConfigError::InvalidBool {
                param: Field::from_param(&self.param).map_or("query", Field::param),
                value: self.value.clone(),
            },
        }
    }
}

impl ConfigState {
    /// Parse a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        Self::parse_with_diagnostics(query).0
    }

    /// Parse a query string and report every parameter that fell back to its default.
    pub fn parse_with_diagnostics(query: &str) -> (Self, Vec<ParamDiagnostic>) {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = Self::default();
        let mut diagnostics = Vec::new();

        // Never fails in practice: stray `%` is kept and invalid UTF-8 becomes U+FFFD
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_else(|e| {
            debug!("Ignoring undecodable query string: {e}");
            Vec::new()
        });

        for def in &SCHEMA {
            // First occurrence wins, like URLSearchParams.get
            let Some((_, raw)) = pairs.iter().find(|(k, _)| k == def.param) else {
                continue;
            };

            match def.parse_param(raw) {
                Ok(value) => {
                    if let Err(e) = state.apply(def.field, value) {
                        debug!("Falling back to default for {}: {e}", def.param);
                    }
                }
                Err(e) => {
                    debug!("Falling back to default for {}: {e}", def.param);
                    diagnostics.push(ParamDiagnostic::from_error(def.param, raw, &e));
                }
            }
        }

        (state, diagnostics)
    }

    /// Parse a query string, failing on the first parameter that does not fit its field.
    pub fn parse_strict(query: &str) -> Result<Self, ConfigError> {
        let (state, diagnostics) = Self::parse_with_diagnostics(query);
        match diagnostics.first() {
            Some(diagnostic) => Err(diagnostic.to_error()),
            None => Ok(state),
        }
    }

    /// Current value of a field.
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::DocumentId => FieldValue::String(self.document_id.clone()),
            Field::Token => FieldValue::String(self.token.clone()),
            Field::Mode => FieldValue::String(self.mode.as_str().to_string()),
            Field::Language => FieldValue::String(self.language.as_str().to_string()),
            Field::Host => FieldValue::String(self.host.clone()),
            Field::ScrollIndicator => FieldValue::Bool(self.scroll_indicator),
            Field::AllowRejection => FieldValue::Bool(self.allow_document_rejection),
            Field::Background => FieldValue::String(self.background.clone()),
            Field::Primary => FieldValue::String(self.primary.clone()),
            Field::Foreground => FieldValue::String(self.foreground.clone()),
            Field::MutedForeground => FieldValue::String(self.muted_foreground.clone()),
        }
    }

    /// Validate and store a field value. On error the state is unchanged.
    pub fn apply(&mut self, field: Field, value: FieldValue) -> Result<(), ConfigError> {
        let value = field.def().validate(value)?;

        match (field, value) {
            (Field::Mode, FieldValue::String(s)) => self.mode = s.parse()?,
            (Field::Language, FieldValue::String(s)) => self.language = s.parse()?,
            (Field::ScrollIndicator, FieldValue::Bool(b)) => self.scroll_indicator = b,
            (Field::AllowRejection, FieldValue::Bool(b)) => self.allow_document_rejection = b,
            (field, FieldValue::String(s)) => match field {
                Field::DocumentId => self.document_id = s,
                Field::Token => self.token = s,
                Field::Host => self.host = s,
                Field::Background => self.background = s,
                Field::Primary => self.primary = s,
                Field::Foreground => self.foreground = s,
                Field::MutedForeground => self.muted_foreground = s,
                _ => return Err(ConfigError::TypeMismatch { field: field.param() }),
            },
            (field, FieldValue::Bool(_)) => {
                return Err(ConfigError::TypeMismatch { field: field.param() })
            }
        }

        Ok(())
    }

    /// Both document ID and token are present; the widget may be rendered.
    pub fn can_preview(&self) -> bool {
        SCHEMA
            .iter()
            .filter(|def| def.required)
            .all(|def| matches!(self.get(def.field), FieldValue::String(s) if !s.trim().is_empty()))
    }

    /// Query string holding only the fields that differ from their defaults.
    ///
    /// Used when mirroring edits into the address bar so an untouched page keeps
    /// a clean URL. Empty when every field is at its default.
    pub fn to_query(&self) -> String {
        let pairs = SCHEMA.iter().filter_map(|def| {
            let value = self.get(def.field);
            (value != def.kind.default_value()).then_some((def.param, value))
        });
        encode_pairs(pairs)
    }

    /// Query string in share-link form.
    ///
    /// Required, enum and boolean fields are always written; optional text
    /// fields only when non-empty.
    pub fn share_query(&self) -> String {
        let pairs = SCHEMA.iter().filter_map(|def| {
            let value = self.get(def.field);
            let omit = matches!(def.kind, FieldKind::Text { .. })
                && !def.required
                && value.as_str().is_some_and(str::is_empty);
            (!omit).then_some((def.param, value))
        });
        encode_pairs(pairs)
    }

    /// URL of the minimal embed page rendering this exact state.
    pub fn build_shareable_url(&self, origin: &str) -> String {
        format!(
            "{}{}?{}",
            origin.trim_end_matches('/'),
            EMBED_PATH,
            self.share_query()
        )
    }

    pub fn derive_props(&self) -> DerivedProps {
        DerivedProps::derive(self)
    }

    pub fn embed_key(&self) -> EmbedKey {
        EmbedKey::of(self)
    }
}

fn encode_pairs(pairs: impl Iterator<Item = (&'static str, FieldValue)>) -> String {
    let mut out = String::new();
    for (param, value) in pairs {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(param);
        out.push('=');
        match value {
            FieldValue::Bool(b) => out.push_str(if b { "true" } else { "false" }),
            FieldValue::String(s) => out.push_str(&urlencoding::encode(&s)),
        }
    }
    out
}
