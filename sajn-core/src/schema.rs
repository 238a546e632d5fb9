//! Configuration schema
//!
//! One static table describes every configuration field: the URL parameter it
//! is bound to, the prop name the embed widget knows it by, its type and its
//! default. Parsing, serialization, the form and the derived props all read
//! from this table so the two pages can never disagree on a rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::state::ConfigState;

const MODE_VALUES: &[&str] = &["sign", "view"];
const LANGUAGE_VALUES: &[&str] = &["sv", "en", "no", "da", "fi", "de", "is", "es", "fr", "it"];

/// Which embed component is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Sign,
    View,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Sign, Mode::View];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Sign => "sign",
            Mode::View => "view",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Sign => "Sign",
            Mode::View => "View",
        }
    }

    /// Name of the widget component for this mode, used as the dialog title.
    pub fn component_name(self) -> &'static str {
        match self {
            Mode::Sign => "EmbedSignDocument",
            Mode::View => "EmbedViewDocument",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidChoice {
                field: "mode",
                value: s.to_string(),
            })
    }
}

/// Widget UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Sv,
    #[default]
    En,
    No,
    Da,
    Fi,
    De,
    Is,
    Es,
    Fr,
    It,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::Sv,
        Language::En,
        Language::No,
        Language::Da,
        Language::Fi,
        Language::De,
        Language::Is,
        Language::Es,
        Language::Fr,
        Language::It,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Sv => "sv",
            Language::En => "en",
            Language::No => "no",
            Language::Da => "da",
            Language::Fi => "fi",
            Language::De => "de",
            Language::Is => "is",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::It => "it",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Sv => "Svenska",
            Language::No => "Norsk",
            Language::Da => "Dansk",
            Language::Fi => "Suomi",
            Language::De => "Deutsch",
            Language::Is => "Islenska",
            Language::Es => "Espanol",
            Language::Fr => "Francais",
            Language::It => "Italiano",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidChoice {
                field: "language",
                value: s.to_string(),
            })
    }
}

/// A configuration field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DocumentId,
    Token,
    Mode,
    Language,
    Host,
    ScrollIndicator,
    AllowRejection,
    Background,
    Primary,
    Foreground,
    MutedForeground,
}

impl Field {
    /// Fields in schema order, which is also the share-link parameter order.
    pub const ALL: [Field; 11] = [
        Field::DocumentId,
        Field::Token,
        Field::Mode,
        Field::Language,
        Field::Host,
        Field::ScrollIndicator,
        Field::AllowRejection,
        Field::Background,
        Field::Primary,
        Field::Foreground,
        Field::MutedForeground,
    ];

    pub const THEME: [Field; 4] = [
        Field::Background,
        Field::Primary,
        Field::Foreground,
        Field::MutedForeground,
    ];

    pub fn def(self) -> &'static FieldDef {
        // SCHEMA is declared in Field::ALL order
        &SCHEMA[self as usize]
    }

    pub fn param(self) -> &'static str {
        self.def().param
    }

    pub fn from_param(param: &str) -> Option<Field> {
        SCHEMA.iter().find(|d| d.param == param).map(|d| d.field)
    }
}

/// Value held by a field, as seen through the generic get/set interface
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Bool(bool),
    String(String),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            FieldValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            FieldValue::String(_) => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

/// Type of a field together with its default
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form string
    Text { default: &'static str },
    /// Boolean flag
    Flag { default: bool },
    /// One of a fixed set of string values
    Choice {
        options: &'static [&'static str],
        default: &'static str,
    },
}

impl FieldKind {
    pub fn default_value(&self) -> FieldValue {
        match self {
            FieldKind::Text { default } => FieldValue::String(default.to_string()),
            FieldKind::Flag { default } => FieldValue::Bool(*default),
            FieldKind::Choice { default, .. } => FieldValue::String(default.to_string()),
        }
    }
}

/// Definition of a field with its URL binding and form metadata
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDef {
    pub field: Field,
    /// URL query parameter name
    pub param: &'static str,
    /// Name the embed widget knows this value by
    pub prop: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Must be non-empty after trimming for the preview to render
    pub required: bool,
    pub placeholder: Option<&'static str>,
    /// The form only shows this field while the referenced field has this value.
    pub visible_when: Option<(Field, &'static str)>,
}

impl FieldDef {
    /// Check a value set through the form against this field's type.
    pub fn validate(&self, value: FieldValue) -> Result<FieldValue, ConfigError> {
        match (&self.kind, value) {
            (FieldKind::Text { .. }, FieldValue::String(s)) => Ok(FieldValue::String(s)),
            (FieldKind::Flag { .. }, FieldValue::Bool(b)) => Ok(FieldValue::Bool(b)),
            (FieldKind::Choice { options, .. }, FieldValue::String(s)) => {
                if options.contains(&s.as_str()) {
                    Ok(FieldValue::String(s))
                } else {
                    Err(ConfigError::InvalidChoice {
                        field: self.param,
                        value: s,
                    })
                }
            }
            _ => Err(ConfigError::TypeMismatch { field: self.param }),
        }
    }

    /// Parse a raw URL parameter value for this field.
    pub fn parse_param(&self, raw: &str) -> Result<FieldValue, ConfigError> {
        match &self.kind {
            FieldKind::Text { .. } => Ok(FieldValue::String(raw.to_string())),
            FieldKind::Flag { .. } => parse_bool(raw)
                .map(FieldValue::Bool)
                .ok_or_else(|| ConfigError::InvalidBool {
                    param: self.param,
                    value: raw.to_string(),
                }),
            FieldKind::Choice { .. } => self.validate(FieldValue::String(raw.to_string())),
        }
    }

    /// Check if this field should be shown in the form for the given state.
    pub fn is_visible(&self, state: &ConfigState) -> bool {
        match self.visible_when {
            None => true,
            Some((field, value)) => state.get(field).as_str() == Some(value),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        Some(false)
    } else {
        None
    }
}

/// The configuration schema, in `Field::ALL` order.
pub static SCHEMA: [FieldDef; 11] = [
    FieldDef {
        field: Field::DocumentId,
        param: "documentId",
        prop: "documentId",
        label: "Document ID",
        kind: FieldKind::Text { default: "" },
        required: true,
        placeholder: Some("Enter document ID"),
        visible_when: None,
    },
    FieldDef {
        field: Field::Token,
        param: "token",
        prop: "token",
        label: "Token",
        kind: FieldKind::Text { default: "" },
        required: true,
        placeholder: Some("Enter signer token"),
        visible_when: None,
    },
    FieldDef {
        field: Field::Mode,
        param: "mode",
        prop: "mode",
        label: "Mode",
        kind: FieldKind::Choice {
            options: MODE_VALUES,
            default: "sign",
        },
        required: false,
        placeholder: None,
        visible_when: None,
    },
    FieldDef {
        field: Field::Language,
        param: "language",
        prop: "language",
        label: "Language",
        kind: FieldKind::Choice {
            options: LANGUAGE_VALUES,
            default: "en",
        },
        required: false,
        placeholder: None,
        visible_when: None,
    },
    FieldDef {
        field: Field::Host,
        param: "host",
        prop: "host",
        label: "Host (optional)",
        kind: FieldKind::Text { default: "" },
        required: false,
        placeholder: Some("https://app.sajn.se"),
        visible_when: None,
    },
    FieldDef {
        field: Field::ScrollIndicator,
        param: "scrollIndicator",
        prop: "showScrollIndicator",
        label: "Show scroll indicator",
        kind: FieldKind::Flag { default: true },
        required: false,
        placeholder: None,
        visible_when: None,
    },
    FieldDef {
        field: Field::AllowRejection,
        param: "allowRejection",
        prop: "allowDocumentRejection",
        label: "Allow document rejection",
        kind: FieldKind::Flag { default: false },
        required: false,
        placeholder: None,
        visible_when: Some((Field::Mode, "sign")),
    },
    FieldDef {
        field: Field::Background,
        param: "bg",
        prop: "background",
        label: "Background",
        kind: FieldKind::Text { default: "" },
        required: false,
        placeholder: Some("#ffffff"),
        visible_when: None,
    },
    FieldDef {
        field: Field::Primary,
        param: "primary",
        prop: "primary",
        label: "Primary",
        kind: FieldKind::Text { default: "" },
        required: false,
        placeholder: Some("#000000"),
        visible_when: None,
    },
    FieldDef {
        field: Field::Foreground,
        param: "fg",
        prop: "foreground",
        label: "Foreground",
        kind: FieldKind::Text { default: "" },
        required: false,
        placeholder: Some("#171717"),
        visible_when: None,
    },
    FieldDef {
        field: Field::MutedForeground,
        param: "muted",
        prop: "mutedForeground",
        label: "Muted",
        kind: FieldKind::Text { default: "" },
        required: false,
        placeholder: Some("#737373"),
        visible_when: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_is_in_field_order() {
        for (idx, field) in Field::ALL.iter().enumerate() {
            assert_eq!(SCHEMA[idx].field, *field);
            assert_eq!(field.def().field, *field);
        }
    }

    #[test]
    fn param_names_are_unique_and_resolvable() {
        for def in &SCHEMA {
            assert_eq!(Field::from_param(def.param), Some(def.field));
        }
        assert_eq!(Field::from_param("background"), None);
    }

    #[test]
    fn theme_params_map_to_css_var_names() {
        let pairs: Vec<_> = Field::THEME
            .iter()
            .map(|f| (f.def().param, f.def().prop))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("bg", "background"),
                ("primary", "primary"),
                ("fg", "foreground"),
                ("muted", "mutedForeground"),
            ]
        );
    }

    #[test]
    fn choice_defaults_are_valid_options() {
        for def in &SCHEMA {
            if let FieldKind::Choice { options, default } = def.kind {
                assert!(options.contains(&default), "{} default", def.param);
            }
        }
    }

    #[test]
    fn choice_options_match_enums() {
        let modes: Vec<_> = Mode::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(modes, MODE_VALUES);
        let langs: Vec<_> = Language::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(langs, LANGUAGE_VALUES);
    }

    #[test]
    fn parse_bool_forms() {
        let def = Field::ScrollIndicator.def();
        assert_eq!(def.parse_param("true"), Ok(FieldValue::Bool(true)));
        assert_eq!(def.parse_param("FALSE"), Ok(FieldValue::Bool(false)));
        assert_eq!(def.parse_param("1"), Ok(FieldValue::Bool(true)));
        assert_eq!(def.parse_param("0"), Ok(FieldValue::Bool(false)));
        assert!(matches!(
            def.parse_param("yes"),
            Err(ConfigError::InvalidBool { .. })
        ));
    }

    #[test]
    fn validate_rejects_unknown_choice_and_wrong_type() {
        let lang = Field::Language.def();
        assert!(lang.validate("fr".into()).is_ok());
        assert!(matches!(
            lang.validate("xx".into()),
            Err(ConfigError::InvalidChoice { field: "language", .. })
        ));
        assert!(matches!(
            Field::DocumentId.def().validate(true.into()),
            Err(ConfigError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn enum_from_str() {
        assert_eq!("view".parse::<Mode>(), Ok(Mode::View));
        assert!("View".parse::<Mode>().is_err());
        assert_eq!("is".parse::<Language>(), Ok(Language::Is));
        assert_eq!(Language::Is.label(), "Islenska");
        assert_eq!(Mode::Sign.component_name(), "EmbedSignDocument");
    }

    #[test]
    fn rejection_flag_only_visible_in_sign_mode() {
        let def = Field::AllowRejection.def();
        let mut state = ConfigState {
            allow_document_rejection: true,
            ..ConfigState::default()
        };
        assert!(def.is_visible(&state));

        state.mode = Mode::View;
        assert!(!def.is_visible(&state));
        assert!(state.allow_document_rejection);
        assert!(Field::ScrollIndicator.def().is_visible(&state));
    }
}
