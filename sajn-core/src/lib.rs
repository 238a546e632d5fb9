//! sajn-core - Configuration model for the embed demo
//!
//! Owns the URL-backed configuration schema, the props derived from it for
//! the embed widget, the widget lifecycle rules and the event log. Pure data
//! and logic, no I/O: both the web app and the server build on it.

pub mod controller;
pub mod error;
pub mod event_log;
pub mod props;
pub mod schema;
pub mod state;
pub mod widget;

pub use controller::{ConfigController, SetOutcome, UrlBoundary};
pub use error::ConfigError;
pub use event_log::{EventLog, LogEntry, LogRetention};
pub use props::{CssVars, DerivedProps};
pub use schema::{Field, FieldDef, FieldKind, FieldValue, Language, Mode, SCHEMA};
pub use state::{ConfigState, DiagnosticReason, ParamDiagnostic};
pub use widget::{EmbedKey, EmbedSlot, SlotChange, WidgetEvent, WidgetFactory};
