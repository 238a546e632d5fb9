//! sajn-ui - View components for the embed demo
//!
//! Pure, props-based components. They render a ConfigState and report edits
//! through callbacks; URL synchronization and the widget frame live in the
//! web app.

pub mod components;

pub use components::*;
