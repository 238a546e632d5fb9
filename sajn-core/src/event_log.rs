//! In-memory log of widget callbacks, oldest first

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::debug;

use crate::widget::WidgetEvent;

/// How many entries the log keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogRetention {
    /// Keep everything until cleared
    #[default]
    Unbounded,
    /// Keep only the newest `n` entries
    KeepLast(usize),
}

/// A single callback invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl LogEntry {
    /// Wall-clock time of the entry for display.
    pub fn display_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    /// Payload rendered as compact JSON.
    pub fn display_data(&self) -> Option<String> {
        self.data.as_ref().map(|d| d.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    entries: Vec<LogEntry>,
    retention: LogRetention,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_retention(retention: LogRetention) -> Self {
        Self {
            entries: Vec::new(),
            retention,
        }
    }

    /// Append an entry stamped with the current local time.
    pub fn append(&mut self, event: &str, data: Option<serde_json::Value>) {
        debug!("Widget event {event}");
        self.entries.push(LogEntry {
            timestamp: Local::now(),
            event: event.to_string(),
            data,
        });

        if let LogRetention::KeepLast(max) = self.retention {
            if self.entries.len() > max {
                let excess = self.entries.len() - max;
                self.entries.drain(..excess);
            }
        }
    }

    /// Forward a widget callback.
    pub fn record(&mut self, event: &WidgetEvent) {
        self.append(event.name(), event.payload());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn callbacks_are_kept_in_invocation_order() {
        let mut log = EventLog::new();

        log.record(&WidgetEvent::SignerCompleted(Some(json!({ "signerId": 1 }))));
        log.record(&WidgetEvent::DocumentError(Some(json!({
            "code": "EXPIRED",
            "message": "Token expired",
        }))));
        log.record(&WidgetEvent::SignerRejected(Some(json!({ "reason": "typo" }))));

        let summary: Vec<_> = log
            .entries()
            .iter()
            .map(|e| (e.event.as_str(), e.data.clone()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("onSignerCompleted", Some(json!({ "signerId": 1 }))),
                (
                    "onDocumentError",
                    Some(json!({ "code": "EXPIRED", "message": "Token expired" }))
                ),
                ("onSignerRejected", Some(json!({ "reason": "typo" }))),
            ]
        );
        assert!(log.entries()[0].timestamp <= log.entries()[2].timestamp);
    }

    #[test]
    fn ready_event_has_no_payload_and_duplicates_are_kept() {
        let mut log = EventLog::new();
        log.record(&WidgetEvent::DocumentReady);
        log.record(&WidgetEvent::DocumentReady);

        assert_eq!(log.len(), 2);
        assert!(log.entries().iter().all(|e| e.data.is_none()));
        assert_eq!(log.entries()[0].display_data(), None);
    }

    #[test]
    fn signer_event_without_payload_is_logged() {
        let mut log = EventLog::new();
        log.record(&WidgetEvent::SignerCompleted(None));

        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].event, "onSignerCompleted");
        assert_eq!(log.entries()[0].data, None);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut log = EventLog::new();
        log.append("onDocumentReady", None);
        log.clear();
        assert!(log.is_empty());
        log.clear();
        assert!(log.is_empty());

        log.append("onDocumentReady", None);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn keep_last_drops_oldest() {
        let mut log = EventLog::with_retention(LogRetention::KeepLast(2));
        for n in 0..4 {
            log.append("onSignerCompleted", Some(json!(n)));
        }

        let data: Vec<_> = log.entries().iter().map(|e| e.data.clone()).collect();
        assert_eq!(data, vec![Some(json!(2)), Some(json!(3))]);
    }

    #[test]
    fn display_formats() {
        let mut log = EventLog::new();
        log.append("onSignerRejected", Some(json!({ "a": 1 })));

        let entry = &log.entries()[0];
        assert_eq!(entry.display_time().len(), 8);
        assert_eq!(entry.display_data().as_deref(), Some(r#"{"a":1}"#));
    }
}
