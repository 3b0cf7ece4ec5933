// SPDX-License-Identifier: MPL-2.0
//! Serializable diagnostic report.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

/// Report header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339, UTC)
    pub generated_at: String,
    pub app_version: String,
    /// When collection started (RFC 3339, UTC)
    pub collection_started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            collection_duration_ms,
            event_count,
        }
    }
}

/// An event with its time relative to the start of collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SerializableEvent {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Session lengths fit in u64 milliseconds
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: DiagnosticEventKind,
    ) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;
        Self { timestamp_ms, kind }
    }
}

/// Event counts per kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub user_actions: usize,
    pub state_changes: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl ReportSummary {
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        events
            .iter()
            .fold(Self::default(), |mut summary, event| {
                match event.kind {
                    DiagnosticEventKind::UserAction { .. } => summary.user_actions += 1,
                    DiagnosticEventKind::AppState { .. } => summary.state_changes += 1,
                    DiagnosticEventKind::Warning { .. } => summary.warnings += 1,
                    DiagnosticEventKind::Error { .. } => summary.errors += 1,
                }
                summary
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        let summary = ReportSummary::from_events(&events);
        Self {
            metadata,
            summary,
            events,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Writes `content` next to `path` and renames it into place.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::UserAction;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn event_offset_is_relative_to_start() {
        let start = Instant::now();
        let event = SerializableEvent::new(
            start + Duration::from_millis(1_250),
            start,
            DiagnosticEventKind::Warning {
                message: "late".into(),
            },
        );
        assert_eq!(event.timestamp_ms, 1_250);
    }

    #[test]
    fn event_before_start_saturates_to_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let event = SerializableEvent::new(
            Instant::now(),
            start,
            DiagnosticEventKind::Error {
                message: "early".into(),
            },
        );
        assert_eq!(event.timestamp_ms, 0);
    }

    #[test]
    fn summary_counts_each_kind() {
        let start = Instant::now();
        let events = vec![
            SerializableEvent::new(
                start,
                start,
                DiagnosticEventKind::UserAction {
                    action: UserAction::GalleryNext,
                    details: None,
                },
            ),
            SerializableEvent::new(
                start,
                start,
                DiagnosticEventKind::Warning {
                    message: "w".into(),
                },
            ),
            SerializableEvent::new(
                start,
                start,
                DiagnosticEventKind::Warning {
                    message: "w2".into(),
                },
            ),
        ];
        let summary = ReportSummary::from_events(&events);
        assert_eq!(summary.user_actions, 1);
        assert_eq!(summary.warnings, 2);
        assert_eq!(summary.errors, 0);
    }

    #[test]
    fn flattened_event_serializes_inline() {
        let event = SerializableEvent {
            timestamp_ms: 42,
            kind: DiagnosticEventKind::Error {
                message: "boom".into(),
            },
        };
        let json = serde_json::to_string(&event).expect("serialization should succeed");
        assert_eq!(json, r#"{"timestamp_ms":42,"type":"error","message":"boom"}"#);
    }

    #[test]
    fn write_atomic_replaces_file_and_leaves_no_temp() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("reports").join("session.json");

        write_atomic(&path, "{\"a\":1}").expect("first write");
        write_atomic(&path, "{\"a\":2}").expect("second write");

        assert_eq!(fs::read_to_string(&path).expect("read back"), "{\"a\":2}");
        assert!(!path.with_extension("json.tmp").exists());
    }
}
