// SPDX-License-Identifier: MPL-2.0
//! Central store for diagnostic events.

use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::report::{write_atomic, DiagnosticReport, ReportMetadata, SerializableEvent};
use super::{
    AppStateEvent, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    UserAction,
};
use crate::error::Result;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and usable from any thread. Sending never blocks: when
/// the channel is full the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction {
            action,
            details: None,
        });
    }

    pub fn log_state(&self, state: AppStateEvent) {
        self.send(DiagnosticEventKind::AppState { state });
    }

    pub fn log_warning(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    pub fn log_error(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Dropped when full or when the collector is gone.
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Bounded channel size between handles and the collector.
const CHANNEL_CAPACITY: usize = 256;

/// Receives events from handles and keeps the most recent ones.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic start, for event offsets.
    collection_started_at: Instant,
    /// Wall-clock start, for the report header.
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every queued event into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Builds a report from the events stored so far.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Session lengths fit in u64 milliseconds
    pub fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
        );

        DiagnosticReport::new(metadata, events)
    }

    /// Pretty JSON of [`build_report`](Self::build_report).
    pub fn export_json(&self) -> Result<String> {
        Ok(self.build_report().to_json()?)
    }

    /// Drains pending events and writes the report to `path` atomically.
    pub fn export_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.process_pending();
        let json = self.export_json()?;
        write_atomic(path.as_ref(), &json)?;
        Ok(())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::section::Section;
    use tempfile::tempdir;

    #[test]
    fn handle_events_arrive_after_process_pending() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_action(UserAction::GalleryNext);
        handle.log_warning("settings unreadable");
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn oldest_events_are_evicted_at_capacity() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(10));
        let handle = collector.handle();
        for index in 0..15 {
            handle.log_action(UserAction::GalleryJump { index });
        }
        collector.process_pending();

        assert_eq!(collector.len(), 10);
        let first = collector.iter().next().map(|event| event.kind.clone());
        assert_eq!(
            first,
            Some(DiagnosticEventKind::UserAction {
                action: UserAction::GalleryJump { index: 5 },
                details: None,
            })
        );
    }

    #[test]
    fn handles_work_across_threads() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        std::thread::spawn(move || handle.log_error("delivery failed"))
            .join()
            .expect("thread should not panic");

        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn report_contains_events_in_order() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log_state(AppStateEvent::Mounted {
            regions: 6,
            rotation_interval_ms: 5000,
        });
        handle.log_action(UserAction::navigate_to(Section::Contact));
        collector.process_pending();

        let report = collector.build_report();
        assert_eq!(report.metadata.event_count, 2);
        assert_eq!(report.summary.state_changes, 1);
        assert_eq!(report.summary.user_actions, 1);
        assert!(matches!(
            report.events[0].kind,
            DiagnosticEventKind::AppState { .. }
        ));
    }

    #[test]
    fn export_to_file_writes_parseable_json() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("diagnostics.json");
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_error("inquiry rejected");

        collector.export_to_file(&path).expect("export succeeds");

        let text = std::fs::read_to_string(&path).expect("report written");
        let report: DiagnosticReport = serde_json::from_str(&text).expect("valid report");
        assert_eq!(report.summary.errors, 1);
    }
}
