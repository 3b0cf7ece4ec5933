// SPDX-License-Identifier: MPL-2.0
//! In-process diagnostics.
//!
//! Components log through a [`DiagnosticsHandle`]; the application drains
//! the channel into a [`DiagnosticsCollector`] on each update and, when
//! started with `--diagnostics <file>`, writes a JSON report on exit.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped user action, state change, warning or error
//! - [`DiagnosticReport`]: Exported form with relative timestamps
//!
//! # Privacy
//!
//! Contact form contents are never logged. An inquiry is recorded as its
//! property type and its outcome only.

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{AppStateEvent, DiagnosticEvent, DiagnosticEventKind, UserAction};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};
