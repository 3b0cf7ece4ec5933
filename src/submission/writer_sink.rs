// SPDX-License-Identifier: MPL-2.0
//! Inquiry sink that logs one JSON line per inquiry to a writer.

use super::{InquirySink, Receipt, SubmissionError};
use crate::domain::inquiry::ContactFormData;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// JSON shape of a logged inquiry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRecord<'a> {
    pub reference: u64,
    pub received_at: String,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    /// Wire value, empty when unset.
    pub property_type: &'a str,
    pub message: &'a str,
}

/// Writes inquiries as JSON lines to `W`.
///
/// References start at 1 and increase per delivered inquiry.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
    next_reference: AtomicU64,
}

impl WriterSink<io::Stdout> {
    /// Sink that prints to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            next_reference: AtomicU64::new(1),
        }
    }

    /// Returns the inner writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("next_reference", &self.next_reference.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl<W: Write + Send> InquirySink for WriterSink<W> {
    fn deliver(&self, inquiry: &ContactFormData) -> Result<Receipt, SubmissionError> {
        let delivered_at = Utc::now();
        let reference = self.next_reference.fetch_add(1, Ordering::Relaxed);
        let record = InquiryRecord {
            reference,
            received_at: delivered_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            name: &inquiry.name,
            email: &inquiry.email,
            phone: &inquiry.phone,
            property_type: inquiry.property_type_value(),
            message: &inquiry.message,
        };
        let line = serde_json::to_string(&record)?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| SubmissionError::Io("inquiry log lock poisoned".into()))?;
        writeln!(writer, "{}", line)?;
        writer.flush()?;

        Ok(Receipt {
            reference,
            delivered_at,
        })
    }
}
