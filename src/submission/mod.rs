// SPDX-License-Identifier: MPL-2.0
//! Delivery of contact inquiries.
//!
//! [`InquirySink`] is the port the page hands completed forms to. It is
//! synchronous; [`dispatch`] moves the call onto tokio's blocking pool so
//! the UI thread never waits on it.

pub mod writer_sink;

pub use writer_sink::{InquiryRecord, WriterSink};

use crate::domain::inquiry::ContactFormData;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

/// Proof that an inquiry was accepted by a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Sink-assigned sequence number.
    pub reference: u64,
    pub delivered_at: DateTime<Utc>,
}

/// Why an inquiry could not be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The sink could not write the inquiry.
    Io(String),
    /// The inquiry could not be encoded.
    Encoding(String),
    /// The sink refused the inquiry.
    Rejected(String),
    /// The delivery task panicked or was cancelled.
    Interrupted,
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Io(e) => write!(f, "could not write inquiry: {}", e),
            SubmissionError::Encoding(e) => write!(f, "could not encode inquiry: {}", e),
            SubmissionError::Rejected(reason) => write!(f, "inquiry rejected: {}", reason),
            SubmissionError::Interrupted => write!(f, "delivery was interrupted"),
        }
    }
}

impl std::error::Error for SubmissionError {}

impl From<std::io::Error> for SubmissionError {
    fn from(err: std::io::Error) -> Self {
        SubmissionError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SubmissionError {
    fn from(err: serde_json::Error) -> Self {
        SubmissionError::Encoding(err.to_string())
    }
}

/// Destination for submitted inquiries.
///
/// Implementations are called from a blocking worker thread and may block.
/// There is no retry: a failed delivery is reported once.
pub trait InquirySink: Send + Sync + fmt::Debug {
    fn deliver(&self, inquiry: &ContactFormData) -> Result<Receipt, SubmissionError>;
}

/// Delivers `inquiry` through `sink` off the UI thread.
pub async fn dispatch(
    sink: Arc<dyn InquirySink>,
    inquiry: ContactFormData,
) -> Result<Receipt, SubmissionError> {
    tokio::task::spawn_blocking(move || sink.deliver(&inquiry))
        .await
        .unwrap_or(Err(SubmissionError::Interrupted))
}
