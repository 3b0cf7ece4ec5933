// SPDX-License-Identifier: MPL-2.0
//! Contact form state machine.
//!
//! ```text
//!            begin_submit (fields valid)
//!   Editing ─────────────────────────────► Submitting
//!      ▲                                        │
//!      └──────────── finish_submit ─────────────┘
//! ```
//!
//! While submitting, edits are ignored and a second submission is refused,
//! so at most one inquiry is in flight.

use crate::domain::inquiry::{ContactFormData, FormField, PropertyType};
use crate::submission::{Receipt, SubmissionError};
use std::fmt;

/// Lifecycle phase of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
}

/// Rejected field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The property type selector only accepts its four wire values or `""`.
    UnknownPropertyType(String),
    /// Edits are ignored while an inquiry is being delivered.
    Locked,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::UnknownPropertyType(value) => {
                write!(f, "unknown property type: {:?}", value)
            }
            FormError::Locked => write!(f, "the form is being submitted"),
        }
    }
}

impl std::error::Error for FormError {}

/// Why a submission did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    AlreadySubmitting,
    /// Required fields left blank, in form order.
    MissingFields(Vec<FormField>),
}

impl fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitRejected::AlreadySubmitting => {
                write!(f, "Your previous message is still being sent.")
            }
            SubmitRejected::MissingFields(fields) => {
                let labels: Vec<_> = fields.iter().map(|field| field.label()).collect();
                write!(f, "Please fill in: {}.", labels.join(", "))
            }
        }
    }
}

/// Outcome of a submission, as shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acknowledgment {
    Delivered(Receipt),
    Failed(SubmissionError),
}

impl Acknowledgment {
    pub const DELIVERED_MESSAGE: &'static str =
        "Thank you for your message! We'll get back to you soon.";
    pub const FAILED_MESSAGE: &'static str =
        "There was an error submitting your form. Please try again.";

    /// Text shown to the visitor.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Acknowledgment::Delivered(_) => Self::DELIVERED_MESSAGE,
            Acknowledgment::Failed(_) => Self::FAILED_MESSAGE,
        }
    }

    #[must_use]
    pub fn is_delivered(&self) -> bool {
        matches!(self, Acknowledgment::Delivered(_))
    }
}

/// Field values plus the submission lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    data: ContactFormData,
    phase: FormPhase,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Sets a field from its text value.
    ///
    /// `PropertyType` accepts a wire value (`"open-plot"`, ...) or `""` to
    /// clear the selection.
    pub fn set_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::Locked);
        }
        let value = value.into();
        match field {
            FormField::Name => self.data.name = value,
            FormField::Email => self.data.email = value,
            FormField::Phone => self.data.phone = value,
            FormField::Message => self.data.message = value,
            FormField::PropertyType => {
                self.data.property_type = if value.is_empty() {
                    None
                } else {
                    Some(
                        PropertyType::parse(&value)
                            .ok_or(FormError::UnknownPropertyType(value))?,
                    )
                };
            }
        }
        Ok(())
    }

    /// Selects a property type from the dropdown.
    pub fn set_property_type(&mut self, property_type: PropertyType) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::Locked);
        }
        self.data.property_type = Some(property_type);
        Ok(())
    }

    /// Moves to `Submitting` and returns the snapshot to deliver.
    pub fn begin_submit(&mut self) -> Result<ContactFormData, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::AlreadySubmitting);
        }
        let missing = self.data.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitRejected::MissingFields(missing));
        }
        self.phase = FormPhase::Submitting;
        Ok(self.data.clone())
    }

    /// Returns to `Editing` with the delivery outcome.
    ///
    /// Fields are cleared on success and left untouched on failure.
    pub fn finish_submit(&mut self, outcome: Result<Receipt, SubmissionError>) -> Acknowledgment {
        self.phase = FormPhase::Editing;
        match outcome {
            Ok(receipt) => {
                self.data = ContactFormData::default();
                Acknowledgment::Delivered(receipt)
            }
            Err(error) => Acknowledgment::Failed(error),
        }
    }
}
