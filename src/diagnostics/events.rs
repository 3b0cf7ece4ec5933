// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Events describe what the visitor did and how the page reacted. They never
//! carry what the visitor typed into the contact form.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::domain::inquiry::PropertyType;
use crate::domain::section::Section;

/// Visitor-initiated actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Clicked a navigation link or call-to-action that scrolls the page.
    NavigateToSection { section: String },

    /// Opened or closed the compact navigation menu.
    ToggleMenu { open: bool },

    GalleryNext,

    GalleryPrevious,

    /// Picked a gallery image from a dot or thumbnail.
    GalleryJump { index: usize },

    /// Picked a testimonial from its dot.
    SelectTestimonial { index: usize },

    /// Sent the contact form. Only the property type is recorded.
    SubmitInquiry {
        #[serde(skip_serializing_if = "Option::is_none")]
        property_type: Option<String>,
    },
}

impl UserAction {
    #[must_use]
    pub fn navigate_to(section: Section) -> Self {
        UserAction::NavigateToSection {
            section: section.id().to_string(),
        }
    }

    #[must_use]
    pub fn submit_inquiry(property_type: Option<PropertyType>) -> Self {
        UserAction::SubmitInquiry {
            property_type: property_type.map(|kind| kind.as_str().to_string()),
        }
    }
}

/// Page lifecycle and state transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// Rotation started and section regions registered.
    Mounted {
        regions: usize,
        rotation_interval_ms: u64,
    },

    /// Rotation stopped and observer disconnected.
    TornDown,

    ActiveSectionChanged { section: String },

    /// The window crossed the compact layout breakpoint.
    LayoutChanged { compact: bool },

    InquiryDelivered { reference: u64 },
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    AppState {
        state: AppStateEvent,
    },

    /// Non-critical issue, e.g. an unreadable settings file.
    Warning { message: String },

    /// Failed operation, e.g. an inquiry that could not be delivered.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_timestamp_uses_provided_timestamp() {
        let timestamp = Instant::now();
        let event = DiagnosticEvent::with_timestamp(
            DiagnosticEventKind::UserAction {
                action: UserAction::GalleryNext,
                details: None,
            },
            timestamp,
        );
        assert_eq!(event.timestamp, timestamp);
    }

    #[test]
    fn user_action_serializes_with_tags() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::navigate_to(Section::Gallery),
            details: None,
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert_eq!(
            json,
            r#"{"type":"user_action","action":{"action":"navigate_to_section","section":"gallery"}}"#
        );
    }

    #[test]
    fn submit_inquiry_records_only_property_type() {
        let action = UserAction::submit_inquiry(Some(PropertyType::IndividualHouse));
        let json = serde_json::to_string(&action).expect("serialization should succeed");
        assert_eq!(
            json,
            r#"{"action":"submit_inquiry","property_type":"individual-house"}"#
        );

        let unset = serde_json::to_string(&UserAction::submit_inquiry(None))
            .expect("serialization should succeed");
        assert_eq!(unset, r#"{"action":"submit_inquiry"}"#);
    }

    #[test]
    fn state_event_round_trips() {
        let kind = DiagnosticEventKind::AppState {
            state: AppStateEvent::Mounted {
                regions: 6,
                rotation_interval_ms: 5000,
            },
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        let back: DiagnosticEventKind =
            serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(back, kind);
    }
}
