// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler touches only the state holder its message belongs to; the
//! few cross-cutting effects (toasts, diagnostics, scrolling) are applied
//! here rather than inside the components.

use super::{App, Message, PAGE_SCROLLABLE_ID};
use crate::contact::SubmitRejected;
use crate::diagnostics::{AppStateEvent, UserAction};
use crate::domain::section::Section;
use crate::submission;
use crate::ui::layout::PageLayout;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::sections;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Size, Task};

/// Routes a top-level message to its handler.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => handle_navbar_message(app, message),
        Message::Page(message) => handle_page_message(app, message),
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Scrolled {
            offset_y,
            viewport_height,
        } => {
            handle_scrolled(app, offset_y, viewport_height);
            Task::none()
        }
        Message::WindowResized(size) => {
            handle_resized(app, size);
            Task::none()
        }
        Message::RotationTick(_) => {
            app.testimonials.on_tick();
            Task::none()
        }
        Message::Tick(now) => {
            app.notifications.tick_at(now);
            Task::none()
        }
        Message::SubmissionFinished(outcome) => {
            handle_submission_finished(app, outcome);
            Task::none()
        }
        Message::WindowCloseRequested(_) => {
            app.teardown();
            iced::exit()
        }
    }
}

fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, &mut app.menu_open) {
        navbar::Event::MenuToggled { open } => {
            app.diagnostics_handle
                .log_action(UserAction::ToggleMenu { open });
            Task::none()
        }
        navbar::Event::ScrollTo(section) => scroll_to_section(app, section),
    }
}

fn handle_page_message(app: &mut App, message: sections::Message) -> Task<Message> {
    match message {
        sections::Message::ScrollTo(section) => scroll_to_section(app, section),
        sections::Message::GalleryNext => {
            app.gallery.next();
            app.diagnostics_handle.log_action(UserAction::GalleryNext);
            Task::none()
        }
        sections::Message::GalleryPrevious => {
            app.gallery.previous();
            app.diagnostics_handle
                .log_action(UserAction::GalleryPrevious);
            Task::none()
        }
        sections::Message::GalleryJump(index) => {
            if index < app.gallery.len() {
                app.gallery.jump_to(index);
                app.diagnostics_handle
                    .log_action(UserAction::GalleryJump { index });
            }
            Task::none()
        }
        sections::Message::SelectTestimonial(index) => {
            if index < app.testimonials.len() {
                app.testimonials.select(index);
                app.diagnostics_handle
                    .log_action(UserAction::SelectTestimonial { index });
            }
            Task::none()
        }
        sections::Message::FieldChanged(field, value) => {
            // Edits arriving while a submission is in flight are dropped.
            let _ = app.form.set_field(field, value);
            Task::none()
        }
        sections::Message::PropertyTypeSelected(property_type) => {
            let _ = app.form.set_property_type(property_type);
            Task::none()
        }
        sections::Message::Submit => handle_submit(app),
    }
}

/// Snaps the page so `section` sits under the navbar.
fn scroll_to_section(app: &mut App, section: Section) -> Task<Message> {
    app.diagnostics_handle
        .log_action(UserAction::navigate_to(section));

    let ratio = app.layout.snap_ratio(section, app.viewport_height);
    let scrollable = (app.layout.content_height() - app.viewport_height).max(0.0);
    app.scroll_offset = ratio * scrollable;
    app.refresh_active_section();

    operation::snap_to(
        Id::new(PAGE_SCROLLABLE_ID),
        RelativeOffset { x: 0.0, y: ratio },
    )
}

fn handle_scrolled(app: &mut App, offset_y: f32, viewport_height: f32) {
    app.scroll_offset = offset_y.max(0.0);
    if viewport_height > 0.0 {
        app.viewport_height = viewport_height;
    }
    app.refresh_active_section();
}

fn handle_resized(app: &mut App, size: Size) {
    app.window_size = size;
    app.viewport_height = app.layout.viewport(app.scroll_offset, size.height).height;

    let layout = PageLayout::for_width(size.width);
    if layout != app.layout {
        app.layout = layout;
        app.tracker.relayout(layout.regions());
        if !layout.is_compact() {
            app.menu_open = false;
        }
        app.diagnostics_handle.log_state(AppStateEvent::LayoutChanged {
            compact: layout.is_compact(),
        });
    }
    app.refresh_active_section();
}

fn handle_submit(app: &mut App) -> Task<Message> {
    match app.form.begin_submit() {
        Ok(inquiry) => {
            app.diagnostics_handle
                .log_action(UserAction::submit_inquiry(inquiry.property_type));
            Task::perform(
                submission::dispatch(app.sink.clone(), inquiry),
                Message::SubmissionFinished,
            )
        }
        Err(rejected @ SubmitRejected::MissingFields(_)) => {
            app.notifications
                .push(Notification::warning(rejected.to_string()));
            Task::none()
        }
        // Double submits are ignored; the button is already disabled.
        Err(SubmitRejected::AlreadySubmitting) => Task::none(),
    }
}

fn handle_submission_finished(
    app: &mut App,
    outcome: Result<submission::Receipt, submission::SubmissionError>,
) {
    if let Err(error) = &outcome {
        app.diagnostics_handle
            .log_error(format!("inquiry delivery failed: {error}"));
    }

    let acknowledgment = app.form.finish_submit(outcome);
    match &acknowledgment {
        crate::contact::Acknowledgment::Delivered(receipt) => {
            app.diagnostics_handle
                .log_state(AppStateEvent::InquiryDelivered {
                    reference: receipt.reference,
                });
            app.notifications
                .push(Notification::success(acknowledgment.message()));
        }
        crate::contact::Acknowledgment::Failed(_) => {
            app.notifications
                .push(Notification::error(acknowledgment.message()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::content::SiteContent;
    use crate::domain::inquiry::{FormField, PropertyType};
    use crate::submission::WriterSink;
    use crate::test_utils::assert_abs_diff_eq;
    use std::sync::Arc;

    fn mounted_app() -> App {
        let content = SiteContent::load().expect("embedded content is valid");
        let mut app = App::from_parts(
            content,
            &Config::default(),
            Arc::new(WriterSink::new(Vec::new())),
        );
        app.mount();
        app
    }

    #[test]
    fn navigation_sets_offset_and_active_section() {
        let mut app = mounted_app();
        let _ = update(&mut app, Message::Navbar(navbar::Message::ScheduleVisit));

        let expected = app.layout.top_of_section(Section::Contact);
        assert_abs_diff_eq!(app.scroll_offset, expected, epsilon = 0.01);
        assert_eq!(app.active_section(), Some(Section::Contact));
    }

    #[test]
    fn out_of_range_testimonial_selection_is_ignored() {
        let mut app = mounted_app();
        let len = app.testimonials.len();
        let _ = update(
            &mut app,
            Message::Page(sections::Message::SelectTestimonial(len)),
        );
        assert_eq!(app.current_testimonial(), 0);
    }

    #[test]
    fn rotation_tick_after_teardown_is_ignored() {
        let mut app = mounted_app();
        app.teardown();
        let _ = update(&mut app, Message::RotationTick(std::time::Instant::now()));
        assert_eq!(app.current_testimonial(), 0);
    }

    #[test]
    fn incomplete_form_raises_warning_without_submitting() {
        let mut app = mounted_app();
        let _ = update(&mut app, Message::Page(sections::Message::Submit));

        assert!(!app.form.is_submitting());
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn edits_are_dropped_while_submitting() {
        let mut app = mounted_app();
        for (field, value) in [
            (FormField::Name, "Ravi"),
            (FormField::Email, "ravi@example.com"),
            (FormField::Phone, "+91 90000 00000"),
            (FormField::Message, "Looking for a plot"),
        ] {
            let _ = update(
                &mut app,
                Message::Page(sections::Message::FieldChanged(field, value.into())),
            );
        }
        let _ = update(&mut app, Message::Page(sections::Message::Submit));
        assert!(app.form.is_submitting());

        let _ = update(
            &mut app,
            Message::Page(sections::Message::PropertyTypeSelected(
                PropertyType::Building,
            )),
        );
        assert_eq!(app.form.data().property_type, None);
    }

    #[test]
    fn failed_delivery_keeps_fields() {
        let mut app = mounted_app();
        let _ = update(
            &mut app,
            Message::Page(sections::Message::FieldChanged(
                FormField::Name,
                "Ravi".into(),
            )),
        );
        let _ = update(
            &mut app,
            Message::SubmissionFinished(Err(submission::SubmissionError::Interrupted)),
        );
        assert_eq!(app.form.data().name, "Ravi");
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn widening_window_closes_menu() {
        let mut app = mounted_app();
        handle_resized(&mut app, Size::new(400.0, 800.0));
        assert!(app.layout.is_compact());
        let _ = update(&mut app, Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.menu_open);

        handle_resized(&mut app, Size::new(1280.0, 800.0));
        assert!(!app.menu_open);
        assert!(!app.layout.is_compact());
    }
}
