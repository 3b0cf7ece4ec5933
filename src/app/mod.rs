// SPDX-License-Identifier: MPL-2.0
//! Application root: wires the page's state holders to the iced runtime.
//!
//! The `App` owns four independent state holders (testimonial rotation,
//! gallery navigation, section tracking, contact form) plus the ambient
//! services (notifications, diagnostics, submission sink). Components never
//! reach into each other; `update` routes messages between them.
//!
//! `mount` and `teardown` bracket the page lifetime. Both are idempotent, so
//! the rotation subscription and the region observer are acquired and
//! released exactly once.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::carousel::{GalleryNavigator, RotationTimer};
use crate::contact::ContactForm;
use crate::content::SiteContent;
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector, DiagnosticsHandle};
use crate::domain::section::Section;
use crate::domain::ui::VisibilityThreshold;
use crate::submission::{InquirySink, WriterSink};
use crate::ui::images::ImageCache;
use crate::ui::layout::PageLayout;
use crate::ui::notifications;
use crate::ui::theming::AppTheme;
use crate::visibility::{SectionTracker, Span};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Window title, as on the published page.
pub const WINDOW_TITLE: &str = "Gallery | Yadadri 360\u{b0}";

/// Identifier of the page scrollable, for programmatic scrolling.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Root iced application state.
pub struct App {
    content: SiteContent,
    images: ImageCache,
    theme: AppTheme,
    layout: PageLayout,
    window_size: Size,
    /// Top of the visible band, in content coordinates.
    scroll_offset: f32,
    /// Height of the visible band of the page scrollable.
    viewport_height: f32,
    menu_open: bool,
    testimonials: RotationTimer,
    gallery: GalleryNavigator,
    tracker: SectionTracker,
    visibility_threshold: VisibilityThreshold,
    form: ContactForm,
    sink: Arc<dyn InquirySink>,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    diagnostics_handle: DiagnosticsHandle,
    diagnostics_path: Option<PathBuf>,
    mounted: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mounted", &self.mounted)
            .field("active_section", &self.tracker.active_section())
            .field("testimonial", &self.testimonials.current())
            .field("gallery", &self.gallery.current())
            .field("form_phase", &self.form.phase())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
///
/// Closing is intercepted so `teardown` runs before the process exits.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(
            config::DEFAULT_WINDOW_WIDTH,
            config::DEFAULT_WINDOW_HEIGHT,
        ),
        min_size: Some(Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds an unmounted page from already-loaded parts.
    #[must_use]
    pub fn from_parts(
        content: SiteContent,
        config: &config::Config,
        sink: Arc<dyn InquirySink>,
    ) -> Self {
        let diagnostics = DiagnosticsCollector::new(config.buffer_capacity());
        let diagnostics_handle = diagnostics.handle();
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics_handle.clone());

        let window_size = Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT);
        let layout = PageLayout::for_width(window_size.width);
        let viewport_height = layout.viewport(0.0, window_size.height).height;

        Self {
            images: ImageCache::from_content(&content),
            testimonials: RotationTimer::new(
                content.testimonials.len(),
                config.rotation_interval(),
            ),
            gallery: GalleryNavigator::new(content.gallery.images.len()),
            content,
            theme: AppTheme::new(config.general.theme_mode),
            layout,
            window_size,
            scroll_offset: 0.0,
            viewport_height,
            menu_open: false,
            tracker: SectionTracker::new(),
            visibility_threshold: config.visibility_threshold(),
            form: ContactForm::new(),
            sink,
            notifications,
            diagnostics,
            diagnostics_handle,
            diagnostics_path: None,
            mounted: false,
        }
    }

    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let mut app = Self::from_parts(flags.content, &config, Arc::new(WriterSink::stdout()));
        if let Some(mode) = flags.theme {
            app.theme = AppTheme::new(mode);
        }
        if let Some(path) = flags.diagnostics_path {
            app = app.with_diagnostics_path(path);
        }

        if let Some(warning) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }

        app.mount();
        app.diagnostics.process_pending();

        (app, Task::none())
    }

    /// Writes a diagnostics report to `path` on teardown.
    #[must_use]
    pub fn with_diagnostics_path(mut self, path: PathBuf) -> Self {
        self.diagnostics_path = Some(path);
        self
    }

    /// Starts rotation and begins observing section regions.
    ///
    /// Returns `false` if the page was already mounted.
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;

        self.testimonials.start();
        let regions = self.layout.regions();
        let region_count = regions.len();
        self.tracker.observe(regions, self.visibility_threshold);
        self.diagnostics_handle.log_state(AppStateEvent::Mounted {
            regions: region_count,
            rotation_interval_ms: u64::try_from(self.testimonials.interval().as_millis())
                .unwrap_or(u64::MAX),
        });

        self.refresh_active_section();
        true
    }

    /// Stops rotation, disconnects the observer and writes the diagnostics
    /// report when one was requested.
    ///
    /// Returns `false` if the page was not mounted.
    pub fn teardown(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        self.mounted = false;

        self.testimonials.stop();
        self.tracker.disconnect();
        self.diagnostics_handle.log_state(AppStateEvent::TornDown);

        if let Some(path) = self.diagnostics_path.clone() {
            if let Err(err) = self.diagnostics.export_to_file(&path) {
                eprintln!("Failed to write diagnostics report: {err}");
            }
        } else {
            self.diagnostics.process_pending();
        }
        true
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn active_section(&self) -> Option<Section> {
        self.tracker.active_section()
    }

    #[must_use]
    pub fn current_testimonial(&self) -> usize {
        self.testimonials.current()
    }

    #[must_use]
    pub fn current_gallery(&self) -> usize {
        self.gallery.current()
    }

    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.testimonials.is_running()
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    #[must_use]
    pub fn layout(&self) -> PageLayout {
        self.layout
    }

    /// Feeds the current visible band to the tracker.
    fn refresh_active_section(&mut self) {
        let viewport = Span::new(self.scroll_offset, self.viewport_height);
        if let Some(section) = self.tracker.on_viewport(viewport) {
            self.diagnostics_handle
                .log_state(AppStateEvent::ActiveSectionChanged {
                    section: section.id().to_string(),
                });
        }
    }

    fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_rotation_subscription(&self.testimonials),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = update::update(self, message);
        self.diagnostics.process_pending();
        task
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
