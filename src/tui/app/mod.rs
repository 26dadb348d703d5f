//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the application state for the article review TUI.
//! It coordinates the review session, the feedback form, and the rendering
//! components, and writes submissions through the configured review log.
//!
//! # Module Structure
//!
//! - `model_impl`: `bubbletea_rs::Model` implementation and viewport
//!   normalisation
//! - `routing`: Message dispatch by category
//! - `navigation`: Article navigation and article-pane scrolling
//! - `form_handlers`: Feedback form editing and submission
//! - `lifecycle_handlers`: Quit, help, and resize handling
//! - `layout`: Pane height calculations
//! - `rendering`: View rendering methods for terminal output

use std::sync::Arc;

use crate::review::{ReviewSession, ReviewSink};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::components::ArticleDetailComponent;
use super::state::FeedbackForm;

mod form_handlers;
mod layout;
mod lifecycle_handlers;
mod model_impl;
mod navigation;
mod rendering;
mod routing;

/// Rows used by the header: title, progress line, and progress bar.
pub(crate) const HEADER_HEIGHT: usize = 3;

/// Rows used below the feedback panel: submission indicator and status bar.
pub(crate) const FOOTER_HEIGHT: usize = 2;

/// Minimum number of article rows kept visible on small terminals.
pub(crate) const MIN_DETAIL_HEIGHT: usize = 3;

/// Status line shown after a successful submission.
pub(crate) const SAVED_STATUS: &str = "Review saved successfully";

/// Main application model for the article review TUI.
pub struct ReviewApp {
    /// Position in the article list and per-visit submission state.
    pub(crate) session: ReviewSession,
    /// Feedback for the article under review.
    pub(crate) form: FeedbackForm,
    /// Destination for submitted reviews.
    log: Option<Arc<dyn ReviewSink>>,
    /// Destination for telemetry events.
    telemetry: Arc<dyn TelemetrySink>,
    /// Confirmation shown after a successful action.
    pub(crate) status: Option<String>,
    /// Current error message, if any.
    pub(crate) error: Option<String>,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// First visible line of the article pane.
    pub(crate) scroll_offset: usize,
    /// Article pane component.
    article_detail: ArticleDetailComponent,
}

impl std::fmt::Debug for ReviewApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewApp")
            .field("session", &self.session)
            .field("form", &self.form)
            .field("has_log", &self.log.is_some())
            .field("status", &self.status)
            .field("error", &self.error)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("show_help", &self.show_help)
            .field("scroll_offset", &self.scroll_offset)
            .finish_non_exhaustive()
    }
}

impl ReviewApp {
    /// Creates an application for `session` with no review log attached.
    #[must_use]
    pub fn new(session: ReviewSession, max_comment_length: usize) -> Self {
        Self {
            session,
            form: FeedbackForm::new(max_comment_length.max(1)),
            log: None,
            telemetry: Arc::new(NoopTelemetrySink),
            status: None,
            error: None,
            width: 80,
            height: 24,
            show_help: false,
            scroll_offset: 0,
            article_detail: ArticleDetailComponent::new(),
        }
    }

    /// Attaches the review log submissions are written to.
    #[must_use]
    pub fn with_log(mut self, log: Arc<dyn ReviewSink>) -> Self {
        self.log = Some(log);
        self
    }

    /// Attaches the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Returns the review session.
    #[must_use]
    pub const fn session(&self) -> &ReviewSession {
        &self.session
    }

    /// Returns the feedback form.
    #[must_use]
    pub const fn form(&self) -> &FeedbackForm {
        &self.form
    }

    /// Returns the current status message, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the current error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns whether the help overlay is visible.
    #[must_use]
    pub const fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Returns the first visible line of the article pane.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }
}

#[cfg(test)]
mod tests;
