//! Startup context storage for the review TUI.
//!
//! bubbletea-rs calls `Model::init()` without arguments, so everything the
//! application needs at start-up is placed in `OnceLock` values by the CLI
//! wiring before the program runs.

use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::articles::Article;
use crate::review::ReviewSink;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Global storage for the review session inputs.
static REVIEW_CONTEXT: OnceLock<ReviewContext> = OnceLock::new();

/// Global storage for initial terminal dimensions.
///
/// Read by `ReviewApp::init()` so the first frame uses the actual terminal
/// size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for the telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink used when none has been configured.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Inputs needed to start a review session.
#[derive(Clone)]
pub struct ReviewContext {
    /// Articles to review, in file order.
    pub articles: Vec<Article>,
    /// Destination for submitted reviews.
    pub log: Arc<dyn ReviewSink>,
    /// Reviewer identity written with every entry.
    pub reviewer: String,
    /// Maximum comment length in characters.
    pub comment_max_length: usize,
}

impl std::fmt::Debug for ReviewContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewContext")
            .field("articles", &self.articles.len())
            .field("reviewer", &self.reviewer)
            .field("comment_max_length", &self.comment_max_length)
            .finish_non_exhaustive()
    }
}

/// Sets the review context for the TUI application.
///
/// Must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_review_context(context: ReviewContext) -> bool {
    REVIEW_CONTEXT.set(context).is_ok()
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the telemetry sink for the TUI application.
///
/// Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

/// Gets a clone of the review context, if configured.
pub(crate) fn get_review_context() -> Option<ReviewContext> {
    REVIEW_CONTEXT.get().cloned()
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Gets the initial terminal dimensions.
///
/// Falls back to querying the terminal, then to 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}
