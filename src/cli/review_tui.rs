//! TUI mode for reviewing scored articles.
//!
//! This module provides the entry point for the interactive terminal user
//! interface. Every start-up failure (reviewer, article file) is reported
//! before the terminal is taken over.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;
use crossterm::terminal;

use fiscal_review::telemetry::{TelemetryEvent, TelemetrySink, TracingTelemetrySink};
use fiscal_review::tui::{
    ReviewApp, ReviewContext, set_initial_terminal_size, set_review_context, set_telemetry_sink,
};
use fiscal_review::{CsvReviewLog, ReviewConfig, ReviewError, load_articles};

/// Runs the TUI mode for reviewing articles.
///
/// # Errors
///
/// Returns an error if:
/// - No reviewer name can be resolved
/// - The article file is missing or malformed
/// - The TUI fails to initialise
pub async fn run(config: &ReviewConfig) -> Result<(), ReviewError> {
    let reviewer = config.resolve_reviewer()?;
    let telemetry: Arc<dyn TelemetrySink> = Arc::new(TracingTelemetrySink);
    let context = build_context(config, reviewer, telemetry.as_ref())?;

    tracing::info!(
        articles = context.articles.len(),
        reviewer = %context.reviewer,
        log = %config.review_log_path(),
        "starting review session"
    );

    // Store start-up inputs for Model::init() to retrieve. If already set,
    // this is a no-op and the existing values remain.
    let _ = set_review_context(context);
    let _ = set_telemetry_sink(telemetry);
    if let Ok((width, height)) = terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| ReviewError::Tui {
        message: error.to_string(),
    })
}

/// Loads the articles and assembles the review context.
fn build_context(
    config: &ReviewConfig,
    reviewer: String,
    telemetry: &dyn TelemetrySink,
) -> Result<ReviewContext, ReviewError> {
    let articles = load_articles(config.articles_path())?;
    telemetry.record(TelemetryEvent::ArticlesLoaded {
        article_count: articles.len(),
    });

    Ok(ReviewContext {
        articles,
        log: Arc::new(CsvReviewLog::new(config.review_log_path())),
        reviewer,
        comment_max_length: config.comment_max_length(),
    })
}

/// Runs the bubbletea-rs program with the `ReviewApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // ReviewApp::init() will retrieve data from module-level storage.
    let program = Program::<ReviewApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
