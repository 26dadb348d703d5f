//! Behavioural tests for reviewing articles through the TUI model.
//!
//! Scenarios drive `ReviewApp` with key presses against a real article file
//! and a CSV review log in a temporary directory.

#[path = "review_session_bdd/mod.rs"]
mod review_session_bdd_support;

use std::sync::Arc;

use bubbletea_rs::Model;
use bubbletea_rs::event::KeyMsg;
use camino::Utf8PathBuf;
use crossterm::event::{KeyCode, KeyModifiers};
use fiscal_review::tui::ReviewApp;
use fiscal_review::{CsvReviewLog, ReviewSession, load_articles};
use review_session_bdd_support::{ReviewRows, ReviewScenarioState, write_articles};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

type StepResult = Result<(), Box<dyn std::error::Error>>;

#[fixture]
fn review_state() -> ReviewScenarioState {
    ReviewScenarioState::default()
}

fn parse_key(key: &str) -> Result<KeyCode, Box<dyn std::error::Error>> {
    let normalized = key.trim_matches('"');

    let key_code = match normalized.to_ascii_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "esc" | "escape" => KeyCode::Esc,
        _ => {
            let mut chars = normalized.chars();
            let Some(character) = chars.next() else {
                return Err("key token must not be empty".into());
            };
            if chars.next().is_some() {
                return Err(format!("unsupported key token: {normalized}").into());
            }
            KeyCode::Char(character)
        }
    };

    Ok(key_code)
}

fn log_path(state: &ReviewScenarioState) -> Result<Utf8PathBuf, Box<dyn std::error::Error>> {
    state
        .log_path
        .with_ref(Clone::clone)
        .ok_or_else(|| "review session should be created first".into())
}

fn view_from_state(state: &ReviewScenarioState) -> Result<String, Box<dyn std::error::Error>> {
    state
        .rendered_view
        .with_ref(Clone::clone)
        .ok_or_else(|| "view should be rendered before assertions".into())
}

#[given("a review session with {count:usize} articles and no review log")]
fn given_review_session(review_state: &ReviewScenarioState, count: usize) -> StepResult {
    let workspace = TempDir::new()?;
    let root = Utf8PathBuf::from_path_buf(workspace.path().to_path_buf())
        .map_err(|path| format!("temporary directory is not UTF-8: {}", path.display()))?;

    let articles = load_articles(&write_articles(&root, count)?)?;
    let log_path = root.join("reviews").join("results.csv");

    let mut app = ReviewApp::new(ReviewSession::new(articles, "casey"), 500)
        .with_log(Arc::new(CsvReviewLog::new(log_path.clone())));
    app.update(Box::new(fiscal_review::tui::messages::AppMsg::WindowResized {
        width: 120,
        height: 60,
    }));

    review_state.app.set(app);
    review_state.log_path.set(log_path);
    review_state.workspace.set(workspace);
    Ok(())
}

#[when("the user presses {key}")]
fn when_user_presses_key(review_state: &ReviewScenarioState, key: String) -> StepResult {
    let key_message = KeyMsg {
        key: parse_key(&key)?,
        modifiers: KeyModifiers::empty(),
    };

    review_state
        .app
        .with_mut(|app| {
            app.update(Box::new(key_message));
        })
        .ok_or("app should be initialised before sending input")?;

    Ok(())
}

#[when("the view is rendered")]
fn when_view_is_rendered(review_state: &ReviewScenarioState) -> StepResult {
    let view = review_state
        .app
        .with_ref(ReviewApp::view)
        .ok_or("app should be initialised before rendering view")?;
    review_state.rendered_view.set(view);
    Ok(())
}

#[then("the view contains {text}")]
fn then_view_contains(review_state: &ReviewScenarioState, text: String) -> StepResult {
    let expected = text.trim_matches('"');
    let view = view_from_state(review_state)?;
    if !view.contains(expected) {
        return Err(format!("expected view to contain '{expected}', got:\n{view}").into());
    }
    Ok(())
}

#[then("the review log has {count:usize} rows")]
fn then_log_has_rows(review_state: &ReviewScenarioState, count: usize) -> StepResult {
    let rows = ReviewRows::read(&log_path(review_state)?)?;
    if rows.len() != count {
        return Err(format!("expected {count} review rows, found {}", rows.len()).into());
    }
    Ok(())
}

#[then("review row {row:usize} field {column} equals {value}")]
fn then_row_field_equals(
    review_state: &ReviewScenarioState,
    row: usize,
    column: String,
    value: String,
) -> StepResult {
    let expected = value.trim_matches('"');
    let rows = ReviewRows::read(&log_path(review_state)?)?;
    let actual = rows
        .field(row, &column)
        .ok_or_else(|| format!("row {row} has no column '{column}'"))?;
    if actual != expected {
        return Err(format!("expected {column} '{expected}' in row {row}, got '{actual}'").into());
    }
    Ok(())
}

#[then("the review log does not exist")]
fn then_log_does_not_exist(review_state: &ReviewScenarioState) -> StepResult {
    let path = log_path(review_state)?;
    if path.exists() {
        return Err(format!("expected no review log at {path}").into());
    }
    Ok(())
}

#[scenario(path = "tests/features/review_session.feature", index = 0)]
fn first_submission_creates_log(review_state: ReviewScenarioState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/review_session.feature", index = 1)]
fn article_without_model_score(review_state: ReviewScenarioState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/review_session.feature", index = 2)]
fn passing_last_article_completes_session(review_state: ReviewScenarioState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/review_session.feature", index = 3)]
fn resubmission_appends_row(review_state: ReviewScenarioState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/review_session.feature", index = 4)]
fn navigation_clears_submitted_indicator(review_state: ReviewScenarioState) {
    let _ = review_state;
}
