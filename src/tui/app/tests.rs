//! Tests for the review TUI application model.

use bubbletea_rs::Model;
use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use rstest::{fixture, rstest};
use unicode_width::UnicodeWidthStr;

use super::*;
use crate::review::test_support::sample_articles;
use crate::review::{CorrectedScore, ReviewDecision};
use crate::tui::input::InputContext;
use crate::tui::messages::AppMsg;

#[fixture]
fn app() -> ReviewApp {
    ReviewApp::new(ReviewSession::new(sample_articles(3), "casey"), 20)
}

fn press(app: &mut ReviewApp, code: KeyCode) {
    let key = KeyMsg {
        key: code,
        modifiers: KeyModifiers::empty(),
    };
    app.update(Box::new(key));
}

#[rstest]
fn new_app_starts_on_first_article_with_default_form(app: ReviewApp) {
    assert_eq!(app.session().index(), 0);
    assert_eq!(app.form().decision(), ReviewDecision::Approve);
    assert_eq!(app.form().corrected_score(), CorrectedScore::NoIssue);
    assert_eq!(app.input_context(), InputContext::Browsing);
}

#[rstest]
fn keys_edit_the_form(mut app: ReviewApp) {
    press(&mut app, KeyCode::Char('r'));
    press(&mut app, KeyCode::Char('3'));

    assert_eq!(app.form().decision(), ReviewDecision::Reject);
    assert_eq!(app.form().corrected_score().to_string(), "3");
}

#[rstest]
fn comment_editing_captures_navigation_letters(mut app: ReviewApp) {
    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.input_context(), InputContext::EditingComments);

    for code in [KeyCode::Char('l'), KeyCode::Char('q'), KeyCode::Enter] {
        press(&mut app, code);
    }
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.form().comments(), "lq");
    assert_eq!(app.session().index(), 0);
    assert_eq!(app.input_context(), InputContext::Browsing);
}

#[rstest]
fn comment_over_limit_shows_error_and_keeps_text() {
    let mut app = ReviewApp::new(ReviewSession::new(sample_articles(1), "casey"), 2);
    app.handle_message(&AppMsg::StartEditingComments);

    for character in ['o', 'k', '!'] {
        app.handle_message(&AppMsg::CommentInsertChar(character));
    }

    assert_eq!(app.form().comments(), "ok");
    assert!(app.error().is_some_and(|error| error.contains("exceeds")));
}

#[rstest]
fn help_overlay_closes_on_any_key(mut app: ReviewApp) {
    press(&mut app, KeyCode::Char('?'));
    assert!(app.is_help_visible());

    press(&mut app, KeyCode::Char('l'));

    assert!(!app.is_help_visible());
    assert_eq!(app.session().index(), 0);
}

#[rstest]
fn help_overlay_lists_keys_and_rubric(mut app: ReviewApp) {
    app.handle_message(&AppMsg::WindowResized {
        width: 120,
        height: 80,
    });
    app.handle_message(&AppMsg::ToggleHelp);

    let view = app.view();

    assert!(view.contains("Keyboard Shortcuts"));
    assert!(view.contains("Submit review"));
    assert!(view.contains("5 = VERY POSITIVE"));
}

#[rstest]
fn review_view_shows_progress_article_and_indicator(mut app: ReviewApp) {
    app.handle_message(&AppMsg::WindowResized {
        width: 100,
        height: 60,
    });

    let view = app.view();

    assert!(view.contains("Fiscal Deficit Review"));
    assert!(view.contains("Progress: Article 1 of 3 (33%)"));
    assert!(view.contains("Headline 1"));
    assert!(view.contains("Model score: 2"));
    assert!(view.contains("[NA (no issue)]"));
    assert!(view.contains("You have not submitted a review for this article yet."));
}

#[rstest]
fn missing_model_fields_render_as_not_available(mut app: ReviewApp) {
    app.handle_message(&AppMsg::WindowResized {
        width: 100,
        height: 60,
    });
    app.handle_message(&AppMsg::NextArticle);
    app.handle_message(&AppMsg::NextArticle);

    let view = app.view();

    assert!(view.contains("Headline 3"));
    assert!(view.contains("Model score: N/A"));
}

#[rstest]
fn complete_view_replaces_form(mut app: ReviewApp) {
    for _ in 0..3 {
        app.handle_message(&AppMsg::NextArticle);
    }

    let view = app.view();

    assert!(view.contains("All articles reviewed!"));
    assert!(!view.contains("Reviewer feedback"));
    assert_eq!(app.input_context(), InputContext::Complete);
}

#[rstest]
fn empty_article_list_starts_complete() {
    let app = ReviewApp::new(ReviewSession::new(Vec::new(), "casey"), 20);

    let view = app.view();

    assert!(view.contains("All articles reviewed!"));
    assert!(view.contains("There were no articles to review."));
}

#[rstest]
fn view_is_normalised_to_terminal_size(mut app: ReviewApp) {
    app.update(Box::new(AppMsg::WindowResized {
        width: 40,
        height: 12,
    }));

    let view = app.view();
    let lines: Vec<&str> = view.lines().collect();

    assert_eq!(lines.len(), 12);
    assert!(lines.iter().all(|line| line.width() == 39));
}

#[rstest]
fn quit_key_returns_command(mut app: ReviewApp) {
    let key = KeyMsg {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::empty(),
    };

    assert!(app.update(Box::new(key)).is_some());
}
