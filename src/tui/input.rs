//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages. Mapping depends on whether the reviewer
//! is browsing, typing into the comments field, or looking at the completion
//! screen.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::review::{CorrectedScore, ReviewDecision};

use super::messages::AppMsg;

/// Input mode used to select a key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Viewing an article with the form idle.
    Browsing,
    /// Typing into the comments field.
    EditingComments,
    /// Every article has been passed; no form is shown.
    Complete,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return map_control_key(key.key);
    }

    match context {
        InputContext::Browsing => map_browsing_key(key.key),
        InputContext::EditingComments => map_editing_key(key.key),
        InputContext::Complete => map_complete_key(key.key),
    }
}

fn map_control_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('c') => Some(AppMsg::Quit),
        _ => None,
    }
}

fn map_browsing_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::PreviousArticle),
        KeyCode::Char('l') | KeyCode::Right => Some(AppMsg::NextArticle),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::ScrollUp),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::ScrollDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::Char('a') => Some(AppMsg::SetDecision(ReviewDecision::Approve)),
        KeyCode::Char('r') => Some(AppMsg::SetDecision(ReviewDecision::Reject)),
        KeyCode::Tab => Some(AppMsg::ToggleDecision),
        KeyCode::Char('s') => Some(AppMsg::CycleScore),
        KeyCode::Char('c') => Some(AppMsg::StartEditingComments),
        KeyCode::Enter => Some(AppMsg::SubmitReview),
        KeyCode::Char(digit @ '0'..='5') => digit
            .to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .and_then(|value| CorrectedScore::from_digit(value).ok())
            .map(AppMsg::SelectScore),
        _ => None,
    }
}

fn map_editing_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Esc => Some(AppMsg::StopEditingComments),
        KeyCode::Backspace => Some(AppMsg::CommentBackspace),
        KeyCode::Enter => Some(AppMsg::CommentInsertChar('\n')),
        KeyCode::Char(character) => Some(AppMsg::CommentInsertChar(character)),
        _ => None,
    }
}

fn map_complete_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Char('h') | KeyCode::Left => Some(AppMsg::PreviousArticle),
        _ => None,
    }
}
