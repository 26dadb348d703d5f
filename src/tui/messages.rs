//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions and system events.

use crate::review::{CorrectedScore, ReviewDecision};

/// Messages for the review TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Navigation
    /// Move to the previous article.
    PreviousArticle,
    /// Move to the next article, or past the last one.
    NextArticle,
    /// Scroll the article pane up one line.
    ScrollUp,
    /// Scroll the article pane down one line.
    ScrollDown,
    /// Scroll the article pane up one page.
    PageUp,
    /// Scroll the article pane down one page.
    PageDown,

    // Feedback form
    /// Set the review decision.
    SetDecision(ReviewDecision),
    /// Flip between approve and reject.
    ToggleDecision,
    /// Select a corrected score.
    SelectScore(CorrectedScore),
    /// Advance the corrected score selector.
    CycleScore,
    /// Begin editing the comments field.
    StartEditingComments,
    /// Append a character to the comments.
    CommentInsertChar(char),
    /// Delete the last comment character.
    CommentBackspace,
    /// Leave comment editing mode, keeping the text.
    StopEditingComments,
    /// Submit the form for the current article.
    SubmitReview,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns whether this message changes the article or scroll position.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::PreviousArticle
                | Self::NextArticle
                | Self::ScrollUp
                | Self::ScrollDown
                | Self::PageUp
                | Self::PageDown
        )
    }

    /// Returns whether this message edits or submits the feedback form.
    #[must_use]
    pub const fn is_form(&self) -> bool {
        matches!(
            self,
            Self::SetDecision(_)
                | Self::ToggleDecision
                | Self::SelectScore(_)
                | Self::CycleScore
                | Self::StartEditingComments
                | Self::CommentInsertChar(_)
                | Self::CommentBackspace
                | Self::StopEditingComments
                | Self::SubmitReview
        )
    }
}
