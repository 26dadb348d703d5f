//! Feedback form state for the article under review.
//!
//! The form holds the decision, corrected score, and comment text for one
//! visit. Comment text is bounded by a configured character limit. The form
//! is reset after a successful submission and whenever the reviewer moves to
//! another article.

use thiserror::Error;

use crate::review::{CorrectedScore, ReviewDecision, ReviewFeedback};

/// Editable reviewer feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackForm {
    decision: ReviewDecision,
    corrected_score: CorrectedScore,
    comments: String,
    max_comment_length: usize,
    editing_comments: bool,
}

impl FeedbackForm {
    /// Creates an empty form with the default decision and score.
    #[must_use]
    pub fn new(max_comment_length: usize) -> Self {
        debug_assert!(
            max_comment_length >= 1,
            "comment limit must be normalised before form creation"
        );
        Self {
            decision: ReviewDecision::default(),
            corrected_score: CorrectedScore::default(),
            comments: String::new(),
            max_comment_length,
            editing_comments: false,
        }
    }

    /// Returns the selected decision.
    #[must_use]
    pub const fn decision(&self) -> ReviewDecision {
        self.decision
    }

    /// Returns the selected corrected score.
    #[must_use]
    pub const fn corrected_score(&self) -> CorrectedScore {
        self.corrected_score
    }

    /// Returns the comment text.
    #[must_use]
    pub const fn comments(&self) -> &str {
        self.comments.as_str()
    }

    /// Returns the configured comment limit.
    #[must_use]
    pub const fn max_comment_length(&self) -> usize {
        self.max_comment_length
    }

    /// Returns whether key presses are currently routed into the comments.
    #[must_use]
    pub const fn is_editing_comments(&self) -> bool {
        self.editing_comments
    }

    /// Returns the comment length in Unicode scalar values.
    #[must_use]
    pub fn comment_char_count(&self) -> usize {
        self.comments.chars().count()
    }

    /// Sets the decision.
    pub const fn set_decision(&mut self, decision: ReviewDecision) {
        self.decision = decision;
    }

    /// Flips the decision.
    pub const fn toggle_decision(&mut self) {
        self.decision = self.decision.toggled();
    }

    /// Sets the corrected score.
    pub const fn select_score(&mut self, score: CorrectedScore) {
        self.corrected_score = score;
    }

    /// Advances the corrected score selector.
    pub fn cycle_score(&mut self) {
        self.corrected_score = self.corrected_score.cycled();
    }

    /// Routes subsequent text input into the comments.
    pub const fn start_editing(&mut self) {
        self.editing_comments = true;
    }

    /// Stops routing text input into the comments.
    pub const fn stop_editing(&mut self) {
        self.editing_comments = false;
    }

    /// Appends one character to the comments.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackFormError::CommentTooLong`] when the character would
    /// exceed the configured limit.
    pub fn push_comment_char(&mut self, character: char) -> Result<(), FeedbackFormError> {
        let attempted = self.comment_char_count().saturating_add(1);
        if attempted > self.max_comment_length {
            return Err(FeedbackFormError::CommentTooLong {
                attempted,
                max_length: self.max_comment_length,
            });
        }

        self.comments.push(character);
        Ok(())
    }

    /// Removes the last comment character, if any.
    pub fn backspace_comment(&mut self) {
        let _ = self.comments.pop();
    }

    /// Returns the feedback to submit.
    #[must_use]
    pub fn to_feedback(&self) -> ReviewFeedback {
        ReviewFeedback {
            decision: self.decision,
            comments: self.comments.clone(),
            corrected_score: self.corrected_score,
        }
    }

    /// Restores the defaults, keeping the comment limit.
    pub fn reset(&mut self) {
        *self = Self::new(self.max_comment_length);
    }
}

/// Errors raised while editing the feedback form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedbackFormError {
    /// The comment would exceed the configured character limit.
    #[error("comment length {attempted} exceeds configured limit {max_length}")]
    CommentTooLong {
        /// Character count after the attempted edit.
        attempted: usize,
        /// Configured maximum character count.
        max_length: usize,
    },
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn new_form_defaults_to_approve_and_no_issue() {
        let form = FeedbackForm::new(10);

        assert_eq!(form.decision(), ReviewDecision::Approve);
        assert_eq!(form.corrected_score(), CorrectedScore::NoIssue);
        assert_eq!(form.comments(), "");
        assert!(!form.is_editing_comments());
    }

    #[rstest]
    fn comment_limit_counts_characters_not_bytes() {
        let mut form = FeedbackForm::new(2);

        form.push_comment_char('é').expect("first char fits");
        form.push_comment_char('ß').expect("second char fits");
        let result = form.push_comment_char('x');

        assert_eq!(
            result,
            Err(FeedbackFormError::CommentTooLong {
                attempted: 3,
                max_length: 2
            })
        );
        assert_eq!(form.comments(), "éß");
    }

    #[rstest]
    fn backspace_on_empty_comment_is_harmless() {
        let mut form = FeedbackForm::new(5);

        form.backspace_comment();

        assert_eq!(form.comment_char_count(), 0);
    }

    #[rstest]
    fn to_feedback_copies_current_values() {
        let mut form = FeedbackForm::new(50);
        form.set_decision(ReviewDecision::Reject);
        form.cycle_score();
        for character in "too high".chars() {
            form.push_comment_char(character).expect("fits");
        }

        let feedback = form.to_feedback();

        assert_eq!(feedback.decision, ReviewDecision::Reject);
        assert_eq!(feedback.corrected_score.to_string(), "1");
        assert_eq!(feedback.comments, "too high");
    }

    #[rstest]
    fn reset_restores_defaults_and_keeps_limit() {
        let mut form = FeedbackForm::new(7);
        form.toggle_decision();
        form.start_editing();
        form.push_comment_char('x').expect("fits");

        form.reset();

        assert_eq!(form, FeedbackForm::new(7));
    }
}
