//! Feedback form handlers for the review TUI.
//!
//! Form edits only touch [`FeedbackForm`](crate::tui::state::FeedbackForm).
//! Submission writes through the review log; on success the form is
//! cleared, and on failure it is kept so the reviewer can retry.

use std::sync::Arc;

use bubbletea_rs::Cmd;
use chrono::Local;

use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;

use super::{ReviewApp, SAVED_STATUS};

impl ReviewApp {
    /// Handles feedback form messages while an article is under review.
    pub(super) fn handle_form_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SetDecision(decision) => self.form.set_decision(*decision),
            AppMsg::ToggleDecision => self.form.toggle_decision(),
            AppMsg::SelectScore(score) => self.form.select_score(*score),
            AppMsg::CycleScore => self.form.cycle_score(),
            AppMsg::StartEditingComments => self.form.start_editing(),
            AppMsg::StopEditingComments => self.form.stop_editing(),
            AppMsg::CommentInsertChar(character) => {
                self.insert_comment_character(*character);
                return None;
            }
            AppMsg::CommentBackspace => self.form.backspace_comment(),
            AppMsg::SubmitReview => {
                self.submit_review();
                return None;
            }
            _ => return None,
        }
        self.error = None;
        None
    }

    fn insert_comment_character(&mut self, character: char) {
        match self.form.push_comment_char(character) {
            Ok(()) => self.error = None,
            Err(error) => self.error = Some(error.to_string()),
        }
    }

    fn submit_review(&mut self) {
        self.form.stop_editing();
        self.status = None;

        let Some(log) = self.log.as_ref().map(Arc::clone) else {
            self.error = Some("Review log is not configured".to_owned());
            return;
        };

        let feedback = self.form.to_feedback();
        let article_index = self.session.index();

        match self
            .session
            .submit_review(&feedback, Local::now(), log.as_ref())
        {
            Ok(entry) => {
                tracing::info!(
                    article_index,
                    decision = %entry.review_decision,
                    corrected_score = %entry.corrected_score,
                    "review submitted"
                );
                self.telemetry.record(TelemetryEvent::ReviewSubmitted {
                    article_index,
                    decision: entry.review_decision.to_string(),
                    corrected_score: entry.corrected_score.to_string(),
                });
                self.form.reset();
                self.error = None;
                self.status = Some(SAVED_STATUS.to_owned());
            }
            Err(error) => {
                tracing::warn!(article_index, %error, "review submission failed");
                let message = error.to_string();
                self.telemetry.record(TelemetryEvent::ReviewSubmitFailed {
                    article_index,
                    message: message.clone(),
                });
                self.error = Some(message);
            }
        }
    }
}
