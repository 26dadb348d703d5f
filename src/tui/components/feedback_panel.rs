//! Feedback panel showing the reviewer's decision, corrected score, and
//! comments for the current article.

use crate::review::{CorrectedScore, ReviewDecision};
use crate::tui::state::FeedbackForm;

use super::text_wrap::wrap_text;

/// Placeholder shown while the comments field is empty.
const EMPTY_COMMENTS_PLACEHOLDER: &str = "(no comments)";

/// Context for rendering the feedback panel.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackPanelViewContext<'a> {
    /// Form state to render.
    pub form: &'a FeedbackForm,
    /// Maximum width in columns for wrapped comment text.
    pub max_width: usize,
}

/// Component for displaying the feedback form.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeedbackPanelComponent;

impl FeedbackPanelComponent {
    /// Renders the panel. Every line ends with a newline.
    #[must_use]
    pub fn view(ctx: &FeedbackPanelViewContext<'_>) -> String {
        let form = ctx.form;
        let mut output = String::from("Reviewer feedback\n");

        output.push_str(&format!(
            "Do you approve the model's deficit score?  {}\n",
            Self::render_decision(form.decision())
        ));
        output.push_str(&format!(
            "Corrected score (if rejected):  {}\n",
            Self::render_score_selector(form.corrected_score())
        ));
        output.push_str(&Self::render_comment_header(form));
        output.push('\n');

        if form.comments().is_empty() {
            output.push_str("  ");
            output.push_str(EMPTY_COMMENTS_PLACEHOLDER);
            output.push('\n');
        } else {
            let width = ctx.max_width.saturating_sub(2);
            for line in wrap_text(form.comments(), width) {
                output.push_str("  ");
                output.push_str(&line);
                output.push('\n');
            }
        }

        output
    }

    fn render_decision(selected: ReviewDecision) -> String {
        [ReviewDecision::Approve, ReviewDecision::Reject]
            .into_iter()
            .map(|decision| {
                let marker = if decision == selected { "(*)" } else { "( )" };
                format!("{marker} {decision}")
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn render_score_selector(selected: CorrectedScore) -> String {
        CorrectedScore::OPTIONS
            .into_iter()
            .map(|option| {
                if option == selected {
                    format!("[{option}]")
                } else {
                    format!(" {option} ")
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render_comment_header(form: &FeedbackForm) -> String {
        let mode = if form.is_editing_comments() {
            "editing, Esc to finish"
        } else {
            "c to edit"
        };
        format!(
            "Comments ({mode}) {}/{}",
            form.comment_char_count(),
            form.max_comment_length()
        )
    }
}
