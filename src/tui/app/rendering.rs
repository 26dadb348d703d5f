//! Rendering logic for the review TUI application.
//!
//! These are pure query methods that read state without modification.

use super::ReviewApp;
use crate::review::Progress;
use crate::tui::components::rubric::full_rubric_lines;
use crate::tui::components::wrap_text;

/// Application title shown in the header.
const TITLE: &str = "Fiscal Deficit Review";

/// Widest progress bar drawn, in cells.
const MAX_PROGRESS_BAR_WIDTH: usize = 50;

const SUBMITTED_INDICATOR: &str = "You have successfully submitted this review!";
const NOT_SUBMITTED_INDICATOR: &str = "You have not submitted a review for this article yet.";
const COMPLETE_MESSAGE: &str = "All articles reviewed!";

impl ReviewApp {
    /// Renders the article, feedback panel, and footer for the current
    /// article.
    pub(super) fn render_review_view(&self) -> String {
        let mut output = self.render_header();

        if let Some(ctx) = self.article_view_context() {
            let pane = self.article_detail.view(&ctx);
            let shown = pane.lines().count();
            output.push_str(&pane);
            // Pad short articles so the panel stays anchored.
            for _ in shown..ctx.max_height {
                output.push('\n');
            }
        }

        output.push_str(&"\u{2500}".repeat(self.content_width()));
        output.push('\n');
        output.push_str(&self.render_feedback_panel());
        output.push_str(self.render_submission_indicator());
        output.push('\n');
        output.push_str(&self.render_status_bar());
        output
    }

    /// Renders the completion screen.
    pub(super) fn render_complete_view(&self) -> String {
        let mut output = format!("{TITLE}\n\n{COMPLETE_MESSAGE}\n");
        if self.session.is_empty() {
            output.push_str("There were no articles to review.\n");
        } else {
            let total = self.session.len();
            output.push_str(&format!("Reached the end of {total} articles.\n"));
        }
        output.push('\n');
        output.push_str(&self.render_status_bar());
        output
    }

    /// Renders the title, progress line, and progress bar.
    pub(super) fn render_header(&self) -> String {
        let Some(progress) = self.session.progress() else {
            return format!("{TITLE}\n\n\n");
        };

        let reviewer = self.session.reviewer();
        format!(
            "{TITLE}  [{reviewer}]\nProgress: Article {} of {} ({}%)\n{}\n",
            progress.position,
            progress.total,
            progress.percent(),
            self.render_progress_bar(progress)
        )
    }

    fn render_progress_bar(&self, progress: Progress) -> String {
        let bar_width = self
            .content_width()
            .saturating_sub(2)
            .clamp(1, MAX_PROGRESS_BAR_WIDTH);
        let filled = progress
            .position
            .saturating_mul(bar_width)
            .checked_div(progress.total)
            .unwrap_or(0)
            .min(bar_width);
        format!(
            "[{}{}]",
            "#".repeat(filled),
            ".".repeat(bar_width - filled)
        )
    }

    const fn render_submission_indicator(&self) -> &'static str {
        if self.session.is_submitted() {
            SUBMITTED_INDICATOR
        } else {
            NOT_SUBMITTED_INDICATOR
        }
    }

    /// Renders the status bar with help hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }

        if let Some(status) = &self.status {
            return format!("{status}\n");
        }

        if self.session.is_complete() {
            return "h:back to last article  ?:help  q:quit\n".to_owned();
        }

        if self.form.is_editing_comments() {
            return "Comments: type to edit  Backspace:delete  Enter:newline  Esc:done\n"
                .to_owned();
        }

        format!("{}\n", self.review_status_hints())
    }

    const fn review_status_hints(&self) -> &'static str {
        if self.width <= 80 {
            "h/l:prev/next  a/r:decide  0-5:score  c:comment  Enter:submit  ?:help  q:quit"
        } else {
            "h/l:prev/next  j/k:scroll  a/r:approve/reject  0-5,s:score  c:comment  \
             Enter:submit  ?:help  q:quit"
        }
    }

    /// Renders the help overlay with key bindings and the scoring rubric.
    pub(super) fn render_help_overlay(&self) -> String {
        let help_text = r"
=== Keyboard Shortcuts ===

Articles:
  h, Left    Previous article
  l, Right   Next article
  j, Down    Scroll article down
  k, Up      Scroll article up
  PgDn       Page down
  PgUp       Page up

Feedback:
  a          Approve the model score
  r          Reject the model score
  Tab        Toggle approve/reject
  0          Corrected score: NA (no issue)
  1-5        Corrected score
  s          Cycle corrected score
  c          Edit comments (Esc to finish)
  Enter      Submit review

Other:
  ?          Toggle this help
  q, Ctrl+C  Quit
";

        let mut output = help_text.to_owned();
        output.push('\n');
        for line in full_rubric_lines() {
            for row in wrap_text(&line, self.content_width()) {
                output.push_str(&row);
                output.push('\n');
            }
        }
        output.push_str("\nPress any key to close this help.\n");
        output
    }
}
