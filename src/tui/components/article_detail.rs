//! Article detail component for rendering the article under review.
//!
//! The pane shows the article metadata, the word-wrapped cleaned text, the
//! model's score and analysis, and the compact scoring legend. Long
//! articles are scrolled by the caller through `scroll_offset`.

use crate::articles::Article;

use super::rubric::{RUBRIC_TITLE, legend_lines};
use super::text_wrap::wrap_text;

/// Context for rendering the article detail view.
#[derive(Debug, Clone, Copy)]
pub struct ArticleDetailViewContext<'a> {
    /// Article to display.
    pub article: &'a Article,
    /// Maximum width in columns for wrapped text.
    pub max_width: usize,
    /// Maximum height in lines for the pane (0 = unlimited).
    pub max_height: usize,
    /// Number of rendered lines to skip from the top.
    pub scroll_offset: usize,
}

/// Component for displaying one article and the model's assessment.
#[derive(Debug, Clone, Copy)]
pub struct ArticleDetailComponent {
    show_rubric_legend: bool,
}

impl Default for ArticleDetailComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleDetailComponent {
    /// Creates a new article detail component with the rubric legend shown.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_rubric_legend: true,
        }
    }

    /// Sets whether the scoring legend follows the model analysis.
    #[must_use]
    pub const fn with_rubric_legend(mut self, show: bool) -> Self {
        self.show_rubric_legend = show;
        self
    }

    /// Renders the visible window of the article pane.
    ///
    /// Lines before `scroll_offset` are skipped and the result is cut to
    /// `max_height` lines when that is non-zero. Every rendered line ends
    /// with a newline.
    #[must_use]
    pub fn view(&self, ctx: &ArticleDetailViewContext<'_>) -> String {
        let lines = self.render_lines(ctx);
        let offset = ctx.scroll_offset.min(lines.len());
        let visible = lines.get(offset..).unwrap_or_default();
        let take = if ctx.max_height == 0 {
            visible.len()
        } else {
            ctx.max_height
        };

        let mut output = String::new();
        for line in visible.iter().take(take) {
            output.push_str(line);
            output.push('\n');
        }
        output
    }

    /// Returns the total number of rendered lines before scrolling.
    #[must_use]
    pub fn line_count(&self, ctx: &ArticleDetailViewContext<'_>) -> usize {
        self.render_lines(ctx).len()
    }

    /// Returns the largest useful scroll offset for the given context.
    #[must_use]
    pub fn max_scroll_offset(&self, ctx: &ArticleDetailViewContext<'_>) -> usize {
        if ctx.max_height == 0 {
            return 0;
        }
        self.line_count(ctx).saturating_sub(ctx.max_height)
    }

    fn render_lines(&self, ctx: &ArticleDetailViewContext<'_>) -> Vec<String> {
        let article = ctx.article;
        let width = ctx.max_width;
        let mut lines = Vec::new();

        lines.extend(wrap_text(&article.headline, width));
        lines.extend(wrap_text(
            &format!("Date: {} | Source: {}", article.date, article.source),
            width,
        ));
        lines.push(format!("Link: {}", article.url));
        lines.push(Self::render_separator(width));

        lines.push("Cleaned article:".to_owned());
        lines.extend(wrap_text(&article.cleaned_article, width));
        lines.push(String::new());

        lines.push(format!("Model score: {}", article.score_label()));
        lines.push(String::new());
        lines.push("Model analysis:".to_owned());
        lines.extend(wrap_text(&article.analysis_label(), width));

        if self.show_rubric_legend {
            lines.push(String::new());
            lines.extend(wrap_text(RUBRIC_TITLE, width));
            lines.extend(legend_lines());
        }
        lines
    }

    fn render_separator(width: usize) -> String {
        "\u{2500}".repeat(width)
    }
}

#[cfg(test)]
#[path = "article_detail_tests.rs"]
mod tests;
