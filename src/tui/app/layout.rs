//! Layout helpers for the review TUI model.
//!
//! The article pane takes whatever rows remain once the header, feedback
//! panel, and footer are placed.

use crate::review::CurrentArticle;
use crate::tui::components::{
    ArticleDetailViewContext, FeedbackPanelComponent, FeedbackPanelViewContext,
};

use super::{FOOTER_HEIGHT, HEADER_HEIGHT, MIN_DETAIL_HEIGHT, ReviewApp};

impl ReviewApp {
    /// Returns the usable text width in columns.
    pub(super) fn content_width(&self) -> usize {
        usize::from(self.width).saturating_sub(1).max(1)
    }

    /// Renders the feedback panel for the current form.
    pub(super) fn render_feedback_panel(&self) -> String {
        FeedbackPanelComponent::view(&FeedbackPanelViewContext {
            form: &self.form,
            max_width: self.content_width(),
        })
    }

    /// Calculates the number of rows available for the article pane.
    pub(super) fn calculate_detail_height(&self) -> usize {
        let panel_height = self.render_feedback_panel().lines().count();
        // One separator row sits between the article and the panel.
        let chrome = HEADER_HEIGHT + FOOTER_HEIGHT + panel_height + 1;
        usize::from(self.height)
            .saturating_sub(chrome)
            .max(MIN_DETAIL_HEIGHT)
    }

    /// Builds the article pane context for the current article, if any.
    pub(super) fn article_view_context(&self) -> Option<ArticleDetailViewContext<'_>> {
        let CurrentArticle::Reviewing(article) = self.session.current_article() else {
            return None;
        };

        Some(ArticleDetailViewContext {
            article,
            max_width: self.content_width(),
            max_height: self.calculate_detail_height(),
            scroll_offset: self.scroll_offset,
        })
    }

    /// Returns the largest scroll offset that still fills the article pane.
    pub(super) fn max_scroll_offset(&self) -> usize {
        self.article_view_context()
            .map_or(0, |ctx| self.article_detail.max_scroll_offset(&ctx))
    }

    /// Resets the scroll offset if a resize left it past the last page.
    pub(super) fn clamp_scroll_offset(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }
}
