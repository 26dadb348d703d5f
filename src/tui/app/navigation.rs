//! Article navigation and article-pane scrolling.
//!
//! Moving to another article clears the feedback form, the scroll position,
//! and any status or error from the previous article.

use bubbletea_rs::Cmd;

use super::ReviewApp;

impl ReviewApp {
    /// Handles a move to the previous article.
    pub(super) fn handle_previous_article(&mut self) -> Option<Cmd> {
        if self.session.go_prev() {
            self.on_article_changed();
        }
        None
    }

    /// Handles a move to the next article or to the completion screen.
    pub(super) fn handle_next_article(&mut self) -> Option<Cmd> {
        if self.session.go_next() {
            self.on_article_changed();
        }
        None
    }

    fn on_article_changed(&mut self) {
        tracing::debug!(
            index = self.session.index(),
            complete = self.session.is_complete(),
            "article changed"
        );
        self.form.reset();
        self.scroll_offset = 0;
        self.status = None;
        self.error = None;
    }

    /// Scrolls the article pane up by `step` lines.
    pub(super) const fn handle_scroll_up(&mut self, step: usize) -> Option<Cmd> {
        self.scroll_offset = self.scroll_offset.saturating_sub(step);
        None
    }

    /// Scrolls the article pane down by `step` lines, stopping at the last
    /// page.
    pub(super) fn handle_scroll_down(&mut self, step: usize) -> Option<Cmd> {
        let max_offset = self.max_scroll_offset();
        self.scroll_offset = self.scroll_offset.saturating_add(step).min(max_offset);
        None
    }
}
