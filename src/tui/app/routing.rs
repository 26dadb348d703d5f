//! Message routing and dispatch logic.
//!
//! Messages are dispatched by category: navigation, feedback form, and
//! lifecycle. The completion screen has no form, so form messages other
//! than submission are dropped there.

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::error::ReviewError;
use crate::tui::messages::AppMsg;

impl ReviewApp {
    /// Handles a message and updates state accordingly.
    ///
    /// This is the core update function that processes all application
    /// messages and returns any resulting commands.
    #[doc(hidden)]
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }

        if msg.is_form() {
            if self.session.is_complete() {
                return self.handle_form_msg_when_complete(msg);
            }
            return self.handle_form_msg(msg);
        }

        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches navigation messages to their handlers.
    fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::PreviousArticle => self.handle_previous_article(),
            AppMsg::NextArticle => self.handle_next_article(),
            AppMsg::ScrollUp => self.handle_scroll_up(1),
            AppMsg::ScrollDown => self.handle_scroll_down(1),
            AppMsg::PageUp => self.handle_scroll_up(self.calculate_detail_height()),
            AppMsg::PageDown => self.handle_scroll_down(self.calculate_detail_height()),
            _ => {
                // Unreachable: caller filters to navigation messages.
                None
            }
        }
    }

    fn handle_form_msg_when_complete(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if matches!(msg, AppMsg::SubmitReview) {
            self.status = None;
            self.error = Some(ReviewError::SessionComplete.to_string());
        }
        None
    }
}
