//! `Model` trait implementation for the review TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `ReviewApp`, handling initialisation, update dispatch, and view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::ReviewApp;
use crate::review::ReviewSession;
use crate::tui::input::{InputContext, map_key_to_message};
use crate::tui::messages::AppMsg;
use crate::tui::storage::{get_initial_terminal_size, get_review_context, get_telemetry_sink};

impl Model for ReviewApp {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = match get_review_context() {
            Some(context) => Self::new(
                ReviewSession::new(context.articles, context.reviewer),
                context.comment_max_length,
            )
            .with_log(context.log),
            None => {
                tracing::error!("review TUI started without a review context");
                let mut empty = Self::new(ReviewSession::new(Vec::new(), String::new()), 1);
                empty.error = Some("Review context not configured".to_owned());
                empty
            }
        };
        model = model.with_telemetry(get_telemetry_sink());

        let (width, height) = get_initial_terminal_size();
        model.width = width;
        model.height = height;

        (model, None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message(key_msg, self.input_context());
            if let Some(app_msg) = mapped {
                return self.handle_message(&app_msg);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        if self.session.is_complete() {
            return self.normalise_viewport(&self.render_complete_view());
        }

        self.normalise_viewport(&self.render_review_view())
    }
}

impl ReviewApp {
    /// Returns the current input context for context-aware key mapping.
    pub(crate) const fn input_context(&self) -> InputContext {
        if self.session.is_complete() {
            InputContext::Complete
        } else if self.form.is_editing_comments() {
            InputContext::EditingComments
        } else {
            InputContext::Browsing
        }
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces to clear stale cells after resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = usize::from(self.width.max(1));
        let safe_width = width.saturating_sub(1).max(1);
        let height = usize::from(self.height.max(1));

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if char_width == 0 {
            continue;
        }

        if visible_width.saturating_add(char_width) > width {
            break;
        }

        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    if visible_width < width {
        output.push_str(&" ".repeat(width - visible_width));
    }

    output
}
