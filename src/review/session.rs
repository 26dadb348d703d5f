//! Review session state: position in the article list and per-visit
//! submission tracking.
//!
//! The session has two states. While `index < len` the reviewer is on an
//! article; at `index == len` every article has been passed and the session
//! is complete. `go_next` from the last article enters the complete state and
//! `go_prev` from there returns to the last article. The submitted flag only
//! describes the current visit and is cleared by any navigation.

use chrono::{DateTime, Local};

use crate::articles::Article;
use crate::error::ReviewError;

use super::log::ReviewSink;
use super::model::{ReviewEntry, ReviewFeedback};

/// What the session is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentArticle<'a> {
    /// An article is under review.
    Reviewing(&'a Article),
    /// Every article has been passed.
    Complete,
}

/// Reviewer progress through the article list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// One-based position of the current article.
    pub position: usize,
    /// Number of articles in the session.
    pub total: usize,
}

impl Progress {
    /// Returns the completed share in whole percent.
    #[must_use]
    pub fn percent(self) -> usize {
        self.position
            .saturating_mul(100)
            .checked_div(self.total)
            .unwrap_or(0)
    }
}

/// A single reviewer's pass over a fixed list of articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSession {
    articles: Vec<Article>,
    index: usize,
    submitted: bool,
    reviewer: String,
}

impl ReviewSession {
    /// Starts a session at the first article.
    #[must_use]
    pub fn new(articles: Vec<Article>, reviewer: impl Into<String>) -> Self {
        Self {
            articles,
            index: 0,
            submitted: false,
            reviewer: reviewer.into(),
        }
    }

    /// Returns the number of articles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.articles.len()
    }

    /// Returns whether the session has no articles.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Returns the current zero-based index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns whether the current article was submitted during this visit.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Returns whether every article has been passed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.index >= self.articles.len()
    }

    /// Returns the configured reviewer name.
    #[must_use]
    pub fn reviewer(&self) -> &str {
        &self.reviewer
    }

    /// Returns the article under review, or [`CurrentArticle::Complete`].
    #[must_use]
    pub fn current_article(&self) -> CurrentArticle<'_> {
        self.articles
            .get(self.index)
            .map_or(CurrentArticle::Complete, CurrentArticle::Reviewing)
    }

    /// Returns the reviewer's position, or `None` once complete.
    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        if self.is_complete() {
            return None;
        }
        Some(Progress {
            position: self.index.saturating_add(1),
            total: self.articles.len(),
        })
    }

    /// Moves to the previous article.
    ///
    /// Returns `false` without changing state at the first article.
    pub fn go_prev(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        self.submitted = false;
        true
    }

    /// Moves to the next article, or to the complete state from the last one.
    ///
    /// Returns `false` without changing state once complete.
    pub fn go_next(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.index += 1;
        self.submitted = false;
        true
    }

    /// Records feedback for the current article.
    ///
    /// The entry is appended to `log` before the session is marked
    /// submitted, so a failed write leaves the article unsubmitted.
    /// Repeated submissions append additional entries.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::SessionComplete`] when no article is under
    /// review, or the error from `log` when the append fails.
    pub fn submit_review(
        &mut self,
        feedback: &ReviewFeedback,
        reviewed_at: DateTime<Local>,
        log: &dyn ReviewSink,
    ) -> Result<ReviewEntry, ReviewError> {
        let CurrentArticle::Reviewing(article) = self.current_article() else {
            return Err(ReviewError::SessionComplete);
        };

        let entry = ReviewEntry::new(article, feedback, reviewed_at, &self.reviewer);
        log.append(&entry)?;
        self.submitted = true;
        Ok(entry)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
