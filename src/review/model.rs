//! Reviewer feedback and the persisted review entry.

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

use crate::articles::Article;
use crate::error::ReviewError;

/// Label written for a corrected score of "no issue".
pub const NO_ISSUE_LABEL: &str = "NA (no issue)";

/// Timestamp layout for `review_time`: local time with microseconds.
const REVIEW_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Whether the reviewer accepts the model's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ReviewDecision {
    /// The model score is correct.
    #[default]
    Approve,
    /// The model score is wrong.
    Reject,
}

impl ReviewDecision {
    /// Returns the other decision.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Approve => Self::Reject,
            Self::Reject => Self::Approve,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Reject => "Reject",
        }
    }
}

impl fmt::Display for ReviewDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A deficit score level between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScoreLevel(u8);

impl ScoreLevel {
    /// Lowest valid level.
    pub const MIN: u8 = 1;
    /// Highest valid level.
    pub const MAX: u8 = 5;

    /// Creates a score level.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidScore`] when `value` is outside 1-5.
    pub const fn new(value: u8) -> Result<Self, ReviewError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(ReviewError::InvalidScore { value });
        }
        Ok(Self(value))
    }

    /// Returns the numeric level.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// The reviewer's corrected score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorrectedScore {
    /// No correction needed.
    #[default]
    NoIssue,
    /// The score the model should have produced.
    Level(ScoreLevel),
}

impl CorrectedScore {
    /// Selector options in display order.
    pub const OPTIONS: [Self; 6] = [
        Self::NoIssue,
        Self::Level(ScoreLevel(1)),
        Self::Level(ScoreLevel(2)),
        Self::Level(ScoreLevel(3)),
        Self::Level(ScoreLevel(4)),
        Self::Level(ScoreLevel(5)),
    ];

    /// Maps a selector digit to an option: `0` is "no issue", `1`-`5` are
    /// levels.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidScore`] for digits above 5.
    pub fn from_digit(digit: u8) -> Result<Self, ReviewError> {
        if digit == 0 {
            return Ok(Self::NoIssue);
        }
        ScoreLevel::new(digit).map(Self::Level)
    }

    /// Returns the position of this option in [`Self::OPTIONS`].
    #[must_use]
    pub const fn option_index(self) -> usize {
        match self {
            Self::NoIssue => 0,
            Self::Level(level) => level.get() as usize,
        }
    }

    /// Returns the next option, wrapping from 5 back to "no issue".
    #[must_use]
    pub fn cycled(self) -> Self {
        Self::OPTIONS
            .get(self.option_index() + 1)
            .copied()
            .unwrap_or_default()
    }
}

impl fmt::Display for CorrectedScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoIssue => f.write_str(NO_ISSUE_LABEL),
            Self::Level(level) => write!(f, "{}", level.get()),
        }
    }
}

impl Serialize for CorrectedScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Feedback collected from the reviewer for one article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFeedback {
    /// Approve or reject the model score.
    pub decision: ReviewDecision,
    /// Free-text comments; may be empty.
    pub comments: String,
    /// Corrected score, or "no issue".
    pub corrected_score: CorrectedScore,
}

/// One row of the review log.
///
/// Field order defines the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewEntry {
    /// Article date.
    pub date: String,
    /// Article headline.
    pub headline: String,
    /// Article URL.
    pub url: String,
    /// Article source.
    pub source: String,
    /// Article body.
    pub cleaned_article: String,
    /// Model score, empty when absent.
    pub deficit_score: String,
    /// Model analysis, empty when absent.
    pub deficit_analysis: String,
    /// Reviewer decision.
    pub review_decision: ReviewDecision,
    /// Reviewer comments.
    pub review_comments: String,
    /// Corrected score.
    pub corrected_score: CorrectedScore,
    /// Local submission time.
    pub review_time: String,
    /// Reviewer name.
    pub review_user: String,
}

impl ReviewEntry {
    /// Builds an entry for `article` from the reviewer's feedback.
    #[must_use]
    pub fn new(
        article: &Article,
        feedback: &ReviewFeedback,
        reviewed_at: DateTime<Local>,
        reviewer: &str,
    ) -> Self {
        Self {
            date: article.date.clone(),
            headline: article.headline.clone(),
            url: article.url.clone(),
            source: article.source.clone(),
            cleaned_article: article.cleaned_article.clone(),
            deficit_score: article.score_cell(),
            deficit_analysis: article.analysis_cell(),
            review_decision: feedback.decision,
            review_comments: feedback.comments.clone(),
            corrected_score: feedback.corrected_score,
            review_time: reviewed_at.format(REVIEW_TIME_FORMAT).to_string(),
            review_user: reviewer.to_owned(),
        }
    }
}
