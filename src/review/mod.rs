//! Review session, reviewer feedback, and the persistent review log.
//!
//! - [`session`]: navigation over the article list and submission
//! - [`model`]: decisions, corrected scores, and log entries
//! - [`log`]: the append-only CSV log and the [`ReviewSink`] seam

pub mod log;
pub mod model;
pub mod session;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use log::{CsvReviewLog, ReviewSink};
pub use model::{
    CorrectedScore, NO_ISSUE_LABEL, ReviewDecision, ReviewEntry, ReviewFeedback, ScoreLevel,
};
pub use session::{CurrentArticle, Progress, ReviewSession};
