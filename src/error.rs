//! Error types exposed by the review tool.

use thiserror::Error;

/// Errors surfaced while loading articles, writing reviews, or driving the
/// review session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The article file could not be parsed.
    #[error("article file '{path}' is malformed: {message}")]
    MalformedArticles {
        /// Path of the article file.
        path: String,
        /// Parser message from `serde_json`.
        message: String,
    },

    /// Appending to the review log failed.
    #[error("failed to write review log '{path}': {message}")]
    LogWrite {
        /// Path of the review log.
        path: String,
        /// Error detail from the CSV writer or filesystem.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// No reviewer name was configured and `USER` is unset.
    #[error("reviewer name is required (use --reviewer or FISCAL_REVIEW_REVIEWER)")]
    MissingReviewer,

    /// A submission was attempted after every article was reviewed.
    #[error("all articles have been reviewed; there is nothing to submit")]
    SessionComplete,

    /// A corrected score outside 1-5 was requested.
    #[error("corrected score must be between 1 and 5, got {value}")]
    InvalidScore {
        /// The rejected value.
        value: u8,
    },

    /// The terminal user interface failed.
    #[error("TUI error: {message}")]
    Tui {
        /// Error detail from bubbletea-rs.
        message: String,
    },
}

impl ReviewError {
    /// Wraps an I/O error with a short description of the failed operation.
    #[must_use]
    pub fn io(context: &str, error: &std::io::Error) -> Self {
        Self::Io {
            message: format!("{context}: {error}"),
        }
    }
}
