//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.fiscal-review.toml` in current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `FISCAL_REVIEW_ARTICLES_PATH`,
//!    `FISCAL_REVIEW_REVIEWER`, and friends
//! 4. **Command-line arguments** – `--articles-path`/`-a`, `--reviewer`/`-r`,
//!    and friends
//!
//! # Configuration File
//!
//! ```toml
//! articles_path = "data/fiscal_deficit_results_sampled.json"
//! review_log_path = "data/fiscal_deficit_review_results.csv"
//! reviewer = "casey"
//! comment_max_length = 2000
//! log_file = "fiscal-review.log"
//! ```

use std::env;

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::ReviewError;

/// Article file read when none is configured.
pub const DEFAULT_ARTICLES_PATH: &str = "../fiscal_deficit_results_sampled.json";

/// Review log written when none is configured.
pub const DEFAULT_REVIEW_LOG_PATH: &str = "../fiscal_deficit_review_results.csv";

/// Comment length limit used when none is configured.
pub const DEFAULT_COMMENT_MAX_LENGTH: usize = 2000;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `FISCAL_REVIEW_ARTICLES_PATH` or `--articles-path`: article JSON file
/// - `FISCAL_REVIEW_REVIEW_LOG_PATH` or `--review-log-path`: CSV review log
/// - `FISCAL_REVIEW_REVIEWER`, `USER`, or `--reviewer`: reviewer name
/// - `FISCAL_REVIEW_LOG_FILE` or `--log-file`: diagnostic log file
///
/// # Example
///
/// ```no_run
/// use fiscal_review::ReviewConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = ReviewConfig::load().expect("failed to load configuration");
/// let reviewer = config.resolve_reviewer().expect("reviewer required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "FISCAL_REVIEW",
    discovery(
        dotfile_name = ".fiscal-review.toml",
        config_file_name = "fiscal-review.toml",
        app_name = "fiscal-review"
    )
)]
pub struct ReviewConfig {
    /// JSON file holding the scored articles.
    ///
    /// Can be provided via:
    /// - CLI: `--articles-path <PATH>` or `-a <PATH>`
    /// - Environment: `FISCAL_REVIEW_ARTICLES_PATH`
    /// - Config file: `articles_path = "..."`
    #[ortho_config(cli_short = 'a')]
    pub articles_path: Option<String>,

    /// CSV file that review entries are appended to.
    ///
    /// Can be provided via:
    /// - CLI: `--review-log-path <PATH>` or `-o <PATH>`
    /// - Environment: `FISCAL_REVIEW_REVIEW_LOG_PATH`
    /// - Config file: `review_log_path = "..."`
    #[ortho_config(cli_short = 'o')]
    pub review_log_path: Option<String>,

    /// Name recorded in the `review_user` column.
    ///
    /// Can be provided via:
    /// - CLI: `--reviewer <NAME>` or `-r <NAME>`
    /// - Environment: `FISCAL_REVIEW_REVIEWER`, falling back to `USER`
    /// - Config file: `reviewer = "..."`
    #[ortho_config(cli_short = 'r')]
    pub reviewer: Option<String>,

    /// Maximum number of characters in a review comment.
    #[ortho_config()]
    pub comment_max_length: Option<usize>,

    /// File that diagnostic logs are appended to.
    ///
    /// When unset, no log output is produced.
    #[ortho_config(cli_short = 'l')]
    pub log_file: Option<String>,
}

impl ReviewConfig {
    /// Returns the article file path, falling back to the default.
    #[must_use]
    pub fn articles_path(&self) -> &Utf8Path {
        Utf8Path::new(
            self.articles_path
                .as_deref()
                .unwrap_or(DEFAULT_ARTICLES_PATH),
        )
    }

    /// Returns the review log path, falling back to the default.
    #[must_use]
    pub fn review_log_path(&self) -> &Utf8Path {
        Utf8Path::new(
            self.review_log_path
                .as_deref()
                .unwrap_or(DEFAULT_REVIEW_LOG_PATH),
        )
    }

    /// Returns the comment length limit, never less than one character.
    #[must_use]
    pub fn comment_max_length(&self) -> usize {
        self.comment_max_length
            .unwrap_or(DEFAULT_COMMENT_MAX_LENGTH)
            .max(1)
    }

    /// Returns the diagnostic log path, if configured.
    #[must_use]
    pub fn log_file(&self) -> Option<&Utf8Path> {
        self.log_file.as_deref().map(Utf8Path::new)
    }

    /// Resolves the reviewer name from configuration or the `USER`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::MissingReviewer`] when no source provides a
    /// non-blank name.
    pub fn resolve_reviewer(&self) -> Result<String, ReviewError> {
        let user = env::var("USER").ok();
        self.resolve_reviewer_with_fallback(user.as_deref())
    }

    /// Resolves the reviewer name with an explicit fallback value.
    pub(crate) fn resolve_reviewer_with_fallback(
        &self,
        fallback: Option<&str>,
    ) -> Result<String, ReviewError> {
        fn non_blank(name: Option<&str>) -> Option<&str> {
            name.map(str::trim).filter(|trimmed| !trimmed.is_empty())
        }

        non_blank(self.reviewer.as_deref())
            .or_else(|| non_blank(fallback))
            .map(str::to_owned)
            .ok_or(ReviewError::MissingReviewer)
    }
}

#[cfg(test)]
mod tests;
