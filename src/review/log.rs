//! Append-only review log.
//!
//! Reviews are written as CSV rows. The header row is written once, when the
//! log is first created (or found empty); every submission after that is a
//! single appended row. Existing rows are never read back or rewritten.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs::OpenOptions;

use crate::error::ReviewError;
use crate::fs::{ParentDir, open_parent_dir};

use super::model::ReviewEntry;

/// Destination for submitted review entries.
#[cfg_attr(test, mockall::automock)]
pub trait ReviewSink: Send + Sync {
    /// Appends one entry to the log.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::LogWrite`] when the entry cannot be persisted.
    fn append(&self, entry: &ReviewEntry) -> Result<(), ReviewError>;
}

/// CSV review log opened in append mode for each submission.
///
/// No file locking is performed; a single writer is assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvReviewLog {
    path: Utf8PathBuf,
}

impl CsvReviewLog {
    /// Creates a log that writes to `path`.
    ///
    /// The file is not touched until the first append.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the log path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        self.path.as_path()
    }

    fn write_error(&self, message: impl ToString) -> ReviewError {
        ReviewError::LogWrite {
            path: self.path.to_string(),
            message: message.to_string(),
        }
    }

    fn needs_header(&self, parent: &ParentDir) -> Result<bool, ReviewError> {
        match parent.dir.metadata(&parent.file_name) {
            Ok(metadata) => Ok(metadata.len() == 0),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(true),
            Err(error) => Err(self.write_error(error)),
        }
    }
}

impl ReviewSink for CsvReviewLog {
    fn append(&self, entry: &ReviewEntry) -> Result<(), ReviewError> {
        let parent = open_parent_dir(&self.path, true).map_err(|error| self.write_error(error))?;
        let write_header = self.needs_header(&parent)?;

        let mut options = OpenOptions::new();
        options.append(true).create(true);
        let file = parent
            .dir
            .open_with(&parent.file_name, &options)
            .map_err(|error| self.write_error(error))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer
            .serialize(entry)
            .map_err(|error| self.write_error(error))?;
        let mut written = writer
            .into_inner()
            .map_err(|error| self.write_error(error.error()))?;
        written.flush().map_err(|error| self.write_error(error))?;

        tracing::debug!(path = %self.path, header = write_header, "appended review entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    use super::*;
    use crate::articles::Article;
    use crate::review::model::{CorrectedScore, ReviewDecision, ReviewFeedback};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const HEADER: [&str; 12] = [
        "date",
        "headline",
        "url",
        "source",
        "cleaned_article",
        "deficit_score",
        "deficit_analysis",
        "review_decision",
        "review_comments",
        "corrected_score",
        "review_time",
        "review_user",
    ];

    #[fixture]
    fn entry() -> ReviewEntry {
        let article = Article {
            headline: "Deficit, revisited".to_owned(),
            date: "2024-02-03".to_owned(),
            source: "Gazette".to_owned(),
            url: "https://example.com/deficit".to_owned(),
            cleaned_article: "Line one.\nLine \"two\".".to_owned(),
            deficit_score: Some(3.into()),
            deficit_analysis: None,
        };
        let feedback = ReviewFeedback {
            decision: ReviewDecision::Approve,
            comments: "looks fine".to_owned(),
            corrected_score: CorrectedScore::NoIssue,
        };
        let reviewed_at = Local
            .with_ymd_and_hms(2024, 2, 3, 4, 5, 6)
            .single()
            .expect("fixed timestamp should be valid");
        ReviewEntry::new(&article, &feedback, reviewed_at, "casey")
    }

    fn log_in(temp_dir: &TempDir, relative: &str) -> Result<CsvReviewLog, Box<dyn std::error::Error>> {
        let root = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
            .map_err(|_| "temp directory path must be UTF-8")?;
        Ok(CsvReviewLog::new(root.join(relative)))
    }

    fn read_records(log: &CsvReviewLog) -> Result<Vec<csv::StringRecord>, Box<dyn std::error::Error>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(log.path())?;
        Ok(reader.records().collect::<Result<Vec<_>, _>>()?)
    }

    #[rstest]
    fn first_append_creates_file_with_header_and_one_row(entry: ReviewEntry) -> TestResult {
        let temp_dir = TempDir::new()?;
        let log = log_in(&temp_dir, "reviews.csv")?;

        log.append(&entry)?;

        let records = read_records(&log)?;
        assert_eq!(records.len(), 2);
        let header = records.first().ok_or("header row")?;
        assert_eq!(header.iter().collect::<Vec<_>>(), HEADER.to_vec());
        let row = records.get(1).ok_or("data row")?;
        assert_eq!(row.get(1), Some("Deficit, revisited"));
        assert_eq!(row.get(4), Some("Line one.\nLine \"two\"."));
        assert_eq!(row.get(5), Some("3"));
        assert_eq!(row.get(6), Some(""));
        assert_eq!(row.get(7), Some("Approve"));
        assert_eq!(row.get(9), Some("NA (no issue)"));
        Ok(())
    }

    #[rstest]
    fn later_appends_add_rows_without_repeating_header(entry: ReviewEntry) -> TestResult {
        let temp_dir = TempDir::new()?;
        let log = log_in(&temp_dir, "reviews.csv")?;

        log.append(&entry)?;
        log.append(&entry)?;
        log.append(&entry)?;

        let records = read_records(&log)?;
        assert_eq!(records.len(), 4);
        let header_rows = records
            .iter()
            .filter(|record| record.get(0) == Some("date"))
            .count();
        assert_eq!(header_rows, 1);
        Ok(())
    }

    #[rstest]
    fn empty_existing_file_gets_a_header(entry: ReviewEntry) -> TestResult {
        let temp_dir = TempDir::new()?;
        let log = log_in(&temp_dir, "reviews.csv")?;
        std::fs::write(log.path(), "")?;

        log.append(&entry)?;

        let records = read_records(&log)?;
        assert_eq!(records.first().and_then(|r| r.get(0)), Some("date"));
        assert_eq!(records.len(), 2);
        Ok(())
    }

    #[rstest]
    fn missing_parent_directories_are_created(entry: ReviewEntry) -> TestResult {
        let temp_dir = TempDir::new()?;
        let log = log_in(&temp_dir, "nested/out/reviews.csv")?;

        log.append(&entry)?;

        assert!(log.path().is_file());
        Ok(())
    }

    #[rstest]
    fn unwritable_target_reports_log_write_error(entry: ReviewEntry) -> TestResult {
        let temp_dir = TempDir::new()?;
        let log = log_in(&temp_dir, "reviews.csv")?;
        std::fs::create_dir(log.path())?;

        let result = log.append(&entry);

        assert!(matches!(result, Err(ReviewError::LogWrite { .. })));
        Ok(())
    }
}
