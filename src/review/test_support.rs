//! In-memory review sinks for tests.

use std::sync::Mutex;

use crate::articles::Article;
use crate::error::ReviewError;

use super::log::ReviewSink;
use super::model::ReviewEntry;

/// Sink that keeps every appended entry in memory.
#[derive(Debug, Default)]
pub struct RecordingReviewSink {
    entries: Mutex<Vec<ReviewEntry>>,
}

impl RecordingReviewSink {
    /// Returns a copy of the recorded entries in append order.
    #[must_use]
    pub fn entries(&self) -> Vec<ReviewEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl ReviewSink for RecordingReviewSink {
    fn append(&self, entry: &ReviewEntry) -> Result<(), ReviewError> {
        let mut entries = self.entries.lock().map_err(|_| ReviewError::LogWrite {
            path: "<memory>".to_owned(),
            message: "recording sink mutex poisoned".to_owned(),
        })?;
        entries.push(entry.clone());
        Ok(())
    }
}

/// Sink that rejects every append.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingReviewSink;

impl ReviewSink for FailingReviewSink {
    fn append(&self, _entry: &ReviewEntry) -> Result<(), ReviewError> {
        Err(ReviewError::LogWrite {
            path: "<memory>".to_owned(),
            message: "simulated write failure".to_owned(),
        })
    }
}

/// Creates `count` articles numbered from 1.
///
/// Every third article has no model score or analysis.
#[must_use]
pub fn sample_articles(count: usize) -> Vec<Article> {
    let scored_pattern = [true, true, false].into_iter().cycle();
    let score_pattern = [2_u8, 3, 4, 5, 1].into_iter().cycle();

    (1..=count)
        .zip(scored_pattern.zip(score_pattern))
        .map(|(n, (scored, score))| Article {
            headline: format!("Headline {n}"),
            date: format!("2024-01-{n:02}"),
            source: "Wire".to_owned(),
            url: format!("https://example.com/articles/{n}"),
            cleaned_article: format!("Body of article {n}."),
            deficit_score: scored.then(|| score.into()),
            deficit_analysis: scored.then(|| format!("Analysis {n}").into()),
        })
        .collect()
}
