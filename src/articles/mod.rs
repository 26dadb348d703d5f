//! Article records and the JSON article file loader.
//!
//! The article file is a JSON array of objects. Each object carries the
//! article metadata, the cleaned body text, and the model's deficit score
//! and rationale. Extra keys are ignored; the two model fields are optional.
//!
//! Values are only looked up, not validated: metadata fields accept any
//! JSON scalar and are kept as text, and the model fields keep whatever
//! JSON value the file holds.

use camino::Utf8Path;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ReviewError;
use crate::fs::open_parent_dir;

/// Display value used when an optional model field is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// A pre-scored news article awaiting review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article headline.
    #[serde(deserialize_with = "scalar_text")]
    pub headline: String,
    /// Publication date as it appears in the source data.
    #[serde(deserialize_with = "scalar_text")]
    pub date: String,
    /// Publishing outlet.
    #[serde(deserialize_with = "scalar_text")]
    pub source: String,
    /// Link to the original article.
    #[serde(deserialize_with = "scalar_text")]
    pub url: String,
    /// Cleaned article body.
    #[serde(deserialize_with = "scalar_text")]
    pub cleaned_article: String,
    /// Model-predicted deficit score, nominally 1-5.
    #[serde(default)]
    pub deficit_score: Option<Value>,
    /// Model rationale for the score.
    #[serde(default)]
    pub deficit_analysis: Option<Value>,
}

impl Article {
    /// Returns the model score for display, or `N/A` when absent.
    #[must_use]
    pub fn score_label(&self) -> String {
        display_or_not_available(self.deficit_score.as_ref())
    }

    /// Returns the model analysis for display, or `N/A` when absent.
    #[must_use]
    pub fn analysis_label(&self) -> String {
        display_or_not_available(self.deficit_analysis.as_ref())
    }

    /// Returns the model score as written to the review log.
    ///
    /// Absent scores are logged as an empty cell.
    #[must_use]
    pub fn score_cell(&self) -> String {
        self.deficit_score
            .as_ref()
            .map(value_text)
            .unwrap_or_default()
    }

    /// Returns the model analysis as written to the review log.
    #[must_use]
    pub fn analysis_cell(&self) -> String {
        self.deficit_analysis
            .as_ref()
            .map(value_text)
            .unwrap_or_default()
    }
}

fn display_or_not_available(value: Option<&Value>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_owned(), value_text)
}

/// Renders a JSON value as plain text; strings lose their quotes.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Accepts a string, number, or boolean and keeps it as text.
fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        scalar @ (Value::Number(_) | Value::Bool(_)) => Ok(scalar.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string, number, or boolean, found {other}"
        ))),
    }
}

/// Loads the article list from a JSON file.
///
/// # Errors
///
/// Returns [`ReviewError::Io`] when the file cannot be opened or read, and
/// [`ReviewError::MalformedArticles`] when it is not a JSON array of article
/// objects with the required keys.
pub fn load_articles(path: &Utf8Path) -> Result<Vec<Article>, ReviewError> {
    let parent = open_parent_dir(path, false)?;
    let contents = parent
        .dir
        .read_to_string(&parent.file_name)
        .map_err(|error| ReviewError::io(&format!("failed to read articles '{path}'"), &error))?;

    let articles = parse_articles(&contents).map_err(|error| ReviewError::MalformedArticles {
        path: path.to_string(),
        message: error.to_string(),
    })?;

    tracing::info!(count = articles.len(), %path, "loaded articles");
    Ok(articles)
}

/// Parses an article list from JSON text.
///
/// # Errors
///
/// Returns the `serde_json` error when the text is not a valid article list.
pub fn parse_articles(contents: &str) -> Result<Vec<Article>, serde_json::Error> {
    serde_json::from_str(contents)
}
