//! Article fixtures and review log readers for the review session BDD tests.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::json;

/// Writes `count` articles to `articles.json` under `root`.
///
/// Every third article has no model score or analysis.
pub(crate) fn write_articles(
    root: &Utf8Path,
    count: usize,
) -> Result<Utf8PathBuf, Box<dyn std::error::Error>> {
    let articles: Vec<serde_json::Value> = (1..=count)
        .zip([true, true, false].into_iter().cycle())
        .map(|(n, scored)| {
            let mut article = json!({
                "headline": format!("Deficit story {n}"),
                "date": format!("2024-02-{n:02}"),
                "source": "Wire",
                "url": format!("https://example.com/deficit/{n}"),
                "cleaned_article": format!("The budget outlook for story {n}."),
            });
            if let (true, Some(object)) = (scored, article.as_object_mut()) {
                object.insert("deficit_score".to_owned(), json!(2));
                object.insert("deficit_analysis".to_owned(), json!("Spending rises."));
            }
            article
        })
        .collect();

    let path = root.join("articles.json");
    std::fs::write(&path, serde_json::to_string_pretty(&articles)?)?;
    Ok(path)
}

/// Review log contents keyed by column name.
pub(crate) struct ReviewRows {
    headers: csv::StringRecord,
    rows: Vec<csv::StringRecord>,
}

impl ReviewRows {
    /// Reads every data row from the CSV log at `path`.
    pub(crate) fn read(path: &Utf8Path) -> Result<Self, Box<dyn std::error::Error>> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();
        let rows = reader.records().collect::<Result<Vec<_>, _>>()?;
        Ok(Self { headers, rows })
    }

    /// Returns the number of data rows.
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns the value of `column` in the one-based `row`.
    pub(crate) fn field(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.headers.iter().position(|header| header == column)?;
        self.rows.get(row.checked_sub(1)?)?.get(index)
    }
}
