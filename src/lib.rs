//! Fiscal review library crate for human review of model-scored articles.
//!
//! The library loads news articles that a model has already scored for
//! fiscal deficit sentiment, drives a review session over them, and appends
//! each reviewer submission to a CSV review log. The terminal interface in
//! [`tui`] is the interactive surface; [`review::ReviewSession`] can be
//! driven directly for scripted or test use.

pub mod articles;
pub mod config;
pub mod error;
mod fs;
pub mod logging;
pub mod review;
pub mod telemetry;
pub mod tui;

pub use articles::{Article, load_articles};
pub use config::ReviewConfig;
pub use error::ReviewError;
pub use review::{CsvReviewLog, ReviewSession, ReviewSink};
