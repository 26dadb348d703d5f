//! State management for the review TUI.
//!
//! The review session itself lives in [`crate::review::ReviewSession`]; this
//! module holds the view-side state layered on top of it.

mod feedback_form;

pub use feedback_form::{FeedbackForm, FeedbackFormError};
