//! Terminal User Interface for reviewing model-scored articles.
//!
//! This module provides an interactive TUI for reading each article, judging
//! the model's fiscal deficit score, and submitting feedback, using the
//! bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ReviewApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: Main application model and entry point
//! - [`messages`]: Message types for the update loop
//! - [`state`]: Feedback form state
//! - [`components`]: Reusable UI components
//! - [`input`]: Key-to-message mapping for input handling
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, start-up inputs are passed through module-level storage. Call
//! [`set_review_context`] before starting the program, and
//! `ReviewApp::init()` will retrieve it.

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;
mod storage;

pub use app::ReviewApp;
pub use storage::{
    ReviewContext, set_initial_terminal_size, set_review_context, set_telemetry_sink,
};
