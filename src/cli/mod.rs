//! CLI operation mode handlers.
//!
//! - [`review_tui`]: Interactive TUI for reviewing scored articles

pub mod review_tui;
