//! File-backed `tracing` subscriber.
//!
//! The TUI owns the terminal, so log output goes to a file named in the
//! configuration. Without one no subscriber is installed and `tracing`
//! events are discarded.

use std::sync::Mutex;

use camino::Utf8Path;
use cap_std::fs::OpenOptions;
use tracing_subscriber::EnvFilter;

use crate::error::ReviewError;
use crate::fs::open_parent_dir;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Installs a global subscriber that appends formatted events to `path`.
///
/// The filter is read from `RUST_LOG`, defaulting to `info`.
///
/// # Errors
///
/// Returns [`ReviewError::Io`] when the log file cannot be opened, or
/// [`ReviewError::Configuration`] when a global subscriber is already set.
pub fn init_file_logging(path: &Utf8Path) -> Result<(), ReviewError> {
    let parent = open_parent_dir(path, true)?;
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    let file = parent
        .dir
        .open_with(&parent.file_name, &options)
        .map_err(|error| ReviewError::io(&format!("failed to open log file '{path}'"), &error))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|error| ReviewError::Configuration {
            message: format!("failed to install log subscriber: {error}"),
        })
}
