//! Fiscal review CLI entrypoint.
//!
//! Loads configuration, starts optional file logging, and runs the
//! interactive review TUI.

use std::io::{self, Write};
use std::process::ExitCode;

use fiscal_review::logging::init_file_logging;
use fiscal_review::{ReviewConfig, ReviewError};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ReviewError> {
    let config = load_config()?;

    if let Some(log_file) = config.log_file() {
        init_file_logging(log_file)?;
    }

    cli::review_tui::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReviewConfig, ReviewError> {
    ReviewConfig::load().map_err(|error| ReviewError::Configuration {
        message: error.to_string(),
    })
}
