//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error reporting
//! that support the main entry point.

use cloci::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - malformed invocation or invalid override.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;
}

/// Reports a resolution failure and picks the exit code.
///
/// Usage output (including `--help` and `--version`) goes to stdout.
pub fn report_config_error(error: &ConfigError) -> std::process::ExitCode {
    match error {
        ConfigError::Usage(e) => {
            print!("{}", e.render());
            if e.use_stderr() {
                exit_code::CONFIG_ERROR
            } else {
                exit_code::SUCCESS
            }
        }
        ConfigError::InvalidAddress { .. } | ConfigError::InvalidPort { .. } => {
            eprintln!("Configuration error: {error}");
            if let Some(source) = std::error::Error::source(error) {
                eprintln!("  caused by: {source}");
            }
            exit_code::CONFIG_ERROR
        }
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Defaults to `info`; `RUST_LOG` overrides it.
pub fn setup_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
