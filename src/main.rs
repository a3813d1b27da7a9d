//! cloci: TLS-fronted compilation server
//!
//! Entry point for the cloci application.

use std::process::ExitCode;

mod app;

use app::{exit_code, report_config_error, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    // Installed first so resolution can emit its debug trace
    setup_tracing();

    let config = match cloci::config::resolve(std::env::args_os().skip(1)) {
        Ok(config) => config,
        Err(e) => return report_config_error(&e),
    };

    tracing::info!("{config}");

    exit_code::SUCCESS
}
