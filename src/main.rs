//! `mr-notes` CLI entrypoint.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use mr_notes::{ExtractionError, NotesConfig};
use ortho_config::OrthoConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

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

async fn run() -> Result<(), ExtractionError> {
    let config = load_config()?;
    cli::extract_notes::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ExtractionError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<NotesConfig, ExtractionError> {
    NotesConfig::load().map_err(|error| ExtractionError::Configuration {
        message: error.to_string(),
    })
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the `warn` default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}
