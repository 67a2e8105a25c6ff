//! Raven storefront CLI

use std::{error::Error as _, process::ExitCode};

use raven::{Api, ClientError, ConfigError};
use thiserror::Error;
use tracing::debug;

mod commands;
mod config;
mod logging;

use crate::config::CliConfig;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("invalid backend configuration")]
    Config(#[from] ConfigError),

    #[error("failed to initialise logging")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("failed to render output")]
    Output(#[source] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(error) => {
            // Help and version requests also land here.
            _ = error.print();

            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(error) = run(config).await {
        #[expect(
            clippy::print_stderr,
            reason = "errors are reported on stderr even when logging is off"
        )]
        {
            eprintln!("error: {error}");

            let mut source = error.source();

            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
        }

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run(config: CliConfig) -> Result<(), CliError> {
    logging::init_subscriber(&config.logging)?;

    let backend = config.backend.to_backend_config()?;

    debug!(base_url = %backend.resolve_base_url(), "using backend");

    let api = Api::new(backend)?;

    commands::run(&api, config.command).await
}
