//! CLI configuration

use std::time::Duration;

use clap::{Args, Parser, ValueEnum};
use raven::{BackendConfig, ConfigError, ExecutionContext, config::DEFAULT_BASE_URL};

use crate::commands::Command;

/// Raven storefront CLI configuration
#[derive(Debug, Parser)]
#[command(name = "raven-cli", about = "Query a ravenapi storefront backend", long_about = None)]
pub(crate) struct CliConfig {
    /// Backend connection settings.
    #[command(flatten)]
    pub backend: BackendArgs,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Where requests are issued from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ContextArg {
    /// Server side; prefers the internal URL when set.
    Server,

    /// Browser side; always uses the public URL.
    Browser,
}

impl From<ContextArg> for ExecutionContext {
    fn from(context: ContextArg) -> Self {
        match context {
            ContextArg::Server => Self::Server,
            ContextArg::Browser => Self::Browser,
        }
    }
}

/// Backend connection settings.
#[derive(Debug, Args)]
pub(crate) struct BackendArgs {
    /// Public storefront URL
    #[arg(long, env = "NEXT_PUBLIC_PRESTASHOP_URL", default_value = DEFAULT_BASE_URL)]
    pub public_url: String,

    /// Internal URL used for server side requests
    #[arg(long, env = "PRESTASHOP_INTERNAL_URL")]
    pub internal_url: Option<String>,

    /// Webservice key (never sent by the storefront client)
    #[arg(long, env = "PRESTASHOP_WEBSERVICE_KEY", hide_env_values = true)]
    pub webservice_key: Option<String>,

    /// Execution context (server, browser)
    #[arg(long, env = "RAVEN_CONTEXT", value_enum, default_value_t = ContextArg::Server)]
    pub context: ContextArg,

    /// Request timeout in seconds; no timeout when omitted
    #[arg(long, env = "RAVEN_TIMEOUT_SECONDS")]
    pub timeout_seconds: Option<u64>,
}

impl BackendArgs {
    /// Build the library configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either URL is invalid.
    pub(crate) fn to_backend_config(&self) -> Result<BackendConfig, ConfigError> {
        let mut config =
            BackendConfig::new(&self.public_url)?.with_context(self.context.into());

        if let Some(internal_url) = self.internal_url.as_deref().filter(|url| !url.trim().is_empty()) {
            config = config.with_internal_url(internal_url)?;
        }

        if let Some(key) = &self.webservice_key {
            config = config.with_webservice_key(key.clone());
        }

        if let Some(seconds) = self.timeout_seconds {
            config = config.with_timeout(Duration::from_secs(seconds));
        }

        Ok(config)
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
