//! Backend Configuration

use std::{
    env,
    fmt::{Debug, Formatter, Result as FmtResult},
    str::FromStr,
    time::Duration,
};

use reqwest::Url;
use thiserror::Error;

/// Public backend base URL, reachable from browsers.
pub const PUBLIC_URL_VAR: &str = "NEXT_PUBLIC_PRESTASHOP_URL";

/// Server-side only base URL override (private network address).
pub const INTERNAL_URL_VAR: &str = "PRESTASHOP_INTERNAL_URL";

/// Webservice key. Reserved; never sent by the request pipeline.
pub const WEBSERVICE_KEY_VAR: &str = "PRESTASHOP_WEBSERVICE_KEY";

/// Base URL used when no public URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

type UrlParseError = <Url as FromStr>::Err;

/// Backend configuration could not be built.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A base URL did not parse.
    #[error("invalid backend url `{url}`")]
    InvalidUrl {
        /// The rejected value.
        url: String,
        /// Parser failure.
        #[source]
        source: UrlParseError,
    },

    /// A base URL used a scheme other than http or https.
    #[error("backend url `{0}` must use http or https")]
    UnsupportedScheme(String),
}

/// Where the calling code runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Server-side process; may use the internal backend address.
    #[default]
    Server,

    /// Browser-facing context; always uses the public address.
    Browser,
}

/// Backend connection settings, constructed once and shared by reference.
#[derive(Clone)]
pub struct BackendConfig {
    public_url: Url,
    internal_url: Option<Url>,
    context: ExecutionContext,
    webservice_key: Option<String>,
    timeout: Option<Duration>,
}

impl Debug for BackendConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("BackendConfig")
            .field("public_url", &self.public_url.as_str())
            .field("internal_url", &self.internal_url.as_ref().map(Url::as_str))
            .field("context", &self.context)
            .field("webservice_key", &self.webservice_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl BackendConfig {
    /// Create a configuration pointing at `public_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or is not http(s).
    pub fn new(public_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            public_url: parse_base_url(public_url)?,
            internal_url: None,
            context: ExecutionContext::default(),
            webservice_key: None,
            timeout: None,
        })
    }

    /// Read the backend variables through `lookup`.
    ///
    /// Blank values count as unset. Without a public URL the
    /// [`DEFAULT_BASE_URL`] is used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured URL is invalid.
    pub fn from_lookup<F>(context: ExecutionContext, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let public_url = read(PUBLIC_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut config = Self::new(&public_url)?.with_context(context);

        if let Some(internal_url) = read(INTERNAL_URL_VAR) {
            config = config.with_internal_url(&internal_url)?;
        }

        if let Some(key) = read(WEBSERVICE_KEY_VAR) {
            config = config.with_webservice_key(key);
        }

        Ok(config)
    }

    /// Read the backend variables from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured URL is invalid.
    pub fn from_env(context: ExecutionContext) -> Result<Self, ConfigError> {
        Self::from_lookup(context, |name| env::var(name).ok())
    }

    /// Set the server-side base URL override.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or is not http(s).
    pub fn with_internal_url(mut self, internal_url: &str) -> Result<Self, ConfigError> {
        self.internal_url = Some(parse_base_url(internal_url)?);

        Ok(self)
    }

    /// Set the execution context used to pick the base URL.
    #[must_use]
    pub fn with_context(mut self, context: ExecutionContext) -> Self {
        self.context = context;
        self
    }

    /// Keep the webservice key. It is never sent by the request pipeline.
    #[must_use]
    pub fn with_webservice_key(mut self, key: impl Into<String>) -> Self {
        self.webservice_key = Some(key.into());
        self
    }

    /// Bound every request to `timeout`. No timeout is applied by default.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL for the current execution context.
    ///
    /// Server contexts prefer the internal URL when one is configured;
    /// everything else uses the public URL.
    pub fn resolve_base_url(&self) -> &Url {
        match (self.context, &self.internal_url) {
            (ExecutionContext::Server, Some(internal)) => internal,
            _ => &self.public_url,
        }
    }

    /// Browser-reachable base URL.
    pub fn public_url(&self) -> &Url {
        &self.public_url
    }

    /// Server-side override, if any.
    pub fn internal_url(&self) -> Option<&Url> {
        self.internal_url.as_ref()
    }

    /// Current execution context.
    pub fn context(&self) -> ExecutionContext {
        self.context
    }

    /// Reserved webservice key.
    pub fn webservice_key(&self) -> Option<&str> {
        self.webservice_key.as_deref()
    }

    /// Per-request timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(raw.to_string()));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use testresult::TestResult;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();

        move |name| vars.get(name).cloned()
    }

    #[test]
    fn server_context_prefers_internal_url() -> TestResult {
        let config = BackendConfig::from_lookup(
            ExecutionContext::Server,
            lookup_from(&[
                (PUBLIC_URL_VAR, "https://shop.example"),
                (INTERNAL_URL_VAR, "http://backend.internal:8080"),
            ]),
        )?;

        assert_eq!(
            config.resolve_base_url().as_str(),
            "http://backend.internal:8080/"
        );

        Ok(())
    }

    #[test]
    fn browser_context_ignores_internal_url() -> TestResult {
        let config = BackendConfig::from_lookup(
            ExecutionContext::Browser,
            lookup_from(&[
                (PUBLIC_URL_VAR, "https://shop.example"),
                (INTERNAL_URL_VAR, "http://backend.internal:8080"),
            ]),
        )?;

        assert_eq!(config.resolve_base_url().as_str(), "https://shop.example/");

        Ok(())
    }

    #[test]
    fn server_context_without_internal_url_uses_public_url() -> TestResult {
        let config = BackendConfig::from_lookup(
            ExecutionContext::Server,
            lookup_from(&[(PUBLIC_URL_VAR, "https://shop.example")]),
        )?;

        assert_eq!(config.resolve_base_url().as_str(), "https://shop.example/");

        Ok(())
    }

    #[test]
    fn falls_back_to_default_url() -> TestResult {
        let config = BackendConfig::from_lookup(
            ExecutionContext::Server,
            lookup_from(&[(PUBLIC_URL_VAR, "   "), (INTERNAL_URL_VAR, "")]),
        )?;

        assert_eq!(config.resolve_base_url().as_str(), "http://localhost:8080/");
        assert!(config.internal_url().is_none());

        Ok(())
    }

    #[test]
    fn webservice_key_is_kept_but_optional() -> TestResult {
        let config = BackendConfig::from_lookup(
            ExecutionContext::Server,
            lookup_from(&[(WEBSERVICE_KEY_VAR, "secret")]),
        )?;

        assert_eq!(config.webservice_key(), Some("secret"));

        Ok(())
    }

    #[test]
    fn rejects_invalid_urls() {
        assert!(matches!(
            BackendConfig::new("not a url"),
            Err(ConfigError::InvalidUrl { .. })
        ));

        assert!(matches!(
            BackendConfig::new("ftp://shop.example"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn timeout_is_unset_by_default() -> TestResult {
        let config = BackendConfig::new("https://shop.example")?;

        assert!(config.timeout().is_none());
        assert_eq!(
            config
                .with_timeout(Duration::from_secs(5))
                .timeout(),
            Some(Duration::from_secs(5))
        );

        Ok(())
    }

    #[test]
    fn debug_output_hides_webservice_key() -> TestResult {
        let config = BackendConfig::new("https://shop.example")?.with_webservice_key("s3cret-key");

        let rendered = format!("{config:?}");

        assert!(!rendered.contains("s3cret-key"), "{rendered}");
        assert!(rendered.contains("https://shop.example/"), "{rendered}");

        Ok(())
    }
}
