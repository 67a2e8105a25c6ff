//! HTTP transport seam and its reqwest implementation.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, Method, StatusCode, Url, header::HeaderMap};
use serde_json::Value;
use thiserror::Error;

use crate::config::BackendConfig;

const USER_AGENT: &str = concat!("raven/", env!("CARGO_PKG_VERSION"));

/// A fully prepared request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL, query included.
    pub url: Url,
    /// Merged request headers.
    pub headers: HeaderMap,
    /// JSON body, if any.
    pub body: Option<Value>,
}

/// Raw response: status plus the undecoded body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Response status.
    pub status: StatusCode,
    /// Body text, not yet decoded.
    pub body: String,
}

impl HttpResponse {
    /// Response with a raw text body.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Response carrying `body` serialized as JSON.
    pub fn json(status: StatusCode, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }
}

/// Failures below the HTTP layer: DNS, connection, TLS, timeouts.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS or protocol failure.
    #[error("http transport error")]
    Http(#[source] reqwest::Error),

    /// The configured timeout elapsed.
    #[error("request timed out")]
    Timeout,
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            return Self::Timeout;
        }

        Self::Http(error)
    }
}

/// Sends prepared requests to the backend.
#[automock]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request. Any HTTP status counts as a successful exchange.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// reqwest-backed transport with a session cookie store.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Build a transport for `config`.
    ///
    /// Cookies set by the backend are kept and replayed on every request,
    /// which is how cart and customer sessions are carried. No retries are
    /// performed; the timeout is only applied when configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT);

        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
