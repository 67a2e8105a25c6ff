//! Request wrapper shared by every resource service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use reqwest::{
    Method, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, error};

use crate::{
    config::BackendConfig,
    endpoints::{Controller, QueryParams, build_url},
    http::{
        errors::{ApiError, ClientError},
        transport::{HttpRequest, Transport},
    },
};

/// Per-call method, headers and body.
///
/// Headers set here replace the defaults of the same name.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    method: Method,
    headers: HeaderMap,
    body: Option<Value>,
}

impl RequestOptions {
    /// Plain GET.
    pub fn get() -> Self {
        Self::default()
    }

    /// DELETE without a body.
    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            ..Self::default()
        }
    }

    /// POST with `body` encoded as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be serialized.
    pub fn post<B: Serialize + ?Sized>(body: &B) -> Result<Self, ClientError> {
        Self::with_body(Method::POST, body)
    }

    /// PUT with `body` encoded as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be serialized.
    pub fn put<B: Serialize + ?Sized>(body: &B) -> Result<Self, ClientError> {
        Self::with_body(Method::PUT, body)
    }

    fn with_body<B: Serialize + ?Sized>(method: Method, body: &B) -> Result<Self, ClientError> {
        Ok(Self {
            method,
            headers: HeaderMap::new(),
            body: Some(serde_json::to_value(body).map_err(ClientError::Encode)?),
        })
    }

    /// Set a header, replacing the default of the same name.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// HTTP method of this call.
    pub fn method(&self) -> &Method {
        &self.method
    }
}

/// Issues requests against the backend and normalises failures.
///
/// Cheap to clone; clones share the configuration and transport.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<BackendConfig>,
    transport: Arc<dyn Transport>,
}

impl Debug for ApiClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client over a shared configuration and transport.
    pub fn new(config: Arc<BackendConfig>, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Configuration the client was built with.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Send a request and decode the 2xx body as `T`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Api`] for any non-2xx response
    /// - [`ClientError::Transport`] when no response was received
    /// - [`ClientError::Decode`] when the 2xx body is not a valid `T`
    pub async fn request<T: DeserializeOwned>(
        &self,
        controller: Controller,
        params: &QueryParams,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let body = self.send(controller, params, options).await?;

        serde_json::from_str(&body).map_err(ClientError::Decode)
    }

    /// Send a request whose 2xx body carries nothing of interest.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::request`], without decoding.
    pub async fn execute(
        &self,
        controller: Controller,
        params: &QueryParams,
        options: RequestOptions,
    ) -> Result<(), ClientError> {
        self.send(controller, params, options).await.map(drop)
    }

    async fn send(
        &self,
        controller: Controller,
        params: &QueryParams,
        options: RequestOptions,
    ) -> Result<String, ClientError> {
        let url = build_url(self.config.resolve_base_url(), controller, params);

        let mut headers = default_headers();
        headers.extend(options.headers);

        debug!(method = %options.method, %controller, "sending backend request");

        let response = self
            .transport
            .send(HttpRequest {
                method: options.method,
                url,
                headers,
                body: options.body,
            })
            .await?;

        if response.status.is_success() {
            return Ok(response.body);
        }

        let api_error = ApiError::from_response(response.status, &response.body);

        if response.status == StatusCode::UNAUTHORIZED {
            debug!(%controller, "backend request unauthenticated");
        } else {
            error!(
                %controller,
                code = api_error.code,
                "backend request failed: {}",
                api_error.message
            );
        }

        Err(ClientError::Api(api_error))
    }
}

fn application_json() -> HeaderValue {
    HeaderValue::from_static("application/json")
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(CONTENT_TYPE, application_json());
    headers.insert(ACCEPT, application_json());

    headers
}

#[cfg(test)]
mod tests {
    use reqwest::header::AUTHORIZATION;
    use serde::Deserialize;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        http::{HttpResponse, TransportError, transport::MockTransport},
        test::{client_with, expect_api_error, query_of},
    };

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Ping {
        ok: bool,
    }

    #[tokio::test]
    async fn decodes_success_body() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_send()
            .once()
            .withf(|request| {
                let query = query_of(&request.url);

                request.method == Method::GET
                    && query.get("controller").map(String::as_str) == Some("products")
                    && query.get("page").map(String::as_str) == Some("2")
                    && request.headers.get(ACCEPT) == Some(&application_json())
                    && request.headers.get(CONTENT_TYPE) == Some(&application_json())
            })
            .return_once(|_| Ok(HttpResponse::json(StatusCode::OK, &json!({ "ok": true }))));

        let ping: Ping = client_with(transport)
            .request(
                Controller::Products,
                &QueryParams::new().with("page", 2_u32),
                RequestOptions::get(),
            )
            .await?;

        assert_eq!(ping, Ping { ok: true });

        Ok(())
    }

    #[tokio::test]
    async fn caller_headers_override_defaults() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_send()
            .once()
            .withf(|request| {
                request.headers.get(ACCEPT) == Some(&HeaderValue::from_static("text/plain"))
                    && request.headers.get_all(ACCEPT).iter().count() == 1
                    && request.headers.get(AUTHORIZATION).is_some()
                    && request.headers.get(CONTENT_TYPE) == Some(&application_json())
            })
            .return_once(|_| Ok(HttpResponse::new(StatusCode::OK, "{}")));

        client_with(transport)
            .execute(
                Controller::Cart,
                &QueryParams::new(),
                RequestOptions::get()
                    .with_header(ACCEPT, HeaderValue::from_static("text/plain"))
                    .with_header(AUTHORIZATION, HeaderValue::from_static("Basic abc")),
            )
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn post_sends_json_body() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_send()
            .once()
            .withf(|request| {
                request.method == Method::POST
                    && request.body == Some(json!({ "action": "add", "quantity": 1 }))
            })
            .return_once(|_| Ok(HttpResponse::new(StatusCode::OK, "{}")));

        client_with(transport)
            .execute(
                Controller::Cart,
                &QueryParams::new(),
                RequestOptions::post(&json!({ "action": "add", "quantity": 1 }))?,
            )
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn not_found_is_normalised() {
        let mut transport = MockTransport::new();

        transport.expect_send().once().return_once(|_| {
            Ok(HttpResponse::json(
                StatusCode::NOT_FOUND,
                &json!({ "message": "not found" }),
            ))
        });

        let result = client_with(transport)
            .request::<Value>(Controller::Product, &QueryParams::new(), RequestOptions::get())
            .await;

        let error = expect_api_error(result);

        assert_eq!(error.code, 404);
        assert_eq!(error.message, "not found");
    }

    #[tokio::test]
    async fn non_json_failure_falls_back_to_status() {
        let mut transport = MockTransport::new();

        transport.expect_send().once().return_once(|_| {
            Ok(HttpResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Fatal error: Uncaught exception",
            ))
        });

        let result = client_with(transport)
            .request::<Value>(Controller::Products, &QueryParams::new(), RequestOptions::get())
            .await;

        let error = expect_api_error(result);

        assert_eq!(error.code, 500);
        assert!(!error.message.is_empty(), "fallback message must not be empty");
    }

    #[tokio::test]
    async fn unauthorized_is_still_an_error() {
        let mut transport = MockTransport::new();

        transport
            .expect_send()
            .once()
            .return_once(|_| Ok(HttpResponse::new(StatusCode::UNAUTHORIZED, "")));

        let result = client_with(transport)
            .request::<Value>(Controller::Customer, &QueryParams::new(), RequestOptions::get())
            .await;

        assert!(
            result.as_ref().is_err_and(ClientError::is_unauthorized),
            "expected 401, got {result:?}"
        );
    }

    #[tokio::test]
    async fn transport_failures_are_not_api_errors() {
        let mut transport = MockTransport::new();

        transport
            .expect_send()
            .once()
            .return_once(|_| Err(TransportError::Timeout));

        let result = client_with(transport)
            .request::<Value>(Controller::Products, &QueryParams::new(), RequestOptions::get())
            .await;

        assert!(
            matches!(result, Err(ClientError::Transport(TransportError::Timeout))),
            "expected a transport error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_decode_error() {
        let mut transport = MockTransport::new();

        transport
            .expect_send()
            .once()
            .return_once(|_| Ok(HttpResponse::new(StatusCode::OK, "<html>")));

        let result = client_with(transport)
            .request::<Ping>(Controller::Products, &QueryParams::new(), RequestOptions::get())
            .await;

        assert!(
            matches!(result, Err(ClientError::Decode(_))),
            "expected a decode error, got {result:?}"
        );
    }
}
