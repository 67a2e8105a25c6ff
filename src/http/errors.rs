//! Request errors.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::http::transport::TransportError;

/// Field-level validation messages keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Key used for messages the backend did not attach to a field.
pub const GENERAL_ERRORS_KEY: &str = "general";

/// Backend-reported failure, normalised from any non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message} (code {code})")]
pub struct ApiError {
    /// HTTP status, or the code supplied by the backend.
    pub code: u16,

    /// Human readable message. Never empty.
    pub message: String,

    /// Per-field messages, empty when the backend sent none.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: FieldErrors,

    /// HTTP status of the failed response.
    #[serde(skip)]
    pub status: u16,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<Value>,

    #[serde(default)]
    message: Option<Value>,

    #[serde(default)]
    errors: Option<Value>,
}

impl ApiError {
    /// Error whose code doubles as its HTTP status.
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors: FieldErrors::new(),
            status: code,
        }
    }

    /// Normalise a failed response.
    ///
    /// A JSON body shaped like `{code, message, errors}` is used as-is, with
    /// the HTTP status filling in a missing code and the status text filling
    /// in a missing message. Anything else falls back to status and status
    /// text.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let fallback_message = status_text(status);

        let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
            return Self::new(status.as_u16(), fallback_message);
        };

        Self {
            code: parsed
                .code
                .as_ref()
                .and_then(code_of)
                .unwrap_or_else(|| status.as_u16()),
            message: parsed
                .message
                .and_then(|message| match message {
                    Value::String(message) if !message.trim().is_empty() => Some(message),
                    _ => None,
                })
                .unwrap_or(fallback_message),
            errors: parsed.errors.map(collect_field_errors).unwrap_or_default(),
            status: status.as_u16(),
        }
    }

    /// Messages for `field`, if any.
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }
}

fn status_text(status: StatusCode) -> String {
    status.canonical_reason().map_or_else(
        || format!("HTTP {}", status.as_u16()),
        ToString::to_string,
    )
}

/// Backend codes arrive as numbers or numeric strings; anything outside the
/// `u16` range is dropped in favour of the HTTP status.
fn code_of(value: &Value) -> Option<u16> {
    match value {
        Value::Number(number) => number.as_u64().and_then(|code| u16::try_from(code).ok()),
        Value::String(code) => code.trim().parse().ok(),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn collect_field_errors(value: Value) -> FieldErrors {
    match value {
        Value::Object(fields) => fields
            .into_iter()
            .map(|(field, messages)| (field, messages_of(messages)))
            .filter(|(_, messages)| !messages.is_empty())
            .collect(),
        Value::Array(_) | Value::String(_) => {
            let messages = messages_of(value);

            if messages.is_empty() {
                FieldErrors::new()
            } else {
                FieldErrors::from([(GENERAL_ERRORS_KEY.to_string(), messages)])
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => FieldErrors::new(),
    }
}

fn messages_of(value: Value) -> Vec<String> {
    match value {
        Value::String(message) => vec![message],
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(message) => Some(message),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Every way a resource operation can fail.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request never produced an HTTP response.
    #[error("transport error")]
    Transport(#[from] TransportError),

    /// A 2xx body did not match the expected shape.
    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),

    /// A request body could not be serialized.
    #[error("failed to encode request body")]
    Encode(#[source] serde_json::Error),
}

impl ClientError {
    /// Backend-reported error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }

    /// HTTP status, if this is a backend error.
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|error| error.status)
    }

    /// Whether the backend answered 401.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED.as_u16())
    }

    /// Whether the backend answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }

    /// Per-field validation messages reported by the backend.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        self.api_error()
            .map(|error| &error.errors)
            .filter(|errors| !errors.is_empty())
    }
}
