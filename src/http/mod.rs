//! HTTP request pipeline

/// Request wrapper and per-call options.
pub mod client;
/// Normalised failures.
pub mod errors;
/// Transport seam and reqwest implementation.
pub mod transport;

pub use client::{ApiClient, RequestOptions};
pub use errors::{ApiError, ClientError};
pub use transport::{
    HttpRequest, HttpResponse, MockTransport, ReqwestTransport, Transport, TransportError,
};
