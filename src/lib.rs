//! Raven
//!
//! Raven is a typed data-access layer for storefronts backed by the `ravenapi`
//! backend module. It resolves the backend address, builds controller URLs,
//! performs requests with session cookies attached, normalises failures into
//! [`ApiError`] and reshapes responses into strongly typed domain models.

/// Facade over every resource service.
pub mod api;
/// Backend address and connection settings.
pub mod config;
/// Controller names and URL building.
pub mod endpoints;
/// Request pipeline.
pub mod http;
/// Typed numeric ids.
pub mod ids;
/// Paged list responses.
pub mod pagination;
/// Typed resource services and models.
pub mod resources;

#[cfg(test)]
mod test;

pub use api::Api;
pub use config::{BackendConfig, ConfigError, ExecutionContext};
pub use http::{ApiClient, ApiError, ClientError};
