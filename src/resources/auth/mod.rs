//! Auth

/// Wire models.
pub mod models;
/// Service trait and HTTP implementation.
pub mod service;

pub use models::{Credentials, Registration};
pub use service::*;
