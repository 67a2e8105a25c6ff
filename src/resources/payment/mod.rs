//! Payment

/// Wire models.
pub mod models;
/// Service trait and HTTP implementation.
pub mod service;

pub use models::{PaymentMethod, PaymentStatus};
pub use service::*;
