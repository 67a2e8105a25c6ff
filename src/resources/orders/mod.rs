//! Orders

/// Wire models.
pub mod models;
/// Service trait and HTTP implementation.
pub mod service;

pub use models::{Order, OrderId, OrderLine};
pub use service::*;
