//! Categories

/// Wire models.
pub mod models;
/// Service trait and HTTP implementation.
pub mod service;

pub use models::{Category, CategoryId, CategoryProducts};
pub use service::*;
