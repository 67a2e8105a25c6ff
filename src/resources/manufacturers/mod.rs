//! Manufacturers

/// Wire models.
pub mod models;
/// Service trait and HTTP implementation.
pub mod service;

pub use models::{Manufacturer, ManufacturerId};
pub use service::*;
