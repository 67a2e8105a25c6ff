//! Cart

/// Wire models.
pub mod models;
/// Service trait and HTTP implementation.
pub mod service;

pub use models::{Cart, CartId, CartItem, CartTotals, CartVoucher};
pub use service::*;
