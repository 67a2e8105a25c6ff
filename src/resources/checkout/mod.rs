//! Checkout

/// Wire models.
pub mod models;
/// Service trait and HTTP implementation.
pub mod service;

pub use models::{
    Carrier, CarrierId, CheckoutInfo, CheckoutSelection, CheckoutStep, OrderConfirmation,
};
pub use service::*;
