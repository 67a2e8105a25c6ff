//! Customer

/// Wire models.
pub mod models;
/// Service trait and HTTP implementation.
pub mod service;

pub use models::{
    Address, AddressId, AddressInput, Customer, CustomerId, PasswordChange, ProfileUpdate,
};
pub use service::*;
