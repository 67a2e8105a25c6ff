//! Resource services
//!
//! One service per backend resource family. Each service is a trait with an
//! HTTP implementation built on [`crate::http::ApiClient`] and a generated
//! mock for tests.

/// Login, registration and session customer.
pub mod auth;
/// Session cart.
pub mod cart;
/// Category tree.
pub mod categories;
/// Checkout steps and validation.
pub mod checkout;
/// Profile and address book.
pub mod customer;
/// Brands.
pub mod manufacturers;
/// Order history.
pub mod orders;
/// Payment methods and status.
pub mod payment;
/// Catalog products and listing filters.
pub mod products;
/// Autocomplete search.
pub mod search;

use serde::Serialize;

/// Request body carrying an `action` discriminator next to its payload.
#[derive(Debug, Serialize)]
pub(crate) struct Action<'a, T> {
    action: &'static str,

    #[serde(flatten)]
    payload: &'a T,
}

impl<'a, T: Serialize> Action<'a, T> {
    pub(crate) fn new(action: &'static str, payload: &'a T) -> Self {
        Self { action, payload }
    }
}
