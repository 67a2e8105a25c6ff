//! Products

/// Listing filters.
pub mod filters;
/// Wire models.
pub mod models;
/// Service trait and HTTP implementation.
pub mod service;

pub use filters::{SearchFilters, SortKey};
pub use models::{Combination, CombinationId, Product, ProductDetails, ProductId, ProductImage};
pub use service::*;
