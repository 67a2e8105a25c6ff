//! Search
//!
//! Lightweight autocomplete endpoint, distinct from product listing search.

/// Wire models.
pub mod models;
/// Service trait and HTTP implementation.
pub mod service;

pub use models::{SearchProduct, SearchResults, Suggestion, SuggestionKind};
pub use service::*;
