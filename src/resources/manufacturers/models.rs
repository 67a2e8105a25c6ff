//! Manufacturer Models

use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Manufacturer Id
pub type ManufacturerId = TypedId<Manufacturer>;

/// Product brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    /// Manufacturer id.
    pub id: ManufacturerId,
    /// Brand name.
    pub name: String,
    /// URL slug.
    pub link_rewrite: Option<String>,

    /// HTML.
    pub description: Option<String>,
    /// Logo URL.
    pub image: Option<String>,

    /// Active products of this brand.
    #[serde(default, alias = "nb_products")]
    pub product_count: u64,
}
