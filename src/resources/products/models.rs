//! Product Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    ids::TypedId,
    resources::{categories::CategoryId, manufacturers::ManufacturerId},
};

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product combination (size, colour...)
#[derive(Debug)]
pub struct Combination;

/// Product combination Id, the backend's `id_product_attribute`.
pub type CombinationId = TypedId<Combination>;

/// How a product reduction is expressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReductionType {
    /// `reduction` is a ratio, e.g. `0.2` for 20%.
    Percentage,
    /// `reduction` is an amount, tax included.
    #[default]
    Amount,
}

/// Product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Backend image id.
    pub id: Option<u64>,
    /// Absolute image URL.
    pub url: String,
    /// Alt text.
    pub legend: Option<String>,
}

/// Catalog product.
///
/// Prices are tax included. When a reduction is active `price` is already
/// reduced and `price_without_reduction` holds the original price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product id.
    pub id: ProductId,
    /// Localized name.
    pub name: String,
    /// Merchant SKU.
    pub reference: Option<String>,
    /// Current price.
    pub price: Decimal,
    /// Price before any reduction.
    pub price_without_reduction: Decimal,

    /// Active reduction, zero when none.
    #[serde(default)]
    pub reduction: Decimal,

    /// How `reduction` is expressed.
    #[serde(default)]
    pub reduction_type: ReductionType,

    /// Units in stock. Negative when oversold.
    #[serde(default)]
    pub quantity: i64,

    /// Whether the product can be added to a cart.
    #[serde(default)]
    pub available_for_order: bool,

    /// Merchant "on sale" flag.
    #[serde(default)]
    pub on_sale: bool,

    /// Main category.
    pub id_category_default: Option<CategoryId>,
    /// Main category name.
    pub category_name: Option<String>,
    /// Brand.
    pub id_manufacturer: Option<ManufacturerId>,
    /// Brand name.
    pub manufacturer_name: Option<String>,
    /// URL slug.
    pub link_rewrite: Option<String>,
    /// Cover image.
    pub cover: Option<ProductImage>,

    /// Gallery images.
    #[serde(default)]
    pub images: Vec<ProductImage>,

    /// HTML.
    pub description_short: Option<String>,

    /// HTML.
    pub description: Option<String>,
}

impl Product {
    /// Whether a reduction is active.
    pub fn has_reduction(&self) -> bool {
        self.reduction > Decimal::ZERO
    }

    /// Amount saved on the original price.
    pub fn savings(&self) -> Decimal {
        (self.price_without_reduction - self.price).max(Decimal::ZERO)
    }

    /// Whether at least one unit is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Reduced products cost less than their original price; others cost
    /// exactly their original price.
    pub fn prices_are_consistent(&self) -> bool {
        if self.has_reduction() {
            self.price < self.price_without_reduction
        } else {
            self.price == self.price_without_reduction
        }
    }

    /// Cover image, falling back to the first gallery image.
    pub fn main_image(&self) -> Option<&ProductImage> {
        self.cover.as_ref().or_else(|| self.images.first())
    }
}

/// Product page payload: the product plus its related products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    /// The product.
    pub product: Product,

    /// Accessories and related products.
    #[serde(default)]
    pub related_products: Vec<Product>,
}
