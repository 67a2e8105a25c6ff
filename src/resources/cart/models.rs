//! Cart Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    ids::TypedId,
    resources::products::{CombinationId, ProductId},
};

/// Cart Id
pub type CartId = TypedId<Cart>;

/// Session cart as computed by the backend.
///
/// Every cart mutation returns the whole cart; callers replace their copy
/// instead of patching it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Absent until the backend creates the cart on first mutation.
    pub id: Option<CartId>,

    /// Lines in insertion order.
    #[serde(default)]
    pub items: Vec<CartItem>,

    /// Applied promo codes.
    #[serde(default)]
    pub vouchers: Vec<CartVoucher>,

    /// Amounts computed by the backend.
    #[serde(default)]
    pub totals: CartTotals,

    /// Quantity count reported by the backend.
    #[serde(default)]
    pub products_count: u32,
}

/// Cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product in this line.
    pub id_product: ProductId,
    /// Combination, when the product has variants.
    pub id_product_attribute: Option<CombinationId>,
    /// Units ordered.
    pub quantity: u32,

    /// Product name.
    #[serde(default)]
    pub name: String,

    /// Unit price, tax included.
    pub price: Decimal,

    /// `price * quantity`, as computed by the backend.
    pub total: Decimal,

    /// Merchant SKU.
    pub reference: Option<String>,
    /// Thumbnail URL.
    pub image: Option<String>,

    /// Combination label, e.g. "Taille : M".
    pub attributes: Option<String>,
    /// URL slug of the product.
    pub link_rewrite: Option<String>,
}

/// Promo code applied to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartVoucher {
    /// Code as typed by the customer.
    pub code: String,
    /// Display name of the cart rule.
    pub name: Option<String>,

    /// Amount taken off the cart.
    #[serde(default)]
    pub reduction: Decimal,
}

/// Cart amounts, tax included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of line totals.
    #[serde(default)]
    pub products: Decimal,

    /// Sum of voucher reductions.
    #[serde(default)]
    pub discounts: Decimal,

    /// Shipping cost for the selected carrier.
    #[serde(default)]
    pub shipping: Decimal,

    /// Amount due.
    #[serde(default)]
    pub total: Decimal,
}

impl Cart {
    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line for `product` in the given combination.
    pub fn item(
        &self,
        product: ProductId,
        combination: Option<CombinationId>,
    ) -> Option<&CartItem> {
        self.items
            .iter()
            .find(|item| item.id_product == product && item.id_product_attribute == combination)
    }

    /// Sum of line quantities.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Whether `code` is applied, ignoring ASCII case.
    pub fn has_voucher(&self, code: &str) -> bool {
        self.vouchers
            .iter()
            .any(|voucher| voucher.code.eq_ignore_ascii_case(code))
    }
}

impl CartTotals {
    /// `total == products - discounts + shipping`.
    pub fn is_consistent(&self) -> bool {
        self.total == self.products - self.discounts + self.shipping
    }
}
