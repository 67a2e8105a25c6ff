//! Order Models

use jiff::civil::DateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    ids::TypedId,
    resources::products::{CombinationId, ProductId},
};

/// Order Id
pub type OrderId = TypedId<Order>;

/// Past purchase. Read only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order id.
    pub id: OrderId,
    /// Order reference shown to the customer.
    pub reference: String,

    /// Backend order state id.
    pub id_order_state: u32,

    /// Localized state label, e.g. "Livré".
    #[serde(default)]
    pub state_name: String,

    /// Amount charged, tax included.
    pub total_paid: Decimal,

    /// Products subtotal, tax included.
    #[serde(default)]
    pub total_products: Decimal,

    /// Shipping cost, tax included.
    #[serde(default)]
    pub total_shipping: Decimal,

    /// Payment method label.
    pub payment: Option<String>,

    /// Shop-local time, `YYYY-MM-DD HH:MM:SS`.
    pub date_add: DateTime,

    /// Only present on the detail endpoint.
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

impl Order {
    /// Sum of line quantities.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|line| u64::from(line.product_quantity))
            .sum()
    }
}

/// Ordered product line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Ordered product.
    pub id_product: ProductId,
    /// Combination, when the product has variants.
    pub id_product_attribute: Option<CombinationId>,
    /// Product name at order time.
    pub product_name: String,
    /// Merchant SKU at order time.
    pub product_reference: Option<String>,
    /// Units ordered.
    pub product_quantity: u32,
    /// Unit price, tax included.
    pub unit_price: Decimal,
    /// Line total, tax included.
    pub total_price: Decimal,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_backend_dates_and_amounts() -> TestResult {
        let order: Order = serde_json::from_value(json!({
            "id": 310,
            "reference": "XKBKNABJK",
            "id_order_state": 5,
            "state_name": "Livré",
            "total_paid": "61.80",
            "total_products": 49.8,
            "total_shipping": 12,
            "payment": "Carte bancaire",
            "date_add": "2024-03-01 10:15:00",
            "items": [{
                "id_product": 42,
                "id_product_attribute": 0,
                "product_name": "Plaquettes",
                "product_quantity": 2,
                "unit_price": 24.9,
                "total_price": 49.8
            }]
        }))?;

        assert_eq!(order.date_add, jiff::civil::date(2024, 3, 1).at(10, 15, 0, 0));
        assert_eq!(order.total_paid, Decimal::new(6180, 2));
        assert_eq!(order.item_count(), 2);

        Ok(())
    }

    #[test]
    fn item_count_does_not_wrap_on_bulk_lines() -> TestResult {
        let line = json!({
            "id_product": 42,
            "id_product_attribute": null,
            "product_name": "Vis",
            "product_quantity": u32::MAX,
            "unit_price": 0,
            "total_price": 0
        });

        let order: Order = serde_json::from_value(json!({
            "id": 311,
            "reference": "BULK",
            "id_order_state": 2,
            "total_paid": 0,
            "payment": null,
            "date_add": "2024-03-02 08:00:00",
            "items": [line.clone(), line]
        }))?;

        assert_eq!(order.item_count(), u64::from(u32::MAX) * 2);

        Ok(())
    }
}
