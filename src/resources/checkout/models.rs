//! Checkout Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    ids::TypedId,
    resources::{
        cart::Cart,
        customer::{Address, AddressId},
        orders::OrderId,
        payment::PaymentMethod,
    },
};

/// Carrier Id
pub type CarrierId = TypedId<Carrier>;

/// Delivery option for the session cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carrier {
    /// Carrier id.
    pub id: CarrierId,
    /// Display name.
    pub name: String,

    /// Delivery delay label, e.g. "48h".
    pub delay: Option<String>,

    /// Shipping price for the session cart, tax included.
    pub price: Decimal,

    /// Whether shipping is free for this cart.
    #[serde(default)]
    pub is_free: bool,

    /// Logo URL.
    pub logo: Option<String>,
}

/// Choices already persisted for the session cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSelection {
    /// Delivery address.
    pub id_address_delivery: Option<AddressId>,
    /// Invoice address.
    pub id_address_invoice: Option<AddressId>,
    /// Chosen carrier.
    pub id_carrier: Option<CarrierId>,
    /// Chosen payment module.
    pub payment_module: Option<String>,
}

/// Everything the checkout pages need in one read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutInfo {
    /// Customer addresses.
    #[serde(default)]
    pub addresses: Vec<Address>,

    /// Carriers available for the delivery address.
    #[serde(default)]
    pub carriers: Vec<Carrier>,

    /// Payment modules enabled for the cart.
    #[serde(default)]
    pub payment_options: Vec<PaymentMethod>,

    /// Choices persisted so far.
    #[serde(default)]
    pub selection: CheckoutSelection,

    /// Session cart, when the backend includes it.
    pub cart: Option<Cart>,
}

impl CheckoutInfo {
    /// Carrier offered under `carrier`.
    pub fn carrier(&self, carrier: CarrierId) -> Option<&Carrier> {
        self.carriers.iter().find(|candidate| candidate.id == carrier)
    }

    /// Carrier currently selected, if it is still offered.
    pub fn selected_carrier(&self) -> Option<&Carrier> {
        self.selection.id_carrier.and_then(|carrier| self.carrier(carrier))
    }

    /// Whether addresses and a carrier have been chosen.
    pub fn is_ready_for_payment(&self) -> bool {
        self.selection.id_address_delivery.is_some()
            && self.selection.id_address_invoice.is_some()
            && self.selection.id_carrier.is_some()
    }
}

/// One checkout step's selections.
///
/// Steps are not ordered here; the caller sequences them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum CheckoutStep {
    /// Delivery and invoice addresses.
    Addresses {
        /// Where the parcel goes.
        id_address_delivery: AddressId,
        /// Billing address.
        id_address_invoice: AddressId,
    },
    /// Carrier choice.
    Delivery {
        /// Chosen carrier.
        id_carrier: CarrierId,

        /// Free-text note for the merchant.
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl CheckoutStep {
    /// Same address for delivery and invoicing.
    pub fn single_address(address: AddressId) -> Self {
        Self::Addresses {
            id_address_delivery: address,
            id_address_invoice: address,
        }
    }
}

/// Order placed by a successful validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Created order.
    pub id_order: OrderId,
    /// Order reference shown to the customer.
    pub reference: String,

    /// Set when the payment module needs an off-site redirect.
    pub redirect_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn steps_carry_their_name() -> TestResult {
        assert_eq!(
            serde_json::to_value(CheckoutStep::single_address(AddressId::new(4)))?,
            json!({ "step": "addresses", "id_address_delivery": 4, "id_address_invoice": 4 })
        );

        assert_eq!(
            serde_json::to_value(CheckoutStep::Delivery {
                id_carrier: CarrierId::new(2),
                message: None,
            })?,
            json!({ "step": "delivery", "id_carrier": 2 })
        );

        Ok(())
    }

    #[test]
    fn selected_carrier_resolves_against_offer() -> TestResult {
        let info: CheckoutInfo = serde_json::from_value(json!({
            "carriers": [
                { "id": 1, "name": "Retrait magasin", "price": 0, "is_free": true },
                { "id": 2, "name": "Colissimo", "delay": "48h", "price": "6.90" }
            ],
            "selection": { "id_address_delivery": 4, "id_address_invoice": 4, "id_carrier": 2 }
        }))?;

        assert_eq!(
            info.selected_carrier().map(|carrier| carrier.name.as_str()),
            Some("Colissimo")
        );
        assert!(info.is_ready_for_payment());
        assert!(info.cart.is_none());

        Ok(())
    }
}
