//! Payment Models

use serde::{Deserialize, Serialize};

use crate::resources::orders::OrderId;

/// Installed payment module offered at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Module name, passed back to `checkout.validate`.
    pub module: String,
    /// Display name.
    pub name: String,
    /// Short description shown at checkout.
    pub description: Option<String>,
    /// Logo URL.
    pub logo: Option<String>,
}

/// Payment state of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStatus {
    /// Order id.
    pub id_order: OrderId,
    /// Order reference.
    pub reference: String,

    /// Whether payment has been received.
    #[serde(default)]
    pub paid: bool,

    /// Localized order state label.
    pub state: Option<String>,
}
