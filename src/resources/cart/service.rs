//! Cart service.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{Controller, QueryParams},
    http::{ApiClient, ClientError, RequestOptions},
    resources::{
        cart::models::Cart,
        products::{CombinationId, ProductId},
    },
};

#[derive(Debug, Deserialize)]
struct CartEnvelope {
    cart: Cart,
}

#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum CartAction<'a> {
    Add {
        id_product: ProductId,
        #[serde(skip_serializing_if = "Option::is_none")]
        id_product_attribute: Option<CombinationId>,
        quantity: u32,
    },
    Update {
        id_product: ProductId,
        #[serde(skip_serializing_if = "Option::is_none")]
        id_product_attribute: Option<CombinationId>,
        quantity: u32,
    },
    Remove {
        id_product: ProductId,
        #[serde(skip_serializing_if = "Option::is_none")]
        id_product_attribute: Option<CombinationId>,
    },
    ApplyPromo {
        code: &'a str,
    },
    RemovePromo {
        code: &'a str,
    },
    Clear,
}

/// Session cart over the `ravenapi` HTTP controllers.
#[derive(Debug, Clone)]
pub struct HttpCartService {
    client: ApiClient,
}

impl HttpCartService {
    /// Service issuing requests through `client`.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn mutate(&self, action: CartAction<'_>) -> Result<Cart, ClientError> {
        let envelope: CartEnvelope = self
            .client
            .request(
                Controller::Cart,
                &QueryParams::new(),
                RequestOptions::post(&action)?,
            )
            .await?;

        Ok(envelope.cart)
    }
}

#[async_trait]
impl CartService for HttpCartService {
    async fn get(&self) -> Result<Cart, ClientError> {
        let envelope: CartEnvelope = self
            .client
            .request(Controller::Cart, &QueryParams::new(), RequestOptions::get())
            .await?;

        Ok(envelope.cart)
    }

    async fn add_item(
        &self,
        product: ProductId,
        quantity: u32,
        combination: Option<CombinationId>,
    ) -> Result<Cart, ClientError> {
        self.mutate(CartAction::Add {
            id_product: product,
            id_product_attribute: combination,
            quantity,
        })
        .await
    }

    async fn update_item(
        &self,
        product: ProductId,
        quantity: u32,
        combination: Option<CombinationId>,
    ) -> Result<Cart, ClientError> {
        self.mutate(CartAction::Update {
            id_product: product,
            id_product_attribute: combination,
            quantity,
        })
        .await
    }

    async fn remove_item(
        &self,
        product: ProductId,
        combination: Option<CombinationId>,
    ) -> Result<Cart, ClientError> {
        self.mutate(CartAction::Remove {
            id_product: product,
            id_product_attribute: combination,
        })
        .await
    }

    async fn apply_promo_code(&self, code: &str) -> Result<Cart, ClientError> {
        self.mutate(CartAction::ApplyPromo { code }).await
    }

    async fn remove_promo_code(&self, code: &str) -> Result<Cart, ClientError> {
        self.mutate(CartAction::RemovePromo { code }).await
    }

    async fn clear(&self) -> Result<Cart, ClientError> {
        self.mutate(CartAction::Clear).await
    }
}

/// Session cart operations.
///
/// Every mutation answers with the complete cart. Concurrent mutations are
/// not serialized here: the last response received wins.
#[automock]
#[async_trait]
pub trait CartService: Send + Sync {
    /// Retrieves the session cart.
    async fn get(&self) -> Result<Cart, ClientError>;

    /// Adds `quantity` units of a product, optionally in a given combination.
    async fn add_item(
        &self,
        product: ProductId,
        quantity: u32,
        combination: Option<CombinationId>,
    ) -> Result<Cart, ClientError>;

    /// Sets the quantity of an existing line.
    async fn update_item(
        &self,
        product: ProductId,
        quantity: u32,
        combination: Option<CombinationId>,
    ) -> Result<Cart, ClientError>;

    /// Removes a line.
    async fn remove_item(
        &self,
        product: ProductId,
        combination: Option<CombinationId>,
    ) -> Result<Cart, ClientError>;

    /// Applies a promo code.
    async fn apply_promo_code(&self, code: &str) -> Result<Cart, ClientError>;

    /// Removes a previously applied promo code.
    async fn remove_promo_code(&self, code: &str) -> Result<Cart, ClientError>;

    /// Empties the cart.
    async fn clear(&self) -> Result<Cart, ClientError>;
}
