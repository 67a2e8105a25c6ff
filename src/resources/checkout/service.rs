//! Checkout service.
//!
//! Three independent calls: read the options, persist a step, validate. No
//! step ordering is enforced here.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{Controller, QueryParams},
    http::{ApiClient, ClientError, RequestOptions},
    resources::{
        Action,
        checkout::models::{CheckoutInfo, CheckoutStep, OrderConfirmation},
    },
};

#[derive(Debug, Serialize)]
struct Validation<'a> {
    payment_module: &'a str,
    terms_accepted: bool,
}

#[derive(Debug, Deserialize)]
struct ConfirmationEnvelope {
    order: OrderConfirmation,
}

/// Checkout steps over the `ravenapi` HTTP controllers.
#[derive(Debug, Clone)]
pub struct HttpCheckoutService {
    client: ApiClient,
}

impl HttpCheckoutService {
    /// Service issuing requests through `client`.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CheckoutService for HttpCheckoutService {
    async fn get_info(&self) -> Result<CheckoutInfo, ClientError> {
        self.client
            .request(Controller::Checkout, &QueryParams::new(), RequestOptions::get())
            .await
    }

    async fn update_step(&self, step: CheckoutStep) -> Result<CheckoutInfo, ClientError> {
        self.client
            .request(
                Controller::Checkout,
                &QueryParams::new(),
                RequestOptions::post(&Action::new("update_step", &step))?,
            )
            .await
    }

    async fn validate(
        &self,
        payment_module: &str,
        terms_accepted: bool,
    ) -> Result<OrderConfirmation, ClientError> {
        let validation = Validation {
            payment_module,
            terms_accepted,
        };

        let envelope: ConfirmationEnvelope = self
            .client
            .request(
                Controller::Checkout,
                &QueryParams::new(),
                RequestOptions::post(&Action::new("validate", &validation))?,
            )
            .await?;

        Ok(envelope.order)
    }
}

/// Checkout reads, step updates and order validation.
#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Addresses, carriers, payment options and current selections.
    async fn get_info(&self) -> Result<CheckoutInfo, ClientError>;

    /// Persists one step's selections and returns the refreshed state.
    async fn update_step(&self, step: CheckoutStep) -> Result<CheckoutInfo, ClientError>;

    /// Places the order with `payment_module`.
    ///
    /// `terms_accepted` is forwarded as is; refusing unaccepted terms is the
    /// backend's call.
    async fn validate(
        &self,
        payment_module: &str,
        terms_accepted: bool,
    ) -> Result<OrderConfirmation, ClientError>;
}
