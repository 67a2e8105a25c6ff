//! Payment service.
//!
//! Read only: payment capture happens in the backend's payment modules.

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;

use crate::{
    endpoints::{Controller, QueryParams},
    http::{ApiClient, ClientError, RequestOptions},
    resources::{
        orders::OrderId,
        payment::models::{PaymentMethod, PaymentStatus},
    },
};

#[derive(Debug, Deserialize)]
struct MethodsEnvelope {
    payment_methods: Vec<PaymentMethod>,
}

#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    payment: PaymentStatus,
}

/// Payment methods and status over the `ravenapi` HTTP controllers.
#[derive(Debug, Clone)]
pub struct HttpPaymentService {
    client: ApiClient,
}

impl HttpPaymentService {
    /// Service issuing requests through `client`.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentService for HttpPaymentService {
    async fn get_methods(&self) -> Result<Vec<PaymentMethod>, ClientError> {
        let envelope: MethodsEnvelope = self
            .client
            .request(Controller::Payment, &QueryParams::new(), RequestOptions::get())
            .await?;

        Ok(envelope.payment_methods)
    }

    async fn get_status(&self, order: OrderId) -> Result<PaymentStatus, ClientError> {
        let envelope: StatusEnvelope = self
            .client
            .request(
                Controller::Payment,
                &QueryParams::new().with("id_order", order),
                RequestOptions::get(),
            )
            .await?;

        Ok(envelope.payment)
    }
}

/// Payment modules and order payment status.
#[automock]
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Payment modules available for the session cart.
    async fn get_methods(&self) -> Result<Vec<PaymentMethod>, ClientError>;

    /// Payment state of a placed order.
    async fn get_status(&self, order: OrderId) -> Result<PaymentStatus, ClientError>;
}
