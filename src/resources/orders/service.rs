//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;

use crate::{
    endpoints::{Controller, QueryParams},
    http::{ApiClient, ClientError, RequestOptions},
    pagination::{ListEnvelope, PaginatedResponse},
    resources::orders::models::{Order, OrderId},
};

#[derive(Debug, Deserialize)]
struct OrderEnvelope {
    order: Order,
}

/// Order history over the `ravenapi` HTTP controllers.
#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    client: ApiClient,
}

impl HttpOrdersService {
    /// Service issuing requests through `client`.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    async fn get_all(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Order>, ClientError> {
        let params = QueryParams::new()
            .with_opt("page", page)
            .with_opt("limit", limit);

        let envelope: ListEnvelope<Order> = self
            .client
            .request(Controller::Orders, &params, RequestOptions::get())
            .await?;

        Ok(envelope.into())
    }

    async fn get_by_id(&self, order: OrderId) -> Result<Order, ClientError> {
        let envelope: OrderEnvelope = self
            .client
            .request(
                Controller::Order,
                &QueryParams::new().with("id", order),
                RequestOptions::get(),
            )
            .await?;

        Ok(envelope.order)
    }
}

/// Order history of the session customer.
#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// One page of past orders, newest first.
    async fn get_all(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Order>, ClientError>;

    /// One order with its lines.
    async fn get_by_id(&self, order: OrderId) -> Result<Order, ClientError>;
}
