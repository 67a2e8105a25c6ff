//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    endpoints::{Controller, QueryParams},
    http::{ApiClient, ClientError, RequestOptions},
    pagination::{ListEnvelope, PaginatedResponse},
    resources::products::{
        filters::SearchFilters,
        models::{Product, ProductDetails, ProductId},
    },
};

/// Catalog products over the `ravenapi` HTTP controllers.
#[derive(Debug, Clone)]
pub struct HttpProductsService {
    client: ApiClient,
}

impl HttpProductsService {
    /// Service issuing requests through `client`.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductsService for HttpProductsService {
    async fn get_all(
        &self,
        filters: SearchFilters,
    ) -> Result<PaginatedResponse<Product>, ClientError> {
        let envelope: ListEnvelope<Product> = self
            .client
            .request(
                Controller::Products,
                &filters.to_params(),
                RequestOptions::get(),
            )
            .await?;

        Ok(envelope.into())
    }

    async fn get_by_id(&self, product: ProductId) -> Result<Product, ClientError> {
        Ok(self.get_details(product).await?.product)
    }

    async fn get_details(&self, product: ProductId) -> Result<ProductDetails, ClientError> {
        self.client
            .request(
                Controller::Product,
                &QueryParams::new().with("id", product),
                RequestOptions::get(),
            )
            .await
    }

    async fn search(
        &self,
        query: &str,
        filters: SearchFilters,
    ) -> Result<PaginatedResponse<Product>, ClientError> {
        self.get_all(filters.query(query)).await
    }
}

/// Catalog listing, search and product pages.
#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Lists products matching `filters`.
    async fn get_all(
        &self,
        filters: SearchFilters,
    ) -> Result<PaginatedResponse<Product>, ClientError>;

    /// Retrieves a single product, without its related products.
    async fn get_by_id(&self, product: ProductId) -> Result<Product, ClientError>;

    /// Retrieves a product together with its related products.
    async fn get_details(&self, product: ProductId) -> Result<ProductDetails, ClientError>;

    /// Lists products matching a free-text `query` on top of `filters`.
    async fn search(
        &self,
        query: &str,
        filters: SearchFilters,
    ) -> Result<PaginatedResponse<Product>, ClientError>;
}
