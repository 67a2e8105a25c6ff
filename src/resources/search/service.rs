//! Search service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    endpoints::{Controller, QueryParams},
    http::{ApiClient, ClientError, RequestOptions},
    resources::search::models::SearchResults,
};

/// Autocomplete search over the `ravenapi` HTTP controllers.
#[derive(Debug, Clone)]
pub struct HttpSearchService {
    client: ApiClient,
}

impl HttpSearchService {
    /// Service issuing requests through `client`.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchService for HttpSearchService {
    async fn search(&self, query: &str, limit: Option<u32>) -> Result<SearchResults, ClientError> {
        let params = QueryParams::new()
            .with("q", query)
            .with_opt("limit", limit);

        self.client
            .request(Controller::Search, &params, RequestOptions::get())
            .await
    }
}

/// Autocomplete search.
#[automock]
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Products and typed suggestions matching `query`.
    async fn search(&self, query: &str, limit: Option<u32>) -> Result<SearchResults, ClientError>;
}
