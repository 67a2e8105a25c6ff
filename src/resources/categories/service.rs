//! Categories service.

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;

use crate::{
    endpoints::{Controller, QueryParams},
    http::{ApiClient, ClientError, RequestOptions},
    pagination::ListEnvelope,
    resources::{
        categories::models::{Category, CategoryId, CategoryProducts},
        products::{Product, SearchFilters},
    },
};

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct CategoryEnvelope {
    category: Category,
}

#[derive(Debug, Deserialize)]
struct CategoryProductsEnvelope {
    category: Category,

    #[serde(flatten)]
    products: ListEnvelope<Product>,
}

/// Category tree over the `ravenapi` HTTP controllers.
#[derive(Debug, Clone)]
pub struct HttpCategoriesService {
    client: ApiClient,
}

impl HttpCategoriesService {
    /// Service issuing requests through `client`.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn list(&self, format: &'static str) -> Result<Vec<Category>, ClientError> {
        let envelope: CategoriesEnvelope = self
            .client
            .request(
                Controller::Categories,
                &QueryParams::new().with("format", format),
                RequestOptions::get(),
            )
            .await?;

        Ok(envelope.categories)
    }
}

#[async_trait]
impl CategoriesService for HttpCategoriesService {
    async fn get_all(&self) -> Result<Vec<Category>, ClientError> {
        self.list("tree").await
    }

    async fn get_flat(&self) -> Result<Vec<Category>, ClientError> {
        self.list("flat").await
    }

    async fn get_by_id(&self, category: CategoryId) -> Result<Category, ClientError> {
        let envelope: CategoryEnvelope = self
            .client
            .request(
                Controller::Category,
                &QueryParams::new().with("id", category),
                RequestOptions::get(),
            )
            .await?;

        Ok(envelope.category)
    }

    async fn get_products(
        &self,
        category: CategoryId,
        filters: SearchFilters,
    ) -> Result<CategoryProducts, ClientError> {
        let params = filters.to_params().with("id", category);

        let envelope: CategoryProductsEnvelope = self
            .client
            .request(Controller::Category, &params, RequestOptions::get())
            .await?;

        Ok(CategoryProducts {
            category: envelope.category,
            products: envelope.products.into(),
        })
    }
}

/// Category tree and category listings.
#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieves the category tree.
    async fn get_all(&self) -> Result<Vec<Category>, ClientError>;

    /// Retrieves every category as a flat list.
    async fn get_flat(&self) -> Result<Vec<Category>, ClientError>;

    /// Retrieves a single category.
    async fn get_by_id(&self, category: CategoryId) -> Result<Category, ClientError>;

    /// Retrieves a category with one page of its products.
    async fn get_products(
        &self,
        category: CategoryId,
        filters: SearchFilters,
    ) -> Result<CategoryProducts, ClientError>;
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        http::MockTransport,
        test::{client_with, ok_json, page_json, params_of, product_json, targets},
    };

    use super::*;

    fn service(transport: MockTransport) -> HttpCategoriesService {
        HttpCategoriesService::new(client_with(transport))
    }

    #[tokio::test]
    async fn get_all_requests_tree_format() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_send()
            .once()
            .withf(|request| {
                targets(request, &Method::GET, "categories")
                    && params_of(request).get("format").map(String::as_str) == Some("tree")
            })
            .return_once(|_| {
                Ok(ok_json(&json!({
                    "categories": [
                        { "id": 3, "name": "Freinage", "children": [{ "id": 5, "name": "Plaquettes" }] }
                    ]
                })))
            });

        let categories = service(transport).get_all().await?;

        assert_eq!(categories.len(), 1);
        assert_eq!(
            categories.first().map(|category| category.children.len()),
            Some(1)
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_flat_requests_flat_format() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_send()
            .once()
            .withf(|request| params_of(request).get("format").map(String::as_str) == Some("flat"))
            .return_once(|_| {
                Ok(ok_json(&json!({
                    "categories": [{ "id": 3, "name": "Freinage" }, { "id": 5, "name": "Plaquettes", "id_parent": 3 }]
                })))
            });

        let categories = service(transport).get_flat().await?;

        assert_eq!(categories.len(), 2);
        assert!(categories.iter().all(Category::is_leaf));

        Ok(())
    }

    #[tokio::test]
    async fn get_by_id_unwraps_category() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_send()
            .once()
            .withf(|request| {
                targets(request, &Method::GET, "category")
                    && params_of(request).get("id").map(String::as_str) == Some("3")
            })
            .return_once(|_| Ok(ok_json(&json!({ "category": { "id": 3, "name": "Freinage" } }))));

        let category = service(transport).get_by_id(CategoryId::new(3)).await?;

        assert_eq!(category.name, "Freinage");

        Ok(())
    }

    #[tokio::test]
    async fn get_products_combines_category_and_page() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_send()
            .once()
            .withf(|request| {
                let params = params_of(request);

                params.get("id").map(String::as_str) == Some("3")
                    && params.get("page").map(String::as_str) == Some("2")
            })
            .return_once(|_| {
                let mut body = page_json(vec![product_json(11, "Plaquettes")], 13, 2, 12);
                body["category"] = json!({ "id": 3, "name": "Freinage" });

                Ok(ok_json(&body))
            });

        let listing = service(transport)
            .get_products(CategoryId::new(3), SearchFilters::new().page(2))
            .await?;

        assert_eq!(listing.category.id, CategoryId::new(3));
        assert_eq!(listing.products.total_pages, 2);
        assert_eq!(listing.products.data.len(), 1);

        Ok(())
    }
}
