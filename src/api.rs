//! Aggregate facade
//!
//! One value holding every resource service, all sharing one configuration
//! and one transport (and therefore one cookie jar).

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use crate::{
    config::BackendConfig,
    http::{ApiClient, ClientError, ReqwestTransport, Transport},
    pagination::PaginatedResponse,
    resources::{
        auth::{AuthService, HttpAuthService},
        cart::{Cart, CartService, HttpCartService},
        categories::{CategoriesService, Category, CategoryId, HttpCategoriesService},
        checkout::{CheckoutService, HttpCheckoutService},
        customer::{CustomerService, HttpCustomerService},
        manufacturers::{HttpManufacturersService, ManufacturersService},
        orders::{HttpOrdersService, OrdersService},
        payment::{HttpPaymentService, PaymentService},
        products::{
            CombinationId, HttpProductsService, Product, ProductId, ProductsService,
            SearchFilters,
        },
        search::{HttpSearchService, SearchService},
    },
};

/// Every resource service behind one value.
///
/// Fields are trait objects so tests can swap in generated mocks.
#[derive(Clone)]
pub struct Api {
    /// Catalog products.
    pub products: Arc<dyn ProductsService>,
    /// Category tree.
    pub categories: Arc<dyn CategoriesService>,
    /// Brands.
    pub manufacturers: Arc<dyn ManufacturersService>,
    /// Session cart.
    pub cart: Arc<dyn CartService>,
    /// Session authentication.
    pub auth: Arc<dyn AuthService>,
    /// Profile and address book.
    pub customer: Arc<dyn CustomerService>,
    /// Order history.
    pub orders: Arc<dyn OrdersService>,
    /// Checkout steps.
    pub checkout: Arc<dyn CheckoutService>,
    /// Payment methods and status.
    pub payment: Arc<dyn PaymentService>,
    /// Autocomplete search.
    pub search: Arc<dyn SearchService>,
}

impl Debug for Api {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Api").finish_non_exhaustive()
    }
}

impl Api {
    /// Build the facade over a reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the HTTP client cannot be built.
    pub fn new(config: BackendConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(&config)?;

        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Build the facade over any transport.
    pub fn with_transport(config: BackendConfig, transport: Arc<dyn Transport>) -> Self {
        let client = ApiClient::new(Arc::new(config), transport);

        Self {
            products: Arc::new(HttpProductsService::new(client.clone())),
            categories: Arc::new(HttpCategoriesService::new(client.clone())),
            manufacturers: Arc::new(HttpManufacturersService::new(client.clone())),
            cart: Arc::new(HttpCartService::new(client.clone())),
            auth: Arc::new(HttpAuthService::new(client.clone())),
            customer: Arc::new(HttpCustomerService::new(client.clone())),
            orders: Arc::new(HttpOrdersService::new(client.clone())),
            checkout: Arc::new(HttpCheckoutService::new(client.clone())),
            payment: Arc::new(HttpPaymentService::new(client.clone())),
            search: Arc::new(HttpSearchService::new(client)),
        }
    }

    /// Alias of `products.get_all`.
    ///
    /// # Errors
    ///
    /// Propagates the underlying service error.
    pub async fn get_products(
        &self,
        filters: SearchFilters,
    ) -> Result<PaginatedResponse<Product>, ClientError> {
        self.products.get_all(filters).await
    }

    /// Alias of `products.get_by_id`.
    ///
    /// # Errors
    ///
    /// Propagates the underlying service error.
    pub async fn get_product(&self, product: ProductId) -> Result<Product, ClientError> {
        self.products.get_by_id(product).await
    }

    /// Alias of `categories.get_all`.
    ///
    /// # Errors
    ///
    /// Propagates the underlying service error.
    pub async fn get_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.categories.get_all().await
    }

    /// Alias of `categories.get_by_id`.
    ///
    /// # Errors
    ///
    /// Propagates the underlying service error.
    pub async fn get_category(&self, category: CategoryId) -> Result<Category, ClientError> {
        self.categories.get_by_id(category).await
    }

    /// Alias of `cart.get`.
    ///
    /// # Errors
    ///
    /// Propagates the underlying service error.
    pub async fn get_cart(&self) -> Result<Cart, ClientError> {
        self.cart.get().await
    }

    /// Alias of `cart.add_item`.
    ///
    /// # Errors
    ///
    /// Propagates the underlying service error.
    pub async fn add_to_cart(
        &self,
        product: ProductId,
        quantity: u32,
        combination: Option<CombinationId>,
    ) -> Result<Cart, ClientError> {
        self.cart.add_item(product, quantity, combination).await
    }

    /// Alias of `products.search`.
    ///
    /// # Errors
    ///
    /// Propagates the underlying service error.
    pub async fn search_products(
        &self,
        query: &str,
        filters: SearchFilters,
    ) -> Result<PaginatedResponse<Product>, ClientError> {
        self.products.search(query, filters).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use reqwest::Method;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        http::{ApiError, MockTransport},
        resources::{
            cart::MockCartService, categories::MockCategoriesService,
            products::MockProductsService,
        },
        test::{cart_json, expect_call, ok_json, product_json, test_config},
    };

    use super::*;

    fn api_with(
        products: MockProductsService,
        categories: MockCategoriesService,
        cart: MockCartService,
    ) -> Api {
        let mut api = Api::with_transport(test_config(), Arc::new(MockTransport::new()));

        api.products = Arc::new(products);
        api.categories = Arc::new(categories);
        api.cart = Arc::new(cart);

        api
    }

    fn product(id: u64) -> Result<Product, serde_json::Error> {
        serde_json::from_value(product_json(id, "Plaquettes"))
    }

    #[tokio::test]
    async fn product_aliases_forward_to_service() -> TestResult {
        let expected = product(42)?;
        let returned = expected.clone();

        let mut products = MockProductsService::new();

        products
            .expect_get_by_id()
            .once()
            .with(eq(ProductId::new(42)))
            .return_once(move |_| Ok(returned));

        products
            .expect_search()
            .once()
            .withf(|query, filters| query == "frein" && filters.page == Some(2))
            .return_once(|_, _| {
                Ok(PaginatedResponse {
                    data: Vec::new(),
                    total: 0,
                    page: 2,
                    limit: 12,
                    total_pages: 0,
                })
            });

        let api = api_with(
            products,
            MockCategoriesService::new(),
            MockCartService::new(),
        );

        assert_eq!(api.get_product(ProductId::new(42)).await?, expected);
        assert!(
            api.search_products("frein", SearchFilters::new().page(2))
                .await?
                .is_empty()
        );

        Ok(())
    }

    #[tokio::test]
    async fn cart_aliases_forward_to_service() -> TestResult {
        let mut cart = MockCartService::new();

        cart.expect_add_item()
            .once()
            .with(eq(ProductId::new(42)), eq(2), eq(None))
            .return_once(|_, _, _| Ok(Cart::default()));

        cart.expect_get().once().return_once(|| Ok(Cart::default()));

        let api = api_with(
            MockProductsService::new(),
            MockCategoriesService::new(),
            cart,
        );

        api.add_to_cart(ProductId::new(42), 2, None).await?;
        api.get_cart().await?;

        Ok(())
    }

    #[tokio::test]
    async fn category_aliases_forward_to_service() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories.expect_get_all().once().return_once(|| Ok(Vec::new()));
        categories
            .expect_get_by_id()
            .once()
            .with(eq(CategoryId::new(3)))
            .return_once(|_| Err(ClientError::Api(ApiError::new(404, "Not Found"))));

        let api = api_with(
            MockProductsService::new(),
            categories,
            MockCartService::new(),
        );

        assert!(api.get_categories().await?.is_empty());
        assert!(
            api.get_category(CategoryId::new(3))
                .await
                .is_err_and(|error| error.is_not_found())
        );

        Ok(())
    }

    #[tokio::test]
    async fn services_share_one_transport() -> TestResult {
        let mut transport = MockTransport::new();

        expect_call(
            &mut transport,
            Method::GET,
            "product",
            ok_json(&json!({ "product": product_json(42, "Plaquettes"), "related_products": [] })),
        );
        expect_call(
            &mut transport,
            Method::GET,
            "cart",
            ok_json(&json!({ "cart": cart_json(vec![]) })),
        );

        let api = Api::with_transport(test_config(), Arc::new(transport));

        assert_eq!(api.get_product(ProductId::new(42)).await?.id, ProductId::new(42));
        assert!(api.get_cart().await?.is_empty());

        Ok(())
    }
}
