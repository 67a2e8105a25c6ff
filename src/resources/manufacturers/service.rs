//! Manufacturers service.

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;

use crate::{
    endpoints::{Controller, QueryParams},
    http::{ApiClient, ClientError, RequestOptions},
    resources::manufacturers::models::{Manufacturer, ManufacturerId},
};

#[derive(Debug, Deserialize)]
struct ManufacturersEnvelope {
    manufacturers: Vec<Manufacturer>,
}

#[derive(Debug, Deserialize)]
struct ManufacturerEnvelope {
    manufacturer: Manufacturer,
}

/// Brands over the `ravenapi` HTTP controllers.
#[derive(Debug, Clone)]
pub struct HttpManufacturersService {
    client: ApiClient,
}

impl HttpManufacturersService {
    /// Service issuing requests through `client`.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ManufacturersService for HttpManufacturersService {
    async fn get_all(&self) -> Result<Vec<Manufacturer>, ClientError> {
        let envelope: ManufacturersEnvelope = self
            .client
            .request(
                Controller::Manufacturers,
                &QueryParams::new(),
                RequestOptions::get(),
            )
            .await?;

        Ok(envelope.manufacturers)
    }

    async fn get_by_id(&self, manufacturer: ManufacturerId) -> Result<Manufacturer, ClientError> {
        let envelope: ManufacturerEnvelope = self
            .client
            .request(
                Controller::Manufacturers,
                &QueryParams::new().with("id", manufacturer),
                RequestOptions::get(),
            )
            .await?;

        Ok(envelope.manufacturer)
    }
}

/// Brand listing.
#[automock]
#[async_trait]
pub trait ManufacturersService: Send + Sync {
    /// Retrieves all manufacturers.
    async fn get_all(&self) -> Result<Vec<Manufacturer>, ClientError>;

    /// Retrieves a single manufacturer.
    async fn get_by_id(&self, manufacturer: ManufacturerId) -> Result<Manufacturer, ClientError>;
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        http::MockTransport,
        test::{client_with, expect_call, ok_json, params_of},
    };

    use super::*;

    #[tokio::test]
    async fn get_all_unwraps_list() -> TestResult {
        let mut transport = MockTransport::new();

        expect_call(
            &mut transport,
            Method::GET,
            "manufacturers",
            ok_json(&json!({
                "manufacturers": [
                    { "id": 5, "name": "Brembo", "nb_products": 40 },
                    { "id": "6", "name": "Valeo" }
                ]
            })),
        );

        let manufacturers = HttpManufacturersService::new(client_with(transport))
            .get_all()
            .await?;

        assert_eq!(manufacturers.len(), 2);
        assert_eq!(
            manufacturers.first().map(|manufacturer| manufacturer.product_count),
            Some(40)
        );

        Ok(())
    }

    #[tokio::test]
    async fn get_by_id_sends_id() -> TestResult {
        let mut transport = MockTransport::new();

        transport
            .expect_send()
            .once()
            .withf(|request| params_of(request).get("id").map(String::as_str) == Some("5"))
            .return_once(|_| {
                Ok(ok_json(&json!({ "manufacturer": { "id": 5, "name": "Brembo" } })))
            });

        let manufacturer = HttpManufacturersService::new(client_with(transport))
            .get_by_id(ManufacturerId::new(5))
            .await?;

        assert_eq!(manufacturer.name, "Brembo");

        Ok(())
    }
}
