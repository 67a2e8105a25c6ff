//! Customer service.

use async_trait::async_trait;
use mockall::automock;
use serde::Deserialize;

use crate::{
    endpoints::{Controller, QueryParams},
    http::{ApiClient, ClientError, RequestOptions},
    resources::{
        Action,
        customer::models::{
            Address, AddressId, AddressInput, Customer, PasswordChange, ProfileUpdate,
        },
    },
};

#[derive(Debug, Deserialize)]
struct CustomerEnvelope {
    customer: Customer,
}

#[derive(Debug, Deserialize)]
struct AddressesEnvelope {
    addresses: Vec<Address>,
}

#[derive(Debug, Deserialize)]
struct AddressEnvelope {
    address: Address,
}

/// Profile and address book over the `ravenapi` HTTP controllers.
#[derive(Debug, Clone)]
pub struct HttpCustomerService {
    client: ApiClient,
}

impl HttpCustomerService {
    /// Service issuing requests through `client`.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn address(
        &self,
        params: &QueryParams,
        options: RequestOptions,
    ) -> Result<Address, ClientError> {
        let envelope: AddressEnvelope = self
            .client
            .request(Controller::Addresses, params, options)
            .await?;

        Ok(envelope.address)
    }
}

#[async_trait]
impl CustomerService for HttpCustomerService {
    async fn get_profile(&self) -> Result<Customer, ClientError> {
        let envelope: CustomerEnvelope = self
            .client
            .request(Controller::Customer, &QueryParams::new(), RequestOptions::get())
            .await?;

        Ok(envelope.customer)
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<Customer, ClientError> {
        let envelope: CustomerEnvelope = self
            .client
            .request(
                Controller::Customer,
                &QueryParams::new(),
                RequestOptions::put(&update)?,
            )
            .await?;

        Ok(envelope.customer)
    }

    async fn change_password(&self, change: PasswordChange) -> Result<(), ClientError> {
        self.client
            .execute(
                Controller::Customer,
                &QueryParams::new(),
                RequestOptions::post(&Action::new("change_password", &change))?,
            )
            .await
    }

    async fn get_addresses(&self) -> Result<Vec<Address>, ClientError> {
        let envelope: AddressesEnvelope = self
            .client
            .request(
                Controller::Addresses,
                &QueryParams::new(),
                RequestOptions::get(),
            )
            .await?;

        Ok(envelope.addresses)
    }

    async fn get_address(&self, address: AddressId) -> Result<Address, ClientError> {
        self.address(&QueryParams::new().with("id", address), RequestOptions::get())
            .await
    }

    async fn add_address(&self, input: AddressInput) -> Result<Address, ClientError> {
        self.address(&QueryParams::new(), RequestOptions::post(&input)?)
            .await
    }

    async fn update_address(
        &self,
        address: AddressId,
        input: AddressInput,
    ) -> Result<Address, ClientError> {
        self.address(
            &QueryParams::new().with("id", address),
            RequestOptions::put(&input)?,
        )
        .await
    }

    async fn delete_address(&self, address: AddressId) -> Result<(), ClientError> {
        self.client
            .execute(
                Controller::Addresses,
                &QueryParams::new().with("id", address),
                RequestOptions::delete(),
            )
            .await
    }
}

/// Account and address book of the session customer.
#[automock]
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Profile of the logged-in customer.
    async fn get_profile(&self) -> Result<Customer, ClientError>;

    /// Saves profile changes and returns the stored profile.
    async fn update_profile(&self, update: ProfileUpdate) -> Result<Customer, ClientError>;

    /// Replaces the password.
    async fn change_password(&self, change: PasswordChange) -> Result<(), ClientError>;

    /// Every address of the customer.
    async fn get_addresses(&self) -> Result<Vec<Address>, ClientError>;

    /// One address.
    async fn get_address(&self, address: AddressId) -> Result<Address, ClientError>;

    /// Creates an address.
    async fn add_address(&self, input: AddressInput) -> Result<Address, ClientError>;

    /// Overwrites an address.
    async fn update_address(
        &self,
        address: AddressId,
        input: AddressInput,
    ) -> Result<Address, ClientError>;

    /// Deletes an address. Addresses still referenced by an order are
    /// refused by the backend and come back as [`ClientError::Api`].
    async fn delete_address(&self, address: AddressId) -> Result<(), ClientError>;
}
