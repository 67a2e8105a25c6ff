//! Auth service.
//!
//! Sessions are cookie based: nothing is returned or stored here beyond what
//! the transport's cookie store keeps.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{Controller, QueryParams},
    http::{ApiClient, ClientError, RequestOptions},
    resources::{
        auth::models::{Credentials, Registration},
        customer::Customer,
    },
};

#[derive(Debug, Deserialize)]
struct CustomerEnvelope {
    customer: Customer,
}

#[derive(Debug, Deserialize)]
struct SessionEnvelope {
    #[serde(default)]
    customer: Option<Customer>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum AuthAction<'a> {
    Login(&'a Credentials),
    Register(&'a Registration),
    Logout,
}

/// Session authentication over the `ravenapi` HTTP controllers.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: ApiClient,
}

impl HttpAuthService {
    /// Service issuing requests through `client`.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn post(&self, action: &AuthAction<'_>) -> Result<Customer, ClientError> {
        let envelope: CustomerEnvelope = self
            .client
            .request(
                Controller::Auth,
                &QueryParams::new(),
                RequestOptions::post(action)?,
            )
            .await?;

        Ok(envelope.customer)
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, credentials: Credentials) -> Result<Customer, ClientError> {
        self.post(&AuthAction::Login(&credentials)).await
    }

    async fn register(&self, registration: Registration) -> Result<Customer, ClientError> {
        self.post(&AuthAction::Register(&registration)).await
    }

    async fn logout(&self) -> Result<(), ClientError> {
        self.client
            .execute(
                Controller::Auth,
                &QueryParams::new(),
                RequestOptions::post(&AuthAction::Logout)?,
            )
            .await
    }

    async fn get_me(&self) -> Result<Option<Customer>, ClientError> {
        let result = self
            .client
            .request::<SessionEnvelope>(
                Controller::Auth,
                &QueryParams::new().with("action", "me"),
                RequestOptions::get(),
            )
            .await;

        match result {
            Ok(envelope) => Ok(envelope.customer),
            Err(error) if error.is_unauthorized() => Ok(None),
            Err(error) => Err(error),
        }
    }
}

/// Session login, registration and logout.
#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Opens a customer session.
    async fn login(&self, credentials: Credentials) -> Result<Customer, ClientError>;

    /// Creates an account and opens a session for it.
    async fn register(&self, registration: Registration) -> Result<Customer, ClientError>;

    /// Closes the current session.
    async fn logout(&self) -> Result<(), ClientError>;

    /// Customer bound to the current session.
    ///
    /// Anonymous sessions (HTTP 401) resolve to `None`. Every other failure,
    /// including transport errors, is returned as an error.
    async fn get_me(&self) -> Result<Option<Customer>, ClientError>;
}
