use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::Value;
use thiserror::Error;

use crate::domain::checkout::CaptureMode;
use crate::domain::tenant::Environment;

/// Errors from the provider's Merchant API.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status.
    #[error("provider returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The request never completed (DNS, TLS, timeout).
    #[error("provider request failed: {0}")]
    Transport(String),

    /// The provider answered 2xx but the body was not what we expect.
    #[error("unexpected provider response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Upstream failures surface as 502 regardless of the provider's
    /// own status; our API contract is not the provider's.
    pub fn status_code(&self) -> u16 {
        502
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Request to create an order with the provider.
#[derive(Debug, Clone)]
pub struct CreateProviderOrder {
    pub amount_minor: i64,
    pub currency: String,
    pub capture_mode: CaptureMode,
    /// Our order number, echoed back in webhook payloads.
    pub merchant_order_ext_ref: String,
    pub customer_email: Option<String>,
    pub description: Option<String>,
}

/// Provider-side order handle returned on creation.
#[derive(Debug, Clone)]
pub struct ProviderOrder {
    pub id: String,
    /// Public token consumed by the hosted checkout widget.
    pub token: Option<String>,
    pub checkout_url: Option<String>,
}

/// Result of registering a webhook with the provider. The signing
/// secret is returned exactly once, at registration or rotation.
#[derive(Debug)]
pub struct WebhookRegistration {
    pub webhook_id: String,
    pub signing_secret: SecretString,
    pub url: String,
}

/// Outbound port to the provider's Merchant API.
///
/// Credentials are passed per call: every tenant carries its own API
/// key, so the client holds no ambient identity.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    async fn create_order(
        &self,
        env: Environment,
        api_key: &SecretString,
        request: CreateProviderOrder,
    ) -> Result<ProviderOrder, ProviderError>;

    /// Fetch the provider's current view of an order, verbatim.
    async fn retrieve_order(
        &self,
        env: Environment,
        api_key: &SecretString,
        provider_order_id: &str,
    ) -> Result<Value, ProviderError>;

    async fn capture_order(
        &self,
        env: Environment,
        api_key: &SecretString,
        provider_order_id: &str,
        amount_minor: Option<i64>,
    ) -> Result<Value, ProviderError>;

    async fn cancel_order(
        &self,
        env: Environment,
        api_key: &SecretString,
        provider_order_id: &str,
    ) -> Result<Value, ProviderError>;

    async fn refund_order(
        &self,
        env: Environment,
        api_key: &SecretString,
        provider_order_id: &str,
        amount_minor: Option<i64>,
        description: Option<String>,
    ) -> Result<Value, ProviderError>;

    /// Register a webhook endpoint and receive its signing secret.
    async fn register_webhook(
        &self,
        env: Environment,
        api_key: &SecretString,
        url: &str,
        events: &[String],
    ) -> Result<WebhookRegistration, ProviderError>;

    /// Rotate the signing secret of an existing webhook. The old
    /// secret stays valid for `expiration_period` (ISO 8601 duration).
    async fn rotate_signing_secret(
        &self,
        env: Environment,
        api_key: &SecretString,
        webhook_id: &str,
        expiration_period: &str,
    ) -> Result<SecretString, ProviderError>;
}
