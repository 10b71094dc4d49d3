//! Error types for the checkout bounded context.

use thiserror::Error;

use crate::domain::tenant::TenantError;
use crate::ports::StoreError;

/// Errors raised while ingesting a webhook delivery.
///
/// The HTTP layer maps these to status codes; `is_retryable` tells the
/// provider whether redelivery can help. Signature and configuration
/// failures are permanent, storage failures are not.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("tenant not found: {0}")]
    TenantNotFound(String),

    #[error("webhook secret not configured for tenant {tenant_id} in {env}")]
    SecretNotConfigured { tenant_id: String, env: String },

    #[error("invalid signature")]
    InvalidSignature,

    #[error("malformed webhook payload: {0}")]
    MalformedPayload(String),

    #[error("storage failure: {0}")]
    Store(#[from] StoreError),
}

impl WebhookError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::TenantNotFound(_) => 404,
            Self::SecretNotConfigured { .. } => 400,
            Self::InvalidSignature => 400,
            Self::MalformedPayload(_) => 400,
            Self::Store(_) => 500,
        }
    }

    /// Whether the provider's at-least-once redelivery could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

impl From<TenantError> for WebhookError {
    fn from(err: TenantError) -> Self {
        match err {
            TenantError::NotFound(id) => Self::TenantNotFound(id),
            TenantError::SecretNotConfigured { tenant_id, env } => Self::SecretNotConfigured {
                tenant_id,
                env: env.to_string(),
            },
            // API key / webhook registration gaps surface on the webhook
            // path only as a missing secret.
            TenantError::ApiKeyNotConfigured { tenant_id, env }
            | TenantError::WebhookNotRegistered { tenant_id, env } => Self::SecretNotConfigured {
                tenant_id,
                env: env.to_string(),
            },
        }
    }
}

/// Errors raised by checkout creation, order actions and admin
/// credential management.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Tenant(#[from] TenantError),

    #[error("order not found: {0}")]
    OrderNotFound(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("provider request failed: {0}")]
    Provider(#[from] crate::ports::ProviderError),

    #[error("storage failure: {0}")]
    Store(#[from] StoreError),
}

impl CheckoutError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Tenant(TenantError::NotFound(_)) => 404,
            Self::Tenant(_) => 400,
            Self::OrderNotFound(_) => 404,
            Self::InvalidRequest(_) => 400,
            Self::Provider(err) => err.status_code(),
            Self::Store(_) => 500,
        }
    }
}
