//! Error types for tenant credential resolution.

use thiserror::Error;

use super::Environment;

/// Errors produced when resolving a tenant's provider credentials.
///
/// These are configuration errors, not authentication errors: a missing
/// signing secret means the tenant was never provisioned for that
/// environment, which is distinct from a webhook failing verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TenantError {
    /// No tenant exists with the given identifier.
    #[error("tenant not found: {0}")]
    NotFound(String),

    /// The webhook signing secret for this environment is absent or empty.
    #[error("no {env} signing secret configured for tenant {tenant_id}")]
    SecretNotConfigured {
        tenant_id: String,
        env: Environment,
    },

    /// The provider API key for this environment is absent or empty.
    #[error("missing {env} secret key for tenant {tenant_id}")]
    ApiKeyNotConfigured {
        tenant_id: String,
        env: Environment,
    },

    /// No webhook has been registered with the provider for this environment.
    #[error("no {env} webhook id for tenant {tenant_id}")]
    WebhookNotRegistered {
        tenant_id: String,
        env: Environment,
    },
}
