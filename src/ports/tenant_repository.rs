use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::tenant::{Environment, Tenant};

use super::StoreError;

/// Persistence port for tenants and their provider credentials.
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Fetch a tenant by id. `Ok(None)` when no such tenant exists.
    async fn find_by_id(&self, tenant_id: &str) -> Result<Option<Tenant>, StoreError>;

    /// Store the webhook registration for one environment: the
    /// provider-assigned webhook id and its signing secret.
    async fn update_webhook_registration(
        &self,
        tenant_id: &str,
        env: Environment,
        webhook_id: &str,
        signing_secret: &SecretString,
    ) -> Result<(), StoreError>;

    /// Replace the signing secret for an already-registered webhook.
    async fn update_signing_secret(
        &self,
        tenant_id: &str,
        env: Environment,
        signing_secret: &SecretString,
    ) -> Result<(), StoreError>;
}
