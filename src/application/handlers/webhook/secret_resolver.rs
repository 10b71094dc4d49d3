//! Per-tenant webhook secret resolution.

use std::sync::Arc;

use secrecy::SecretString;

use crate::domain::checkout::WebhookError;
use crate::domain::tenant::{Environment, Tenant};
use crate::ports::TenantRepository;

/// Resolves the signing secret for a (tenant, environment) pair.
///
/// Resolution is strict: the secret must exist for the exact
/// environment the delivery targets. A live delivery never verifies
/// against a sandbox secret, or vice versa.
pub struct TenantSecretResolver {
    tenants: Arc<dyn TenantRepository>,
}

impl TenantSecretResolver {
    pub fn new(tenants: Arc<dyn TenantRepository>) -> Self {
        Self { tenants }
    }

    pub async fn resolve(
        &self,
        tenant_id: &str,
        env: Environment,
    ) -> Result<(Tenant, SecretString), WebhookError> {
        let tenant = self
            .tenants
            .find_by_id(tenant_id)
            .await?
            .ok_or_else(|| WebhookError::TenantNotFound(tenant_id.to_string()))?;

        let secret = tenant.signing_secret(env)?.clone();
        Ok((tenant, secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::webhook::test_support::{tenant_with_secrets, MockTenantRepo};

    #[tokio::test]
    async fn resolves_secret_for_exact_environment() {
        let repo = Arc::new(MockTenantRepo::with_tenant(tenant_with_secrets(
            "t1",
            Some("wsk_sandbox"),
            Some("wsk_live"),
        )));
        let resolver = TenantSecretResolver::new(repo);

        let (tenant, secret) = resolver.resolve("t1", Environment::Live).await.unwrap();
        assert_eq!(tenant.id, "t1");
        use secrecy::ExposeSecret;
        assert_eq!(secret.expose_secret(), "wsk_live");
    }

    #[tokio::test]
    async fn missing_tenant_is_not_found() {
        let repo = Arc::new(MockTenantRepo::empty());
        let resolver = TenantSecretResolver::new(repo);

        let err = resolver
            .resolve("ghost", Environment::Sandbox)
            .await
            .unwrap_err();
        assert!(matches!(err, WebhookError::TenantNotFound(id) if id == "ghost"));
    }

    #[tokio::test]
    async fn no_fallback_across_environments() {
        // Sandbox secret configured, live is not: a live delivery must
        // fail configuration, not silently verify against sandbox.
        let repo = Arc::new(MockTenantRepo::with_tenant(tenant_with_secrets(
            "t1",
            Some("wsk_sandbox"),
            None,
        )));
        let resolver = TenantSecretResolver::new(repo);

        let err = resolver.resolve("t1", Environment::Live).await.unwrap_err();
        assert!(matches!(
            err,
            WebhookError::SecretNotConfigured { ref env, .. } if env == "live"
        ));
    }

    #[tokio::test]
    async fn empty_secret_is_not_configured() {
        let repo = Arc::new(MockTenantRepo::with_tenant(tenant_with_secrets(
            "t1",
            Some(""),
            None,
        )));
        let resolver = TenantSecretResolver::new(repo);

        let err = resolver
            .resolve("t1", Environment::Sandbox)
            .await
            .unwrap_err();
        assert!(matches!(err, WebhookError::SecretNotConfigured { .. }));
    }
}
