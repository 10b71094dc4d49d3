//! Signing secret rotation.

use std::sync::Arc;

use tracing::info;

use crate::domain::checkout::CheckoutError;
use crate::domain::tenant::{Environment, TenantError};
use crate::ports::{ProviderClient, TenantRepository};

use super::masking::mask_secret;

/// How long the outgoing secret stays valid after rotation, so
/// in-flight deliveries signed with it still verify provider-side.
pub const DEFAULT_EXPIRATION_PERIOD: &str = "PT1H";

#[derive(Debug)]
pub struct RotateSecretCommand {
    pub tenant_id: String,
    pub env: Environment,
    /// ISO 8601 duration; defaults to [`DEFAULT_EXPIRATION_PERIOD`].
    pub expiration_period: Option<String>,
}

#[derive(Debug)]
pub struct SecretRotated {
    pub env: Environment,
    pub webhook_id: String,
    pub secret_preview: String,
}

pub struct RotateSecretHandler {
    tenants: Arc<dyn TenantRepository>,
    provider: Arc<dyn ProviderClient>,
}

impl RotateSecretHandler {
    pub fn new(tenants: Arc<dyn TenantRepository>, provider: Arc<dyn ProviderClient>) -> Self {
        Self { tenants, provider }
    }

    pub async fn handle(&self, cmd: RotateSecretCommand) -> Result<SecretRotated, CheckoutError> {
        let tenant = self
            .tenants
            .find_by_id(&cmd.tenant_id)
            .await?
            .ok_or_else(|| TenantError::NotFound(cmd.tenant_id.clone()))?;
        let api_key = tenant.api_key(cmd.env)?.clone();
        let webhook_id = tenant.webhook_id(cmd.env)?.to_string();

        let expiration = cmd
            .expiration_period
            .as_deref()
            .unwrap_or(DEFAULT_EXPIRATION_PERIOD);

        let new_secret = self
            .provider
            .rotate_signing_secret(cmd.env, &api_key, &webhook_id, expiration)
            .await?;

        self.tenants
            .update_signing_secret(&cmd.tenant_id, cmd.env, &new_secret)
            .await?;

        info!(
            tenant_id = %cmd.tenant_id,
            env = %cmd.env,
            webhook_id = %webhook_id,
            "signing secret rotated"
        );

        Ok(SecretRotated {
            env: cmd.env,
            webhook_id,
            secret_preview: mask_secret(&new_secret),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockProviderClient;
    use crate::application::handlers::webhook::test_support::{
        tenant_with_secrets, MockTenantRepo,
    };

    fn fixture() -> (
        RotateSecretHandler,
        Arc<MockTenantRepo>,
        Arc<MockProviderClient>,
    ) {
        let tenants = Arc::new(MockTenantRepo::with_tenant(tenant_with_secrets(
            "t1",
            Some("wsk_old_sandbox"),
            Some("wsk_old_live"),
        )));
        let provider = Arc::new(MockProviderClient::default());
        (
            RotateSecretHandler::new(tenants.clone(), provider.clone()),
            tenants,
            provider,
        )
    }

    #[tokio::test]
    async fn rotates_and_persists_for_one_environment_only() {
        let (handler, tenants, provider) = fixture();

        let result = handler
            .handle(RotateSecretCommand {
                tenant_id: "t1".to_string(),
                env: Environment::Live,
                expiration_period: None,
            })
            .await
            .unwrap();

        assert_eq!(result.webhook_id, "wh_t1");
        assert!(!result.secret_preview.contains("mock_rotated"));

        let rotations = provider.rotations();
        assert_eq!(rotations.len(), 1);
        assert_eq!(rotations[0].0, Environment::Live);
        assert_eq!(rotations[0].2, DEFAULT_EXPIRATION_PERIOD);

        let persisted = tenants.secret_updates.lock().unwrap();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].1, Environment::Live);
        assert_eq!(persisted[0].2, "wsk_mock_rotated_secret");
    }

    #[tokio::test]
    async fn custom_expiration_period_is_forwarded() {
        let (handler, _, provider) = fixture();

        handler
            .handle(RotateSecretCommand {
                tenant_id: "t1".to_string(),
                env: Environment::Sandbox,
                expiration_period: Some("PT24H".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(provider.rotations()[0].2, "PT24H");
    }

    #[tokio::test]
    async fn unregistered_webhook_cannot_rotate() {
        let tenants = Arc::new(MockTenantRepo::with_tenant({
            let mut tenant = tenant_with_secrets("t1", Some("wsk_s"), None);
            tenant.sandbox.webhook_id = None;
            tenant
        }));
        let provider = Arc::new(MockProviderClient::default());
        let handler = RotateSecretHandler::new(tenants, provider.clone());

        let err = handler
            .handle(RotateSecretCommand {
                tenant_id: "t1".to_string(),
                env: Environment::Sandbox,
                expiration_period: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CheckoutError::Tenant(TenantError::WebhookNotRegistered { .. })
        ));
        assert!(provider.rotations().is_empty());
    }
}
