//! Masked per-environment webhook configuration view.

use std::sync::Arc;

use crate::domain::checkout::CheckoutError;
use crate::domain::tenant::{EnvCredentials, Environment, TenantError};
use crate::ports::TenantRepository;

use super::masking::mask_secret;

/// What an operator sees for one environment. Secrets only ever
/// appear as masked previews.
#[derive(Debug, PartialEq, Eq)]
pub struct EnvWebhookConfig {
    pub env: Environment,
    pub registered: bool,
    pub webhook_id: Option<String>,
    pub secret_preview: Option<String>,
}

#[derive(Debug)]
pub struct WebhookConfigView {
    pub tenant_id: String,
    pub sandbox: EnvWebhookConfig,
    pub live: EnvWebhookConfig,
}

pub struct GetWebhookConfigHandler {
    tenants: Arc<dyn TenantRepository>,
}

impl GetWebhookConfigHandler {
    pub fn new(tenants: Arc<dyn TenantRepository>) -> Self {
        Self { tenants }
    }

    pub async fn handle(&self, tenant_id: &str) -> Result<WebhookConfigView, CheckoutError> {
        let tenant = self
            .tenants
            .find_by_id(tenant_id)
            .await?
            .ok_or_else(|| TenantError::NotFound(tenant_id.to_string()))?;

        Ok(WebhookConfigView {
            tenant_id: tenant.id.clone(),
            sandbox: env_view(Environment::Sandbox, &tenant.sandbox),
            live: env_view(Environment::Live, &tenant.live),
        })
    }
}

fn env_view(env: Environment, creds: &EnvCredentials) -> EnvWebhookConfig {
    let webhook_id = creds.webhook_id.clone().filter(|id| !id.is_empty());
    let secret_preview = creds.signing_secret.as_ref().map(mask_secret);
    EnvWebhookConfig {
        env,
        registered: webhook_id.is_some() && secret_preview.is_some(),
        webhook_id,
        secret_preview,
    }
}
