//! Webhook registration with the provider.

use std::sync::Arc;

use tracing::info;

use crate::domain::checkout::CheckoutError;
use crate::domain::tenant::{Environment, TenantError};
use crate::ports::{ProviderClient, TenantRepository};

use super::masking::mask_secret;

/// Events every registered webhook subscribes to.
pub const SUBSCRIBED_EVENTS: &[&str] = &[
    "ORDER_AUTHORISED",
    "ORDER_COMPLETED",
    "ORDER_CANCELLED",
    "ORDER_PAYMENT_AUTHENTICATED",
    "ORDER_PAYMENT_DECLINED",
    "ORDER_PAYMENT_FAILED",
];

#[derive(Debug)]
pub struct RegisterWebhookCommand {
    pub tenant_id: String,
    pub env: Environment,
    /// Overrides the tenant's configured base URL when set.
    pub base_url_override: Option<String>,
}

/// Registration result. Carries a masked preview only; the raw secret
/// is persisted and never travels further.
#[derive(Debug)]
pub struct WebhookRegistered {
    pub env: Environment,
    pub webhook_id: String,
    pub url: String,
    pub secret_preview: String,
}

pub struct RegisterWebhookHandler {
    tenants: Arc<dyn TenantRepository>,
    provider: Arc<dyn ProviderClient>,
    /// Fallback callback base URL for tenants without their own.
    default_base_url: Option<String>,
}

impl RegisterWebhookHandler {
    pub fn new(
        tenants: Arc<dyn TenantRepository>,
        provider: Arc<dyn ProviderClient>,
        default_base_url: Option<String>,
    ) -> Self {
        Self {
            tenants,
            provider,
            default_base_url,
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterWebhookCommand,
    ) -> Result<WebhookRegistered, CheckoutError> {
        let tenant = self
            .tenants
            .find_by_id(&cmd.tenant_id)
            .await?
            .ok_or_else(|| TenantError::NotFound(cmd.tenant_id.clone()))?;
        let api_key = tenant.api_key(cmd.env)?.clone();

        let base_url = cmd
            .base_url_override
            .or_else(|| tenant.webhook_base_url.clone())
            .or_else(|| self.default_base_url.clone())
            .ok_or_else(|| {
                CheckoutError::InvalidRequest(format!(
                    "no webhook base URL configured for tenant {}",
                    cmd.tenant_id
                ))
            })?;

        let url = callback_url(&base_url, &cmd.tenant_id, cmd.env);
        let events: Vec<String> = SUBSCRIBED_EVENTS.iter().map(|e| e.to_string()).collect();

        let registration = self
            .provider
            .register_webhook(cmd.env, &api_key, &url, &events)
            .await?;

        self.tenants
            .update_webhook_registration(
                &cmd.tenant_id,
                cmd.env,
                &registration.webhook_id,
                &registration.signing_secret,
            )
            .await?;

        info!(
            tenant_id = %cmd.tenant_id,
            env = %cmd.env,
            webhook_id = %registration.webhook_id,
            url = %registration.url,
            "webhook registered"
        );

        Ok(WebhookRegistered {
            env: cmd.env,
            webhook_id: registration.webhook_id,
            url: registration.url,
            secret_preview: mask_secret(&registration.signing_secret),
        })
    }
}

/// The callback URL the provider will deliver to. Tenant and
/// environment ride in the query string so ingestion can resolve the
/// right secret.
fn callback_url(base_url: &str, tenant_id: &str, env: Environment) -> String {
    format!(
        "{}/api/revolut/webhook?tenant_id={}&env={}",
        base_url.trim_end_matches('/'),
        tenant_id,
        env
    )
}
