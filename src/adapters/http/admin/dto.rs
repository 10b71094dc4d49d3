//! Request/response types for admin webhook management.

use serde::{Deserialize, Serialize};

use crate::application::handlers::admin::{EnvWebhookConfig, WebhookConfigView};
use crate::domain::tenant::Environment;

#[derive(Debug, Deserialize)]
pub struct RegisterWebhookRequest {
    pub tenant_id: String,
    #[serde(default)]
    pub env: Environment,
    pub base_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterWebhookResponse {
    pub env: Environment,
    pub webhook_id: String,
    pub url: String,
    pub secret_preview: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RotateSecretRequest {
    #[serde(default)]
    pub env: Environment,
    pub expiration_period: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RotateSecretResponse {
    pub env: Environment,
    pub webhook_id: String,
    pub secret_preview: String,
}

#[derive(Debug, Serialize)]
pub struct EnvConfigResponse {
    pub env: Environment,
    pub registered: bool,
    pub webhook_id: Option<String>,
    pub secret_preview: Option<String>,
}

impl From<EnvWebhookConfig> for EnvConfigResponse {
    fn from(config: EnvWebhookConfig) -> Self {
        Self {
            env: config.env,
            registered: config.registered,
            webhook_id: config.webhook_id,
            secret_preview: config.secret_preview,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WebhookConfigResponse {
    pub tenant_id: String,
    pub sandbox: EnvConfigResponse,
    pub live: EnvConfigResponse,
}

impl From<WebhookConfigView> for WebhookConfigResponse {
    fn from(view: WebhookConfigView) -> Self {
        Self {
            tenant_id: view.tenant_id,
            sandbox: view.sandbox.into(),
            live: view.live.into(),
        }
    }
}
