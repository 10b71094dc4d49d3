//! Revolut Merchant API client.
//!
//! Credentials are per-call: each tenant authenticates with its own
//! environment-scoped API key, so the client owns only the HTTP stack
//! and the base URLs.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::ProviderConfig;
use crate::domain::checkout::CaptureMode;
use crate::domain::tenant::Environment;
use crate::ports::{
    CreateProviderOrder, ProviderClient, ProviderError, ProviderOrder, WebhookRegistration,
};

const API_VERSION_HEADER: &str = "Revolut-Api-Version";

pub struct RevolutClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl RevolutClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http, config })
    }

    fn base_url(&self, env: Environment) -> &str {
        match env {
            Environment::Sandbox => &self.config.sandbox_base_url,
            Environment::Live => &self.config.live_base_url,
        }
    }

    fn headers(&self, api_key: &SecretString) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            .map_err(|_| ProviderError::Transport("API key is not a valid header".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            API_VERSION_HEADER,
            HeaderValue::from_str(&self.config.api_version)
                .map_err(|_| ProviderError::Transport("invalid API version".to_string()))?,
        );
        Ok(headers)
    }

    async fn post_json(
        &self,
        env: Environment,
        api_key: &SecretString,
        path: &str,
        body: &Value,
    ) -> Result<Value, ProviderError> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url(env), path))
            .headers(self.headers(api_key)?)
            .json(body)
            .send()
            .await?;
        read_json(response).await
    }

    async fn get_json(
        &self,
        env: Environment,
        api_key: &SecretString,
        path: &str,
    ) -> Result<Value, ProviderError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url(env), path))
            .headers(self.headers(api_key)?)
            .send()
            .await?;
        read_json(response).await
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value, ProviderError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ProviderError::Api {
            status: status.as_u16(),
            body,
        });
    }
    if body.is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&body)
        .map_err(|err| ProviderError::InvalidResponse(format!("invalid JSON body: {err}")))
}

fn capture_mode_tag(mode: CaptureMode) -> &'static str {
    match mode {
        CaptureMode::Automatic => "automatic",
        CaptureMode::Manual => "manual",
    }
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    id: String,
    token: Option<String>,
    checkout_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WebhookResponse {
    id: String,
    signing_secret: String,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RotateResponse {
    signing_secret: String,
}

#[async_trait]
impl ProviderClient for RevolutClient {
    async fn create_order(
        &self,
        env: Environment,
        api_key: &SecretString,
        request: CreateProviderOrder,
    ) -> Result<ProviderOrder, ProviderError> {
        let mut body = json!({
            "amount": request.amount_minor,
            "currency": request.currency,
            "capture_mode": capture_mode_tag(request.capture_mode),
            "merchant_order_data": {
                "reference": request.merchant_order_ext_ref,
            },
        });
        if let Some(email) = &request.customer_email {
            body["customer"] = json!({ "email": email });
        }
        if let Some(description) = &request.description {
            body["description"] = json!(description);
        }

        let value = self.post_json(env, api_key, "/api/orders", &body).await?;
        let order: OrderResponse = serde_json::from_value(value)
            .map_err(|err| ProviderError::InvalidResponse(err.to_string()))?;

        Ok(ProviderOrder {
            id: order.id,
            token: order.token,
            checkout_url: order.checkout_url,
        })
    }

    async fn retrieve_order(
        &self,
        env: Environment,
        api_key: &SecretString,
        provider_order_id: &str,
    ) -> Result<Value, ProviderError> {
        self.get_json(env, api_key, &format!("/api/orders/{provider_order_id}"))
            .await
    }

    async fn capture_order(
        &self,
        env: Environment,
        api_key: &SecretString,
        provider_order_id: &str,
        amount_minor: Option<i64>,
    ) -> Result<Value, ProviderError> {
        let body = match amount_minor {
            Some(amount) => json!({ "amount": amount }),
            None => json!({}),
        };
        self.post_json(
            env,
            api_key,
            &format!("/api/orders/{provider_order_id}/capture"),
            &body,
        )
        .await
    }

    async fn cancel_order(
        &self,
        env: Environment,
        api_key: &SecretString,
        provider_order_id: &str,
    ) -> Result<Value, ProviderError> {
        self.post_json(
            env,
            api_key,
            &format!("/api/orders/{provider_order_id}/cancel"),
            &json!({}),
        )
        .await
    }

    async fn refund_order(
        &self,
        env: Environment,
        api_key: &SecretString,
        provider_order_id: &str,
        amount_minor: Option<i64>,
        description: Option<String>,
    ) -> Result<Value, ProviderError> {
        let mut body = json!({});
        if let Some(amount) = amount_minor {
            body["amount"] = json!(amount);
        }
        if let Some(description) = description {
            body["description"] = json!(description);
        }
        self.post_json(
            env,
            api_key,
            &format!("/api/orders/{provider_order_id}/refund"),
            &body,
        )
        .await
    }

    async fn register_webhook(
        &self,
        env: Environment,
        api_key: &SecretString,
        url: &str,
        events: &[String],
    ) -> Result<WebhookRegistration, ProviderError> {
        let body = json!({
            "url": url,
            "events": events,
        });
        let value = self.post_json(env, api_key, "/api/1.0/webhooks", &body).await?;
        let webhook: WebhookResponse = serde_json::from_value(value)
            .map_err(|err| ProviderError::InvalidResponse(err.to_string()))?;

        Ok(WebhookRegistration {
            webhook_id: webhook.id,
            signing_secret: SecretString::new(webhook.signing_secret),
            url: webhook.url.unwrap_or_else(|| url.to_string()),
        })
    }

    async fn rotate_signing_secret(
        &self,
        env: Environment,
        api_key: &SecretString,
        webhook_id: &str,
        expiration_period: &str,
    ) -> Result<SecretString, ProviderError> {
        let body = json!({ "expiration_period": expiration_period });
        let value = self
            .post_json(
                env,
                api_key,
                &format!("/api/1.0/webhooks/{webhook_id}/rotate-signing-secret"),
                &body,
            )
            .await?;
        let rotated: RotateResponse = serde_json::from_value(value)
            .map_err(|err| ProviderError::InvalidResponse(err.to_string()))?;

        Ok(SecretString::new(rotated.signing_secret))
    }
}
