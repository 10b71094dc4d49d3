//! Mock provider client shared by checkout and admin handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::{json, Value};

use crate::domain::tenant::Environment;
use crate::ports::{
    CreateProviderOrder, ProviderClient, ProviderError, ProviderOrder, WebhookRegistration,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderActionCall {
    pub action: &'static str,
    pub env: Environment,
    pub provider_order_id: String,
    pub amount_minor: Option<i64>,
}

#[derive(Default)]
pub struct MockProviderClient {
    created: Mutex<Vec<CreateProviderOrder>>,
    actions: Mutex<Vec<OrderActionCall>>,
    registrations: Mutex<Vec<(Environment, String, Vec<String>)>>,
    rotations: Mutex<Vec<(Environment, String, String)>>,
    fail: bool,
}

impl MockProviderClient {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn created_orders(&self) -> Vec<CreateProviderOrder> {
        self.created.lock().unwrap().clone()
    }

    pub fn actions(&self) -> Vec<OrderActionCall> {
        self.actions.lock().unwrap().clone()
    }

    pub fn registrations(&self) -> Vec<(Environment, String, Vec<String>)> {
        self.registrations.lock().unwrap().clone()
    }

    pub fn rotations(&self) -> Vec<(Environment, String, String)> {
        self.rotations.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), ProviderError> {
        if self.fail {
            Err(ProviderError::Api {
                status: 500,
                body: "mock failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProviderClient for MockProviderClient {
    async fn create_order(
        &self,
        _env: Environment,
        _api_key: &SecretString,
        request: CreateProviderOrder,
    ) -> Result<ProviderOrder, ProviderError> {
        self.check()?;
        self.created.lock().unwrap().push(request);
        Ok(ProviderOrder {
            id: "ord_mock_1".to_string(),
            token: Some("tok_mock_1".to_string()),
            checkout_url: Some("https://checkout.example.com/tok_mock_1".to_string()),
        })
    }

    async fn retrieve_order(
        &self,
        env: Environment,
        _api_key: &SecretString,
        provider_order_id: &str,
    ) -> Result<Value, ProviderError> {
        self.check()?;
        self.actions.lock().unwrap().push(OrderActionCall {
            action: "retrieve",
            env,
            provider_order_id: provider_order_id.to_string(),
            amount_minor: None,
        });
        Ok(json!({"id": provider_order_id, "state": "authorised"}))
    }

    async fn capture_order(
        &self,
        env: Environment,
        _api_key: &SecretString,
        provider_order_id: &str,
        amount_minor: Option<i64>,
    ) -> Result<Value, ProviderError> {
        self.check()?;
        self.actions.lock().unwrap().push(OrderActionCall {
            action: "capture",
            env,
            provider_order_id: provider_order_id.to_string(),
            amount_minor,
        });
        Ok(json!({"id": provider_order_id, "state": "completed"}))
    }

    async fn cancel_order(
        &self,
        env: Environment,
        _api_key: &SecretString,
        provider_order_id: &str,
    ) -> Result<Value, ProviderError> {
        self.check()?;
        self.actions.lock().unwrap().push(OrderActionCall {
            action: "cancel",
            env,
            provider_order_id: provider_order_id.to_string(),
            amount_minor: None,
        });
        Ok(json!({"id": provider_order_id, "state": "cancelled"}))
    }

    async fn refund_order(
        &self,
        env: Environment,
        _api_key: &SecretString,
        provider_order_id: &str,
        amount_minor: Option<i64>,
        _description: Option<String>,
    ) -> Result<Value, ProviderError> {
        self.check()?;
        self.actions.lock().unwrap().push(OrderActionCall {
            action: "refund",
            env,
            provider_order_id: provider_order_id.to_string(),
            amount_minor,
        });
        Ok(json!({"id": format!("refund_{provider_order_id}"), "state": "completed"}))
    }

    async fn register_webhook(
        &self,
        env: Environment,
        _api_key: &SecretString,
        url: &str,
        events: &[String],
    ) -> Result<WebhookRegistration, ProviderError> {
        self.check()?;
        self.registrations
            .lock()
            .unwrap()
            .push((env, url.to_string(), events.to_vec()));
        Ok(WebhookRegistration {
            webhook_id: "wh_mock_1".to_string(),
            signing_secret: SecretString::new("wsk_mock_registered_secret".to_string()),
            url: url.to_string(),
        })
    }

    async fn rotate_signing_secret(
        &self,
        env: Environment,
        _api_key: &SecretString,
        webhook_id: &str,
        expiration_period: &str,
    ) -> Result<SecretString, ProviderError> {
        self.check()?;
        self.rotations.lock().unwrap().push((
            env,
            webhook_id.to_string(),
            expiration_period.to_string(),
        ));
        Ok(SecretString::new("wsk_mock_rotated_secret".to_string()))
    }
}
