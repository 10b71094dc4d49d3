use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::tenant::Environment;

use super::StoreError;

/// Payment processor every audit row is attributed to. A single
/// processor today; the column keeps rows distinguishable if another
/// is ever added.
pub const PROVIDER_NAME: &str = "revolut";

/// An audit row for one webhook delivery, recorded before any state
/// mutation. Invalid and malformed deliveries are recorded too; the
/// audit trail is the forensic record of everything the endpoint saw.
#[derive(Debug, Clone)]
pub struct NewWebhookEvent {
    pub tenant_id: String,
    pub provider: String,
    pub environment: Environment,
    pub event_type: String,
    pub provider_order_id: Option<String>,
    /// Resolved local order, when the provider order id matched one.
    pub order_id: Option<Uuid>,
    pub payload: Value,
    pub signature_valid: bool,
    pub payload_malformed: bool,
}

impl NewWebhookEvent {
    /// A delivery that passed signature verification and parsed cleanly.
    pub fn valid(
        tenant_id: &str,
        environment: Environment,
        event_type: &str,
        provider_order_id: Option<&str>,
        order_id: Option<Uuid>,
        payload: Value,
    ) -> Self {
        Self {
            tenant_id: tenant_id.to_string(),
            provider: PROVIDER_NAME.to_string(),
            environment,
            event_type: event_type.to_string(),
            provider_order_id: provider_order_id.map(str::to_string),
            order_id,
            payload,
            signature_valid: true,
            payload_malformed: false,
        }
    }

    /// A delivery that failed signature verification. The body is kept
    /// for forensics but never interpreted.
    pub fn invalid_signature(tenant_id: &str, environment: Environment, payload: Value) -> Self {
        Self {
            tenant_id: tenant_id.to_string(),
            provider: PROVIDER_NAME.to_string(),
            environment,
            event_type: "SIGNATURE_INVALID".to_string(),
            provider_order_id: None,
            order_id: None,
            payload,
            signature_valid: false,
            payload_malformed: false,
        }
    }

    /// A correctly signed delivery whose body was not valid JSON.
    pub fn malformed(tenant_id: &str, environment: Environment, raw_body: &[u8]) -> Self {
        Self {
            tenant_id: tenant_id.to_string(),
            provider: PROVIDER_NAME.to_string(),
            environment,
            event_type: "PAYLOAD_MALFORMED".to_string(),
            provider_order_id: None,
            order_id: None,
            payload: Value::String(String::from_utf8_lossy(raw_body).into_owned()),
            signature_valid: true,
            payload_malformed: true,
        }
    }
}

/// Append-only audit store for webhook deliveries.
#[async_trait]
pub trait WebhookEventStore: Send + Sync {
    /// Append one delivery. Returns the id of the stored row.
    async fn record(&self, event: NewWebhookEvent) -> Result<Uuid, StoreError>;
}
