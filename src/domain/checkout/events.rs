//! Webhook event payloads from the provider.

use serde::Deserialize;
use serde_json::Value;

/// Provider webhook event types this service reacts to.
///
/// `Unknown` carries the raw event name so it can be audited; the
/// reconciler treats it (and the authentication/decline family) as a
/// no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEventType {
    OrderAuthorised,
    OrderCompleted,
    OrderCancelled,
    OrderPaymentAuthenticated,
    OrderPaymentDeclined,
    OrderPaymentFailed,
    Unknown(String),
}

impl ProviderEventType {
    pub fn parse(s: &str) -> Self {
        match s {
            "ORDER_AUTHORISED" => Self::OrderAuthorised,
            "ORDER_COMPLETED" => Self::OrderCompleted,
            "ORDER_CANCELLED" => Self::OrderCancelled,
            "ORDER_PAYMENT_AUTHENTICATED" => Self::OrderPaymentAuthenticated,
            "ORDER_PAYMENT_DECLINED" => Self::OrderPaymentDeclined,
            "ORDER_PAYMENT_FAILED" => Self::OrderPaymentFailed,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::OrderAuthorised => "ORDER_AUTHORISED",
            Self::OrderCompleted => "ORDER_COMPLETED",
            Self::OrderCancelled => "ORDER_CANCELLED",
            Self::OrderPaymentAuthenticated => "ORDER_PAYMENT_AUTHENTICATED",
            Self::OrderPaymentDeclined => "ORDER_PAYMENT_DECLINED",
            Self::OrderPaymentFailed => "ORDER_PAYMENT_FAILED",
            Self::Unknown(s) => s,
        }
    }
}

/// Deserialized webhook body.
///
/// Only `event` and `order_id` are interpreted; everything else rides
/// along in `extra` and is persisted verbatim in the audit row.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    pub event: String,
    pub order_id: Option<String>,
    #[serde(flatten)]
    pub extra: Value,
}

impl WebhookPayload {
    pub fn event_type(&self) -> ProviderEventType {
        ProviderEventType::parse(&self.event)
    }
}
