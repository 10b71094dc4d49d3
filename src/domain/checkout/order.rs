//! Order aggregate - a checkout attempt against the payment provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of an order, as observed from provider webhooks.
///
/// `CREATED -> AUTHORISED -> COMPLETED`, or `CREATED -> CANCELLED`
/// (terminal). Orders are created synchronously at checkout and mutated
/// only by the webhook reconciler afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderState {
    Created,
    Authorised,
    Completed,
    Cancelled,
}

impl OrderState {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CREATED" => Some(Self::Created),
            "AUTHORISED" => Some(Self::Authorised),
            "COMPLETED" => Some(Self::Completed),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Authorised => "AUTHORISED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Terminal states accept no further transitions in the happy path.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Whether funds are captured automatically on authorisation or held
/// pending a manual capture call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaptureMode {
    #[default]
    Automatic,
    Manual,
}

impl CaptureMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AUTOMATIC" => Some(Self::Automatic),
            "MANUAL" => Some(Self::Manual),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Automatic => "AUTOMATIC",
            Self::Manual => "MANUAL",
        }
    }
}

/// A line item within an order. Amounts are in minor units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineItem {
    pub name: String,
    pub quantity: i32,
    pub unit_price_minor: i64,
    pub total_amount_minor: i64,
    pub image_url: Option<String>,
}

/// Order - a checkout attempt.
///
/// The provider order id is the correlation key between webhook
/// deliveries and this record; it is unique across orders.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,

    /// Owning tenant. Optional: a legacy single-tenant path created
    /// orders with no tenant reference.
    pub tenant_id: Option<String>,

    /// Human-facing order number (e.g. `ORD-1724400000000`).
    pub order_number: String,

    /// Provider-assigned order id.
    pub provider_order_id: String,

    /// Provider-assigned public token, consumed by the hosted widget.
    pub provider_public_token: Option<String>,

    pub customer_email: Option<String>,
    pub total_amount_minor: i64,
    pub currency: String,
    pub capture_mode: CaptureMode,
    pub state: OrderState,
    pub items: Vec<OrderLineItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
