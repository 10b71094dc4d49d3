//! Payment record - the money movement attached to an order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a payment, driven by provider webhook events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Initiated,
    Authorised,
    Captured,
    Cancelled,
}

impl PaymentStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "INITIATED" => Some(Self::Initiated),
            "AUTHORISED" => Some(Self::Authorised),
            "CAPTURED" => Some(Self::Captured),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initiated => "INITIATED",
            Self::Authorised => "AUTHORISED",
            Self::Captured => "CAPTURED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// Payment method selected in the provider's hosted widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Card,
    ApplePay,
    GooglePay,
    RevolutPay,
    PayByBank,
}

impl PaymentMethod {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CARD" => Some(Self::Card),
            "APPLE_PAY" => Some(Self::ApplePay),
            "GOOGLE_PAY" => Some(Self::GooglePay),
            "REVOLUT_PAY" => Some(Self::RevolutPay),
            "PAY_BY_BANK" => Some(Self::PayByBank),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "CARD",
            Self::ApplePay => "APPLE_PAY",
            Self::GooglePay => "GOOGLE_PAY",
            Self::RevolutPay => "REVOLUT_PAY",
            Self::PayByBank => "PAY_BY_BANK",
        }
    }
}

/// Lifecycle timestamp columns on a payment. Each is written at most
/// once: the first webhook delivery that reaches a state stamps it, and
/// later redeliveries leave the stamp untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampField {
    AuthorisedAt,
    CapturedAt,
    CancelledAt,
}

impl TimestampField {
    /// Column name, used to select a static UPDATE statement.
    pub fn column(&self) -> &'static str {
        match self {
            Self::AuthorisedAt => "authorised_at",
            Self::CapturedAt => "captured_at",
            Self::CancelledAt => "cancelled_at",
        }
    }
}

/// Payment attached to an order, keyed by the provider order id.
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: Uuid,
    pub order_id: Uuid,
    pub provider_order_id: String,
    pub amount_minor: i64,
    pub currency: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub authorised_at: Option<DateTime<Utc>>,
    pub captured_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
