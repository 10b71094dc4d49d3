//! Request/response types for checkout and order endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::application::handlers::checkout::CartItem;
use crate::domain::checkout::CaptureMode;
use crate::domain::tenant::Environment;

fn default_currency() -> String {
    "GBP".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CartItemRequest {
    pub name: String,
    pub quantity: i32,
    pub unit_price_minor: i64,
    pub image_url: Option<String>,
}

impl From<CartItemRequest> for CartItem {
    fn from(req: CartItemRequest) -> Self {
        CartItem {
            name: req.name,
            quantity: req.quantity,
            unit_price_minor: req.unit_price_minor,
            image_url: req.image_url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub tenant_id: String,
    #[serde(default)]
    pub env: Environment,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub capture_mode: CaptureMode,
    pub customer_email: Option<String>,
    pub items: Vec<CartItemRequest>,
}

#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub token: Option<String>,
    pub order_id: String,
    pub internal_order_id: Uuid,
    pub order_number: String,
    pub checkout_url: Option<String>,
    pub total_amount_minor: i64,
}

/// Environment selector for order actions.
#[derive(Debug, Deserialize)]
pub struct OrderActionQuery {
    #[serde(default)]
    pub env: Environment,
}

#[derive(Debug, Default, Deserialize)]
pub struct CaptureRequest {
    pub amount_minor: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RefundRequest {
    pub amount_minor: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub tenant_id: Option<String>,
    pub order_number: String,
    pub provider_order_id: String,
    pub state: String,
    pub total_amount_minor: i64,
    pub currency: String,
    pub provider_state: Value,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
