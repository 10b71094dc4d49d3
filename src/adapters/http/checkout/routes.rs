//! Router for checkout and order-action endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{cancel_order, capture_order, create_order, get_order, refund_order};

/// - `POST /orders` - create a checkout
/// - `GET /orders/:order_id` - local order plus the provider's view
/// - `POST /orders/:order_id/{capture,cancel,refund}` - provider
///   actions; local state follows via webhooks
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/:order_id", get(get_order))
        .route("/orders/:order_id/capture", post(capture_order))
        .route("/orders/:order_id/cancel", post(cancel_order))
        .route("/orders/:order_id/refund", post(refund_order))
}
