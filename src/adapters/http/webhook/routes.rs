//! Router for the provider webhook endpoint.

use axum::routing::post;
use axum::Router;

use super::super::state::AppState;
use super::handlers::handle_webhook;

/// `POST /webhook` - no authentication; deliveries are verified by
/// signature against the tenant's env-scoped secret.
pub fn webhook_routes() -> Router<AppState> {
    Router::new().route("/webhook", post(handle_webhook))
}
