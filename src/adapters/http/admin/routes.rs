//! Router for admin webhook management endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::super::state::AppState;
use super::handlers::{get_webhook_config, register_webhook, rotate_secret};

/// Admin endpoints. Deployment is expected to gate these behind an
/// operator-only ingress; responses only ever carry masked secrets.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/webhooks/register", post(register_webhook))
        .route("/webhooks/:tenant_id", get(get_webhook_config))
        .route("/webhooks/:tenant_id/rotate", post(rotate_secret))
}
