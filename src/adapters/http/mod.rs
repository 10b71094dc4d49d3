//! HTTP adapters - axum routers, handlers and DTOs.

pub mod admin;
pub mod checkout;
mod state;
pub mod webhook;

pub use state::AppState;

use axum::routing::get;
use axum::Router;

use admin::admin_routes;
use checkout::checkout_routes;
use webhook::webhook_routes;

/// Full API router.
///
/// - `/api/revolut/*` - webhook callback, checkout, order actions
/// - `/api/admin/revolut/*` - webhook credential management
/// - `/health` - liveness probe
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .nest(
            "/api/revolut",
            webhook_routes().merge(checkout_routes()),
        )
        .nest("/api/admin/revolut", admin_routes())
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
