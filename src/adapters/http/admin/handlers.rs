//! HTTP handlers for admin webhook management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::handlers::admin::{RegisterWebhookCommand, RotateSecretCommand};

use super::super::checkout::handlers::checkout_error_response;
use super::super::state::AppState;
use super::dto::{
    RegisterWebhookRequest, RegisterWebhookResponse, RotateSecretRequest, RotateSecretResponse,
    WebhookConfigResponse,
};

/// POST /webhooks/register
pub async fn register_webhook(
    State(state): State<AppState>,
    Json(request): Json<RegisterWebhookRequest>,
) -> Response {
    let command = RegisterWebhookCommand {
        tenant_id: request.tenant_id,
        env: request.env,
        base_url_override: request.base_url,
    };

    match state.register_webhook_handler().handle(command).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(RegisterWebhookResponse {
                env: result.env,
                webhook_id: result.webhook_id,
                url: result.url,
                secret_preview: result.secret_preview,
            }),
        )
            .into_response(),
        Err(err) => checkout_error_response(err),
    }
}

/// GET /webhooks/:tenant_id
pub async fn get_webhook_config(
    State(state): State<AppState>,
    Path(tenant_id): Path<String>,
) -> Response {
    match state.get_webhook_config_handler().handle(&tenant_id).await {
        Ok(view) => Json(WebhookConfigResponse::from(view)).into_response(),
        Err(err) => checkout_error_response(err),
    }
}

/// POST /webhooks/:tenant_id/rotate
pub async fn rotate_secret(
    State(state): State<AppState>,
    Path(tenant_id): Path<String>,
    body: Option<Json<RotateSecretRequest>>,
) -> Response {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let command = RotateSecretCommand {
        tenant_id,
        env: request.env,
        expiration_period: request.expiration_period,
    };

    match state.rotate_secret_handler().handle(command).await {
        Ok(result) => Json(RotateSecretResponse {
            env: result.env,
            webhook_id: result.webhook_id,
            secret_preview: result.secret_preview,
        })
        .into_response(),
        Err(err) => checkout_error_response(err),
    }
}
