//! HTTP handler for provider webhook deliveries.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::application::handlers::webhook::IngestWebhookCommand;
use crate::domain::checkout::WebhookError;

use super::super::state::AppState;
use super::dto::{ErrorResponse, WebhookAck, WebhookQuery};

pub const TIMESTAMP_HEADER: &str = "Revolut-Request-Timestamp";
pub const SIGNATURE_HEADER: &str = "Revolut-Signature";

/// POST /api/revolut/webhook?tenant_id=..&env=..
///
/// The body is taken as raw bytes: the signature covers the exact
/// bytes on the wire, so the payload must not pass through a JSON
/// extractor first.
pub async fn handle_webhook(
    State(state): State<AppState>,
    Query(query): Query<WebhookQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let command = IngestWebhookCommand {
        tenant_id: query.tenant_id.clone(),
        env: query.environment(),
        timestamp_header: header_value(&headers, TIMESTAMP_HEADER),
        signature_header: header_value(&headers, SIGNATURE_HEADER),
        raw_body: body.to_vec(),
    };

    match state.ingest_webhook_handler().handle(command).await {
        Ok(_report) => (StatusCode::OK, Json(WebhookAck { ok: true })).into_response(),
        Err(err) => webhook_error_response(err),
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn webhook_error_response(err: WebhookError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match err {
        // Plaintext body, matching what the provider's delivery log
        // shows for a rejected signature.
        WebhookError::InvalidSignature => (status, "Invalid signature").into_response(),
        WebhookError::Store(inner) => {
            error!(error = %inner, "webhook persistence failure");
            (
                status,
                Json(ErrorResponse {
                    error: "internal error".to_string(),
                }),
            )
                .into_response()
        }
        other => (
            status,
            Json(ErrorResponse {
                error: other.to_string(),
            }),
        )
            .into_response(),
    }
}
