//! HTTP handlers for checkout and order actions.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;
use uuid::Uuid;

use crate::application::handlers::checkout::CreateCheckoutCommand;
use crate::domain::checkout::CheckoutError;

use super::super::state::AppState;
use super::dto::{
    CaptureRequest, CreateOrderRequest, CreateOrderResponse, ErrorResponse, OrderActionQuery,
    OrderResponse, RefundRequest,
};

/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Response {
    let command = CreateCheckoutCommand {
        tenant_id: request.tenant_id,
        env: request.env,
        currency: request.currency,
        capture_mode: request.capture_mode,
        customer_email: request.customer_email,
        items: request.items.into_iter().map(Into::into).collect(),
    };

    match state.create_checkout_handler().handle(command).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(CreateOrderResponse {
                token: created.public_token,
                order_id: created.provider_order_id,
                internal_order_id: created.internal_order_id,
                order_number: created.order_number,
                checkout_url: created.checkout_url,
                total_amount_minor: created.total_amount_minor,
            }),
        )
            .into_response(),
        Err(err) => checkout_error_response(err),
    }
}

/// GET /orders/:order_id
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Query(query): Query<OrderActionQuery>,
) -> Response {
    match state.order_actions_handler().get(order_id, query.env).await {
        Ok(view) => Json(OrderResponse {
            id: view.order.id,
            tenant_id: view.order.tenant_id,
            order_number: view.order.order_number,
            provider_order_id: view.order.provider_order_id,
            state: view.order.state.as_str().to_string(),
            total_amount_minor: view.order.total_amount_minor,
            currency: view.order.currency,
            provider_state: view.provider_state,
        })
        .into_response(),
        Err(err) => checkout_error_response(err),
    }
}

/// POST /orders/:order_id/capture
pub async fn capture_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Query(query): Query<OrderActionQuery>,
    body: Option<Json<CaptureRequest>>,
) -> Response {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    match state
        .order_actions_handler()
        .capture(order_id, query.env, request.amount_minor)
        .await
    {
        Ok(result) => Json(result).into_response(),
        Err(err) => checkout_error_response(err),
    }
}

/// POST /orders/:order_id/cancel
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Query(query): Query<OrderActionQuery>,
) -> Response {
    match state
        .order_actions_handler()
        .cancel(order_id, query.env)
        .await
    {
        Ok(result) => Json(result).into_response(),
        Err(err) => checkout_error_response(err),
    }
}

/// POST /orders/:order_id/refund
pub async fn refund_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
    Query(query): Query<OrderActionQuery>,
    body: Option<Json<RefundRequest>>,
) -> Response {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    match state
        .order_actions_handler()
        .refund(order_id, query.env, request.amount_minor, request.description)
        .await
    {
        Ok(result) => Json(result).into_response(),
        Err(err) => checkout_error_response(err),
    }
}

pub(crate) fn checkout_error_response(err: CheckoutError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = match &err {
        CheckoutError::Store(inner) => {
            error!(error = %inner, "checkout persistence failure");
            "internal error".to_string()
        }
        other => other.to_string(),
    };
    (status, Json(ErrorResponse { error: message })).into_response()
}
