//! Webhook ingestion - verify, audit, reconcile.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::checkout::{
    verify_signature, ReconcileResult, StateReconciler, WebhookError, WebhookPayload,
};
use crate::domain::tenant::Environment;
use crate::ports::{NewWebhookEvent, OrderRepository, WebhookEventStore};

use super::secret_resolver::TenantSecretResolver;

/// One webhook delivery as received by the HTTP layer. Headers are
/// optional because the provider contract is not trusted; a missing
/// header fails verification rather than panicking upstream.
#[derive(Debug)]
pub struct IngestWebhookCommand {
    pub tenant_id: String,
    pub env: Environment,
    pub timestamp_header: Option<String>,
    pub signature_header: Option<String>,
    pub raw_body: Vec<u8>,
}

/// What happened to a delivery that was at least audited.
#[derive(Debug, PartialEq, Eq)]
pub struct IngestReport {
    pub event_id: Uuid,
    /// `None` when the payload carried no order id.
    pub reconciliation: Option<ReconcileResult>,
}

/// Orchestrates the webhook path: resolve the tenant secret, verify
/// the signature over the raw bytes, append the audit row, then
/// reconcile order/payment state.
///
/// The audit row is written before any error is returned and before
/// any mutation: invalid signatures and malformed payloads leave a
/// trace too. Only a failure to resolve the tenant itself goes
/// unrecorded, since there is no tenant to attribute the row to.
pub struct IngestWebhookHandler {
    resolver: TenantSecretResolver,
    events: Arc<dyn WebhookEventStore>,
    orders: Arc<dyn OrderRepository>,
    reconciler: StateReconciler,
}

impl IngestWebhookHandler {
    pub fn new(
        resolver: TenantSecretResolver,
        events: Arc<dyn WebhookEventStore>,
        orders: Arc<dyn OrderRepository>,
        reconciler: StateReconciler,
    ) -> Self {
        Self {
            resolver,
            events,
            orders,
            reconciler,
        }
    }

    pub async fn handle(&self, cmd: IngestWebhookCommand) -> Result<IngestReport, WebhookError> {
        let (_tenant, secret) = self.resolver.resolve(&cmd.tenant_id, cmd.env).await?;

        let signature_ok = match (&cmd.timestamp_header, &cmd.signature_header) {
            (Some(ts), Some(sig)) => verify_signature(&cmd.raw_body, ts, sig, &secret),
            _ => false,
        };

        if !signature_ok {
            warn!(tenant_id = %cmd.tenant_id, env = %cmd.env, "webhook signature verification failed");
            // The row exists for forensics; the caller still gets 400.
            self.events
                .record(NewWebhookEvent::invalid_signature(
                    &cmd.tenant_id,
                    cmd.env,
                    body_as_value(&cmd.raw_body),
                ))
                .await?;
            return Err(WebhookError::InvalidSignature);
        }

        let payload: WebhookPayload = match serde_json::from_slice(&cmd.raw_body) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(tenant_id = %cmd.tenant_id, env = %cmd.env, error = %err, "webhook payload not parseable");
                self.events
                    .record(NewWebhookEvent::malformed(
                        &cmd.tenant_id,
                        cmd.env,
                        &cmd.raw_body,
                    ))
                    .await?;
                return Err(WebhookError::MalformedPayload(err.to_string()));
            }
        };

        // Link the audit row to a local order when one matches. A miss
        // stores null; a store failure is retryable and must surface,
        // not masquerade as "no match".
        let order_id = match &payload.order_id {
            Some(provider_order_id) => self
                .orders
                .find_by_provider_order_id(provider_order_id)
                .await?
                .map(|order| order.id),
            None => None,
        };

        let event_id = self
            .events
            .record(NewWebhookEvent::valid(
                &cmd.tenant_id,
                cmd.env,
                &payload.event,
                payload.order_id.as_deref(),
                order_id,
                body_as_value(&cmd.raw_body),
            ))
            .await?;

        let reconciliation = match &payload.order_id {
            Some(provider_order_id) => Some(
                self.reconciler
                    .apply(&payload.event_type(), provider_order_id)
                    .await?,
            ),
            None => None,
        };

        info!(
            tenant_id = %cmd.tenant_id,
            env = %cmd.env,
            event = %payload.event,
            ?reconciliation,
            "webhook processed"
        );

        Ok(IngestReport {
            event_id,
            reconciliation,
        })
    }
}

fn body_as_value(raw: &[u8]) -> Value {
    serde_json::from_slice(raw)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(raw).into_owned()))
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
