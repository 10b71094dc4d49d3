//! State reconciliation from provider webhook events.
//!
//! Each recognised event maps to a target (order state, payment status,
//! lifecycle timestamp) triple. The reconciler applies the target
//! unconditionally to the rows matching the provider order id: the
//! provider delivers at least once and in no guaranteed order, and an
//! unconditional scoped write is idempotent under redelivery.

use std::sync::Arc;

use crate::ports::{OrderRepository, PaymentRepository, StoreError};

use super::events::ProviderEventType;
use super::order::OrderState;
use super::payment::{PaymentStatus, TimestampField};

/// Target state for a recognised event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub order_state: OrderState,
    pub payment_status: PaymentStatus,
    pub stamp: TimestampField,
}

impl StateTransition {
    /// The event mapping table. Events outside it (payment
    /// authentication, declines, unrecognised types) change nothing.
    pub fn for_event(event: &ProviderEventType) -> Option<Self> {
        match event {
            ProviderEventType::OrderAuthorised => Some(Self {
                order_state: OrderState::Authorised,
                payment_status: PaymentStatus::Authorised,
                stamp: TimestampField::AuthorisedAt,
            }),
            ProviderEventType::OrderCompleted => Some(Self {
                order_state: OrderState::Completed,
                payment_status: PaymentStatus::Captured,
                stamp: TimestampField::CapturedAt,
            }),
            ProviderEventType::OrderCancelled => Some(Self {
                order_state: OrderState::Cancelled,
                payment_status: PaymentStatus::Cancelled,
                stamp: TimestampField::CancelledAt,
            }),
            _ => None,
        }
    }
}

/// Outcome of reconciling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileResult {
    /// Order and payment rows were updated to the target state.
    Applied {
        order_state: OrderState,
        payment_status: PaymentStatus,
    },
    /// The event mapped to a transition but no order carries that
    /// provider order id. Audited, nothing mutated.
    NoMatchingOrder,
    /// The event does not participate in state reconciliation.
    Unrecognised,
}

/// Applies webhook events to order and payment state.
pub struct StateReconciler {
    orders: Arc<dyn OrderRepository>,
    payments: Arc<dyn PaymentRepository>,
}

impl StateReconciler {
    pub fn new(orders: Arc<dyn OrderRepository>, payments: Arc<dyn PaymentRepository>) -> Self {
        Self { orders, payments }
    }

    /// Reconcile one event against the order identified by
    /// `provider_order_id`.
    pub async fn apply(
        &self,
        event: &ProviderEventType,
        provider_order_id: &str,
    ) -> Result<ReconcileResult, StoreError> {
        let Some(transition) = StateTransition::for_event(event) else {
            return Ok(ReconcileResult::Unrecognised);
        };

        let matched = self
            .orders
            .update_state(provider_order_id, transition.order_state)
            .await?;
        if matched == 0 {
            return Ok(ReconcileResult::NoMatchingOrder);
        }

        self.payments
            .update_status(provider_order_id, transition.payment_status, transition.stamp)
            .await?;

        Ok(ReconcileResult::Applied {
            order_state: transition.order_state,
            payment_status: transition.payment_status,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
