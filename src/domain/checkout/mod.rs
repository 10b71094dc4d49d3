//! Checkout bounded context: orders, payments, webhook signature
//! verification and state reconciliation.

mod errors;
mod events;
mod order;
mod payment;
mod reconciler;
mod signature;

pub use errors::{CheckoutError, WebhookError};
pub use events::{ProviderEventType, WebhookPayload};
pub use order::{CaptureMode, Order, OrderLineItem, OrderState};
pub use payment::{Payment, PaymentMethod, PaymentStatus, TimestampField};
pub use reconciler::{ReconcileResult, StateReconciler, StateTransition};
pub use signature::verify_signature;

#[cfg(test)]
pub use signature::sign;
