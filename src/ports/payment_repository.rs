use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::checkout::{Payment, PaymentMethod, PaymentStatus, TimestampField};

use super::StoreError;

/// Fields needed to persist a payment at checkout time.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub order_id: Uuid,
    pub provider_order_id: String,
    pub amount_minor: i64,
    pub currency: String,
    pub method: PaymentMethod,
}

/// Persistence port for payments.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, payment: NewPayment) -> Result<Payment, StoreError>;

    async fn find_by_provider_order_id(
        &self,
        provider_order_id: &str,
    ) -> Result<Option<Payment>, StoreError>;

    /// Set the status of the payment matching `provider_order_id` and
    /// stamp the given lifecycle timestamp if it is still null. A
    /// redelivery after the first stamp keeps the original time.
    /// Returns the number of rows matched (0 or 1).
    async fn update_status(
        &self,
        provider_order_id: &str,
        status: PaymentStatus,
        stamp: TimestampField,
    ) -> Result<u64, StoreError>;
}
