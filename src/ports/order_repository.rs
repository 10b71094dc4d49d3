use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::checkout::{CaptureMode, Order, OrderLineItem, OrderState};

use super::StoreError;

/// Fields needed to persist a freshly created order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub tenant_id: Option<String>,
    pub order_number: String,
    pub provider_order_id: String,
    pub provider_public_token: Option<String>,
    pub customer_email: Option<String>,
    pub total_amount_minor: i64,
    pub currency: String,
    pub capture_mode: CaptureMode,
    pub items: Vec<OrderLineItem>,
}

/// Persistence port for orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: NewOrder) -> Result<Order, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, StoreError>;

    async fn find_by_provider_order_id(
        &self,
        provider_order_id: &str,
    ) -> Result<Option<Order>, StoreError>;

    /// Set the state of the order matching `provider_order_id`.
    ///
    /// A single scoped UPDATE, not read-modify-write: redeliveries of
    /// the same event converge on the same row state regardless of
    /// interleaving. Returns the number of rows matched (0 or 1).
    async fn update_state(
        &self,
        provider_order_id: &str,
        state: OrderState,
    ) -> Result<u64, StoreError>;
}
