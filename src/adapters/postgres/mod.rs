//! PostgreSQL adapters implementing the persistence ports.

mod order_repository;
mod payment_repository;
mod tenant_repository;
mod webhook_event_store;

pub use order_repository::PostgresOrderRepository;
pub use payment_repository::PostgresPaymentRepository;
pub use tenant_repository::PostgresTenantRepository;
pub use webhook_event_store::PostgresWebhookEventStore;
