//! Ports - trait boundaries between the domain/application layers and
//! infrastructure adapters. Implementations live under `adapters`.

mod order_repository;
mod payment_repository;
mod provider_client;
mod store_error;
mod tenant_repository;
mod webhook_event_store;

pub use order_repository::{NewOrder, OrderRepository};
pub use payment_repository::{NewPayment, PaymentRepository};
pub use provider_client::{
    CreateProviderOrder, ProviderClient, ProviderError, ProviderOrder, WebhookRegistration,
};
pub use store_error::StoreError;
pub use tenant_repository::TenantRepository;
pub use webhook_event_store::{NewWebhookEvent, WebhookEventStore, PROVIDER_NAME};
