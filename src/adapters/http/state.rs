//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::handlers::admin::{
    GetWebhookConfigHandler, RegisterWebhookHandler, RotateSecretHandler,
};
use crate::application::handlers::checkout::{CreateCheckoutHandler, OrderActionsHandler};
use crate::application::handlers::webhook::{IngestWebhookHandler, TenantSecretResolver};
use crate::domain::checkout::StateReconciler;
use crate::ports::{
    OrderRepository, PaymentRepository, ProviderClient, TenantRepository, WebhookEventStore,
};

/// Arc-wrapped ports shared across all routes. Cloned per request;
/// handlers are constructed on demand from the shared ports.
#[derive(Clone)]
pub struct AppState {
    pub tenants: Arc<dyn TenantRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub events: Arc<dyn WebhookEventStore>,
    pub provider: Arc<dyn ProviderClient>,
    /// Fallback webhook callback base URL for tenants without one.
    pub default_webhook_base_url: Option<String>,
}

impl AppState {
    pub fn ingest_webhook_handler(&self) -> IngestWebhookHandler {
        IngestWebhookHandler::new(
            TenantSecretResolver::new(self.tenants.clone()),
            self.events.clone(),
            self.orders.clone(),
            StateReconciler::new(self.orders.clone(), self.payments.clone()),
        )
    }

    pub fn create_checkout_handler(&self) -> CreateCheckoutHandler {
        CreateCheckoutHandler::new(
            self.tenants.clone(),
            self.orders.clone(),
            self.payments.clone(),
            self.provider.clone(),
        )
    }

    pub fn order_actions_handler(&self) -> OrderActionsHandler {
        OrderActionsHandler::new(
            self.tenants.clone(),
            self.orders.clone(),
            self.provider.clone(),
        )
    }

    pub fn register_webhook_handler(&self) -> RegisterWebhookHandler {
        RegisterWebhookHandler::new(
            self.tenants.clone(),
            self.provider.clone(),
            self.default_webhook_base_url.clone(),
        )
    }

    pub fn rotate_secret_handler(&self) -> RotateSecretHandler {
        RotateSecretHandler::new(self.tenants.clone(), self.provider.clone())
    }

    pub fn get_webhook_config_handler(&self) -> GetWebhookConfigHandler {
        GetWebhookConfigHandler::new(self.tenants.clone())
    }
}
