//! Order actions - pass-throughs to the provider's Merchant API.
//!
//! Capture, cancel and refund only instruct the provider; local order
//! and payment state changes arrive exclusively through webhooks.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::domain::checkout::{CheckoutError, Order};
use crate::domain::tenant::{Environment, TenantError};
use crate::ports::{OrderRepository, ProviderClient, TenantRepository};

pub struct OrderActionsHandler {
    tenants: Arc<dyn TenantRepository>,
    orders: Arc<dyn OrderRepository>,
    provider: Arc<dyn ProviderClient>,
}

/// Local order paired with the provider's live view of it.
#[derive(Debug)]
pub struct OrderView {
    pub order: Order,
    pub provider_state: Value,
}

impl OrderActionsHandler {
    pub fn new(
        tenants: Arc<dyn TenantRepository>,
        orders: Arc<dyn OrderRepository>,
        provider: Arc<dyn ProviderClient>,
    ) -> Self {
        Self {
            tenants,
            orders,
            provider,
        }
    }

    pub async fn get(&self, order_id: Uuid, env: Environment) -> Result<OrderView, CheckoutError> {
        let (order, api_key) = self.order_and_key(order_id, env).await?;
        let provider_state = self
            .provider
            .retrieve_order(env, &api_key, &order.provider_order_id)
            .await?;
        Ok(OrderView {
            order,
            provider_state,
        })
    }

    pub async fn capture(
        &self,
        order_id: Uuid,
        env: Environment,
        amount_minor: Option<i64>,
    ) -> Result<Value, CheckoutError> {
        let (order, api_key) = self.order_and_key(order_id, env).await?;
        let result = self
            .provider
            .capture_order(env, &api_key, &order.provider_order_id, amount_minor)
            .await?;
        info!(order_id = %order_id, env = %env, "capture requested");
        Ok(result)
    }

    pub async fn cancel(&self, order_id: Uuid, env: Environment) -> Result<Value, CheckoutError> {
        let (order, api_key) = self.order_and_key(order_id, env).await?;
        let result = self
            .provider
            .cancel_order(env, &api_key, &order.provider_order_id)
            .await?;
        info!(order_id = %order_id, env = %env, "cancellation requested");
        Ok(result)
    }

    pub async fn refund(
        &self,
        order_id: Uuid,
        env: Environment,
        amount_minor: Option<i64>,
        description: Option<String>,
    ) -> Result<Value, CheckoutError> {
        let (order, api_key) = self.order_and_key(order_id, env).await?;
        let result = self
            .provider
            .refund_order(
                env,
                &api_key,
                &order.provider_order_id,
                amount_minor,
                description,
            )
            .await?;
        info!(order_id = %order_id, env = %env, "refund requested");
        Ok(result)
    }

    async fn order_and_key(
        &self,
        order_id: Uuid,
        env: Environment,
    ) -> Result<(Order, secrecy::SecretString), CheckoutError> {
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| CheckoutError::OrderNotFound(order_id.to_string()))?;

        let tenant_id = order.tenant_id.clone().ok_or_else(|| {
            CheckoutError::InvalidRequest(format!("order {order_id} has no tenant"))
        })?;

        let tenant = self
            .tenants
            .find_by_id(&tenant_id)
            .await?
            .ok_or(TenantError::NotFound(tenant_id))?;

        let api_key = tenant.api_key(env)?.clone();
        Ok((order, api_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::MockProviderClient;
    use crate::application::handlers::webhook::test_support::{
        tenant_with_secrets, MockOrderRepo, MockTenantRepo,
    };

    async fn fixture() -> (OrderActionsHandler, Arc<MockProviderClient>, Uuid) {
        let tenants = Arc::new(MockTenantRepo::with_tenant(tenant_with_secrets(
            "t1",
            Some("wsk_s"),
            Some("wsk_l"),
        )));
        let orders = Arc::new(MockOrderRepo::with_order("ord_1"));
        let provider = Arc::new(MockProviderClient::default());
        let order_id = orders
            .find_by_provider_order_id("ord_1")
            .await
            .unwrap()
            .unwrap()
            .id;
        (
            OrderActionsHandler::new(tenants, orders, provider.clone()),
            provider,
            order_id,
        )
    }

    #[tokio::test]
    async fn capture_passes_through_to_provider() {
        let (handler, provider, order_id) = fixture().await;

        handler
            .capture(order_id, Environment::Sandbox, Some(2500))
            .await
            .unwrap();

        let actions = provider.actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].action, "capture");
        assert_eq!(actions[0].provider_order_id, "ord_1");
        assert_eq!(actions[0].amount_minor, Some(2500));
    }

    #[tokio::test]
    async fn get_returns_local_and_provider_views() {
        let (handler, _, order_id) = fixture().await;

        let view = handler.get(order_id, Environment::Sandbox).await.unwrap();
        assert_eq!(view.order.provider_order_id, "ord_1");
        assert_eq!(
            view.provider_state.get("id").and_then(Value::as_str),
            Some("ord_1")
        );
    }

    #[tokio::test]
    async fn unknown_order_is_not_found() {
        let (handler, provider, _) = fixture().await;

        let err = handler
            .cancel(Uuid::new_v4(), Environment::Sandbox)
            .await
            .unwrap_err();
        assert!(matches!(err, CheckoutError::OrderNotFound(_)));
        assert!(provider.actions().is_empty());
    }

    #[tokio::test]
    async fn refund_forwards_amount_and_description() {
        let (handler, provider, order_id) = fixture().await;

        handler
            .refund(
                order_id,
                Environment::Live,
                Some(1000),
                Some("damaged item".to_string()),
            )
            .await
            .unwrap();

        let actions = provider.actions();
        assert_eq!(actions[0].action, "refund");
        assert_eq!(actions[0].env, Environment::Live);
        assert_eq!(actions[0].amount_minor, Some(1000));
    }

    #[tokio::test]
    async fn provider_failure_maps_to_bad_gateway() {
        let tenants = Arc::new(MockTenantRepo::with_tenant(tenant_with_secrets(
            "t1",
            Some("wsk_s"),
            None,
        )));
        let orders = Arc::new(MockOrderRepo::with_order("ord_1"));
        let provider = Arc::new(MockProviderClient::failing());
        let order_id = orders
            .find_by_provider_order_id("ord_1")
            .await
            .unwrap()
            .unwrap()
            .id;
        let handler = OrderActionsHandler::new(tenants, orders, provider);

        let err = handler
            .capture(order_id, Environment::Sandbox, None)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 502);
    }
}
