//! Checkout creation - provider order plus local records.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::checkout::{CaptureMode, CheckoutError, OrderLineItem, PaymentMethod};
use crate::domain::tenant::{Environment, Tenant};
use crate::ports::{
    CreateProviderOrder, NewOrder, NewPayment, OrderRepository, PaymentRepository, ProviderClient,
    TenantRepository,
};

/// One cart line as submitted by the storefront. Prices are minor
/// units; totals are computed server-side, never trusted from input.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub name: String,
    pub quantity: i32,
    pub unit_price_minor: i64,
    pub image_url: Option<String>,
}

#[derive(Debug)]
pub struct CreateCheckoutCommand {
    pub tenant_id: String,
    pub env: Environment,
    pub currency: String,
    pub capture_mode: CaptureMode,
    pub customer_email: Option<String>,
    pub items: Vec<CartItem>,
}

/// Everything the storefront needs to mount the hosted widget.
#[derive(Debug)]
pub struct CheckoutCreated {
    pub internal_order_id: Uuid,
    pub order_number: String,
    pub provider_order_id: String,
    pub public_token: Option<String>,
    pub checkout_url: Option<String>,
    pub total_amount_minor: i64,
}

pub struct CreateCheckoutHandler {
    tenants: Arc<dyn TenantRepository>,
    orders: Arc<dyn OrderRepository>,
    payments: Arc<dyn PaymentRepository>,
    provider: Arc<dyn ProviderClient>,
}

impl CreateCheckoutHandler {
    pub fn new(
        tenants: Arc<dyn TenantRepository>,
        orders: Arc<dyn OrderRepository>,
        payments: Arc<dyn PaymentRepository>,
        provider: Arc<dyn ProviderClient>,
    ) -> Self {
        Self {
            tenants,
            orders,
            payments,
            provider,
        }
    }

    pub async fn handle(&self, cmd: CreateCheckoutCommand) -> Result<CheckoutCreated, CheckoutError> {
        let items = validate_items(&cmd.items)?;
        let total_amount_minor: i64 = items.iter().map(|i| i.total_amount_minor).sum();

        let tenant = self.find_tenant(&cmd.tenant_id).await?;
        // Env-scoped key only; a sandbox checkout never signs with a
        // live key or the reverse.
        let api_key = tenant.api_key(cmd.env)?.clone();

        let order_number = format!("ORD-{}", Utc::now().timestamp_millis());

        let provider_order = self
            .provider
            .create_order(
                cmd.env,
                &api_key,
                CreateProviderOrder {
                    amount_minor: total_amount_minor,
                    currency: cmd.currency.clone(),
                    capture_mode: cmd.capture_mode,
                    merchant_order_ext_ref: order_number.clone(),
                    customer_email: cmd.customer_email.clone(),
                    description: Some(describe_cart(&items)),
                },
            )
            .await?;

        let order = self
            .orders
            .create(NewOrder {
                tenant_id: Some(cmd.tenant_id.clone()),
                order_number: order_number.clone(),
                provider_order_id: provider_order.id.clone(),
                provider_public_token: provider_order.token.clone(),
                customer_email: cmd.customer_email,
                total_amount_minor,
                currency: cmd.currency.clone(),
                capture_mode: cmd.capture_mode,
                items,
            })
            .await?;

        self.payments
            .create(NewPayment {
                order_id: order.id,
                provider_order_id: provider_order.id.clone(),
                amount_minor: total_amount_minor,
                currency: cmd.currency,
                method: PaymentMethod::Card,
            })
            .await?;

        info!(
            tenant_id = %cmd.tenant_id,
            env = %cmd.env,
            order_number = %order_number,
            provider_order_id = %provider_order.id,
            amount_minor = total_amount_minor,
            "checkout created"
        );

        Ok(CheckoutCreated {
            internal_order_id: order.id,
            order_number,
            provider_order_id: provider_order.id,
            public_token: provider_order.token,
            checkout_url: provider_order.checkout_url,
            total_amount_minor,
        })
    }

    async fn find_tenant(&self, tenant_id: &str) -> Result<Tenant, CheckoutError> {
        self.tenants
            .find_by_id(tenant_id)
            .await?
            .ok_or_else(|| crate::domain::tenant::TenantError::NotFound(tenant_id.to_string()))
            .map_err(CheckoutError::from)
    }
}

fn validate_items(items: &[CartItem]) -> Result<Vec<OrderLineItem>, CheckoutError> {
    if items.is_empty() {
        return Err(CheckoutError::InvalidRequest("cart is empty".to_string()));
    }
    items
        .iter()
        .map(|item| {
            if item.name.trim().is_empty() {
                return Err(CheckoutError::InvalidRequest(
                    "line item name is empty".to_string(),
                ));
            }
            if item.quantity <= 0 {
                return Err(CheckoutError::InvalidRequest(format!(
                    "invalid quantity for {}",
                    item.name
                )));
            }
            if item.unit_price_minor < 0 {
                return Err(CheckoutError::InvalidRequest(format!(
                    "negative price for {}",
                    item.name
                )));
            }
            Ok(OrderLineItem {
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price_minor: item.unit_price_minor,
                total_amount_minor: item.unit_price_minor * i64::from(item.quantity),
                image_url: item.image_url.clone(),
            })
        })
        .collect()
}

fn describe_cart(items: &[OrderLineItem]) -> String {
    items
        .iter()
        .map(|i| format!("{} x{}", i.name, i.quantity))
        .collect::<Vec<_>>()
        .join(", ")
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
