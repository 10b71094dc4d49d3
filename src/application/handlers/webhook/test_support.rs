//! Shared mock ports for application-layer tests.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use secrecy::SecretString;
use uuid::Uuid;

use crate::domain::checkout::{
    CaptureMode, Order, OrderState, Payment, PaymentStatus, TimestampField,
};
use crate::domain::tenant::{EnvCredentials, Environment, Tenant};
use crate::ports::{
    NewOrder, NewPayment, NewWebhookEvent, OrderRepository, PaymentRepository, StoreError,
    TenantRepository, WebhookEventStore,
};

pub fn tenant_with_secrets(
    id: &str,
    sandbox_secret: Option<&str>,
    live_secret: Option<&str>,
) -> Tenant {
    let creds = |secret: Option<&str>| EnvCredentials {
        api_key: Some(SecretString::new(format!("sk_{id}"))),
        webhook_id: Some(format!("wh_{id}")),
        signing_secret: secret.map(|s| SecretString::new(s.to_string())),
    };
    Tenant {
        id: id.to_string(),
        name: format!("Tenant {id}"),
        webhook_base_url: Some("https://shop.example.com".to_string()),
        sandbox: creds(sandbox_secret),
        live: creds(live_secret),
    }
}

pub fn order_fixture(provider_order_id: &str) -> Order {
    let now = Utc::now();
    Order {
        id: Uuid::new_v4(),
        tenant_id: Some("t1".to_string()),
        order_number: "ORD-1".to_string(),
        provider_order_id: provider_order_id.to_string(),
        provider_public_token: Some("tok_1".to_string()),
        customer_email: Some("buyer@example.com".to_string()),
        total_amount_minor: 2500,
        currency: "GBP".to_string(),
        capture_mode: CaptureMode::Automatic,
        state: OrderState::Created,
        items: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Mock Repositories
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct MockTenantRepo {
    tenants: RwLock<HashMap<String, Tenant>>,
    pub registration_updates: Mutex<Vec<(String, Environment, String, String)>>,
    pub secret_updates: Mutex<Vec<(String, Environment, String)>>,
}

impl MockTenantRepo {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_tenant(tenant: Tenant) -> Self {
        let repo = Self::default();
        repo.tenants
            .write()
            .unwrap()
            .insert(tenant.id.clone(), tenant);
        repo
    }
}

#[async_trait]
impl TenantRepository for MockTenantRepo {
    async fn find_by_id(&self, tenant_id: &str) -> Result<Option<Tenant>, StoreError> {
        Ok(self.tenants.read().unwrap().get(tenant_id).cloned())
    }

    async fn update_webhook_registration(
        &self,
        tenant_id: &str,
        env: Environment,
        webhook_id: &str,
        signing_secret: &SecretString,
    ) -> Result<(), StoreError> {
        use secrecy::ExposeSecret;
        let mut tenants = self.tenants.write().unwrap();
        if let Some(tenant) = tenants.get_mut(tenant_id) {
            let creds = tenant.credentials_mut(env);
            creds.webhook_id = Some(webhook_id.to_string());
            creds.signing_secret = Some(signing_secret.clone());
        }
        self.registration_updates.lock().unwrap().push((
            tenant_id.to_string(),
            env,
            webhook_id.to_string(),
            signing_secret.expose_secret().to_string(),
        ));
        Ok(())
    }

    async fn update_signing_secret(
        &self,
        tenant_id: &str,
        env: Environment,
        signing_secret: &SecretString,
    ) -> Result<(), StoreError> {
        use secrecy::ExposeSecret;
        let mut tenants = self.tenants.write().unwrap();
        if let Some(tenant) = tenants.get_mut(tenant_id) {
            tenant.credentials_mut(env).signing_secret = Some(signing_secret.clone());
        }
        self.secret_updates.lock().unwrap().push((
            tenant_id.to_string(),
            env,
            signing_secret.expose_secret().to_string(),
        ));
        Ok(())
    }
}

#[derive(Default)]
pub struct MockOrderRepo {
    orders: RwLock<HashMap<String, Order>>,
    created: Mutex<Vec<NewOrder>>,
    state_updates: Mutex<Vec<(String, OrderState)>>,
    fail_find: bool,
}

impl MockOrderRepo {
    pub fn with_order(provider_order_id: &str) -> Self {
        let repo = Self::default();
        repo.orders
            .write()
            .unwrap()
            .insert(provider_order_id.to_string(), order_fixture(provider_order_id));
        repo
    }

    pub fn failing_find() -> Self {
        Self {
            fail_find: true,
            ..Self::default()
        }
    }

    pub fn state_updates(&self) -> Vec<(String, OrderState)> {
        self.state_updates.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<NewOrder> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderRepository for MockOrderRepo {
    async fn create(&self, new_order: NewOrder) -> Result<Order, StoreError> {
        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            tenant_id: new_order.tenant_id.clone(),
            order_number: new_order.order_number.clone(),
            provider_order_id: new_order.provider_order_id.clone(),
            provider_public_token: new_order.provider_public_token.clone(),
            customer_email: new_order.customer_email.clone(),
            total_amount_minor: new_order.total_amount_minor,
            currency: new_order.currency.clone(),
            capture_mode: new_order.capture_mode,
            state: OrderState::Created,
            items: new_order.items.clone(),
            created_at: now,
            updated_at: now,
        };
        self.orders
            .write()
            .unwrap()
            .insert(order.provider_order_id.clone(), order.clone());
        self.created.lock().unwrap().push(new_order);
        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, StoreError> {
        Ok(self
            .orders
            .read()
            .unwrap()
            .values()
            .find(|o| o.id == id)
            .cloned())
    }

    async fn find_by_provider_order_id(
        &self,
        provider_order_id: &str,
    ) -> Result<Option<Order>, StoreError> {
        if self.fail_find {
            return Err(StoreError::Database("lookup failed".to_string()));
        }
        Ok(self.orders.read().unwrap().get(provider_order_id).cloned())
    }

    async fn update_state(
        &self,
        provider_order_id: &str,
        state: OrderState,
    ) -> Result<u64, StoreError> {
        self.state_updates
            .lock()
            .unwrap()
            .push((provider_order_id.to_string(), state));
        let mut orders = self.orders.write().unwrap();
        match orders.get_mut(provider_order_id) {
            Some(order) => {
                order.state = state;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[derive(Default)]
pub struct MockPaymentRepo {
    payments: RwLock<HashMap<String, Payment>>,
    created: Mutex<Vec<NewPayment>>,
    status_updates: Mutex<Vec<(String, PaymentStatus, TimestampField)>>,
}

impl MockPaymentRepo {
    pub fn status_updates(&self) -> Vec<(String, PaymentStatus, TimestampField)> {
        self.status_updates.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<NewPayment> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentRepository for MockPaymentRepo {
    async fn create(&self, new_payment: NewPayment) -> Result<Payment, StoreError> {
        let now = Utc::now();
        let payment = Payment {
            id: Uuid::new_v4(),
            order_id: new_payment.order_id,
            provider_order_id: new_payment.provider_order_id.clone(),
            amount_minor: new_payment.amount_minor,
            currency: new_payment.currency.clone(),
            method: new_payment.method,
            status: PaymentStatus::Initiated,
            authorised_at: None,
            captured_at: None,
            cancelled_at: None,
            created_at: now,
            updated_at: now,
        };
        self.payments
            .write()
            .unwrap()
            .insert(payment.provider_order_id.clone(), payment.clone());
        self.created.lock().unwrap().push(new_payment);
        Ok(payment)
    }

    async fn find_by_provider_order_id(
        &self,
        provider_order_id: &str,
    ) -> Result<Option<Payment>, StoreError> {
        Ok(self.payments.read().unwrap().get(provider_order_id).cloned())
    }

    async fn update_status(
        &self,
        provider_order_id: &str,
        status: PaymentStatus,
        stamp: TimestampField,
    ) -> Result<u64, StoreError> {
        self.status_updates
            .lock()
            .unwrap()
            .push((provider_order_id.to_string(), status, stamp));
        let mut payments = self.payments.write().unwrap();
        match payments.get_mut(provider_order_id) {
            Some(payment) => {
                payment.status = status;
                let now = Utc::now();
                let slot = match stamp {
                    TimestampField::AuthorisedAt => &mut payment.authorised_at,
                    TimestampField::CapturedAt => &mut payment.captured_at,
                    TimestampField::CancelledAt => &mut payment.cancelled_at,
                };
                slot.get_or_insert(now);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

pub struct MockEventStore {
    recorded: Mutex<Vec<NewWebhookEvent>>,
    fail: bool,
}

impl Default for MockEventStore {
    fn default() -> Self {
        Self {
            recorded: Mutex::new(Vec::new()),
            fail: false,
        }
    }
}

impl MockEventStore {
    pub fn failing() -> Self {
        Self {
            recorded: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn recorded(&self) -> Vec<NewWebhookEvent> {
        self.recorded.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookEventStore for MockEventStore {
    async fn record(&self, event: NewWebhookEvent) -> Result<Uuid, StoreError> {
        if self.fail {
            return Err(StoreError::Database("insert failed".to_string()));
        }
        self.recorded.lock().unwrap().push(event);
        Ok(Uuid::new_v4())
    }
}
