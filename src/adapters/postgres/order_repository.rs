//! PostgreSQL implementation of OrderRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::checkout::{CaptureMode, Order, OrderLineItem, OrderState};
use crate::ports::{NewOrder, OrderRepository, StoreError};

pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_items(&self, order_id: Uuid) -> Result<Vec<OrderLineItem>, StoreError> {
        let rows: Vec<OrderItemRow> = sqlx::query_as(
            r#"
            SELECT name, quantity, unit_price_minor, total_amount_minor, image_url
            FROM order_items
            WHERE order_id = $1
            ORDER BY position
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderLineItem::from).collect())
    }

    async fn hydrate(&self, row: OrderRow) -> Result<Order, StoreError> {
        let items = self.load_items(row.id).await?;
        let mut order = Order::try_from(row)?;
        order.items = items;
        Ok(order)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    tenant_id: Option<String>,
    order_number: String,
    provider_order_id: String,
    provider_public_token: Option<String>,
    customer_email: Option<String>,
    total_amount_minor: i64,
    currency: String,
    capture_mode: String,
    state: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    name: String,
    quantity: i32,
    unit_price_minor: i64,
    total_amount_minor: i64,
    image_url: Option<String>,
}

impl From<OrderItemRow> for OrderLineItem {
    fn from(row: OrderItemRow) -> Self {
        OrderLineItem {
            name: row.name,
            quantity: row.quantity,
            unit_price_minor: row.unit_price_minor,
            total_amount_minor: row.total_amount_minor,
            image_url: row.image_url,
        }
    }
}

impl TryFrom<OrderRow> for Order {
    type Error = StoreError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let state = OrderState::parse(&row.state)
            .ok_or_else(|| StoreError::Database(format!("invalid order state: {}", row.state)))?;
        let capture_mode = CaptureMode::parse(&row.capture_mode).ok_or_else(|| {
            StoreError::Database(format!("invalid capture mode: {}", row.capture_mode))
        })?;

        Ok(Order {
            id: row.id,
            tenant_id: row.tenant_id,
            order_number: row.order_number,
            provider_order_id: row.provider_order_id,
            provider_public_token: row.provider_public_token,
            customer_email: row.customer_email,
            total_amount_minor: row.total_amount_minor,
            currency: row.currency,
            capture_mode,
            state,
            items: Vec::new(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, new_order: NewOrder) -> Result<Order, StoreError> {
        let id = Uuid::new_v4();

        let row: OrderRow = sqlx::query_as(
            r#"
            INSERT INTO orders (
                id, tenant_id, order_number, provider_order_id, provider_public_token,
                customer_email, total_amount_minor, currency, capture_mode, state
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'CREATED')
            RETURNING id, tenant_id, order_number, provider_order_id, provider_public_token,
                      customer_email, total_amount_minor, currency, capture_mode, state,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&new_order.tenant_id)
        .bind(&new_order.order_number)
        .bind(&new_order.provider_order_id)
        .bind(&new_order.provider_public_token)
        .bind(&new_order.customer_email)
        .bind(new_order.total_amount_minor)
        .bind(&new_order.currency)
        .bind(new_order.capture_mode.as_str())
        .fetch_one(&self.pool)
        .await?;

        for (position, item) in new_order.items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_items (
                    id, order_id, position, name, quantity,
                    unit_price_minor, total_amount_minor, image_url
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(id)
            .bind(position as i32)
            .bind(&item.name)
            .bind(item.quantity)
            .bind(item.unit_price_minor)
            .bind(item.total_amount_minor)
            .bind(&item.image_url)
            .execute(&self.pool)
            .await?;
        }

        let mut order = Order::try_from(row)?;
        order.items = new_order.items;
        Ok(order)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, StoreError> {
        let row: Option<OrderRow> = sqlx::query_as(
            r#"
            SELECT id, tenant_id, order_number, provider_order_id, provider_public_token,
                   customer_email, total_amount_minor, currency, capture_mode, state,
                   created_at, updated_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_provider_order_id(
        &self,
        provider_order_id: &str,
    ) -> Result<Option<Order>, StoreError> {
        let row: Option<OrderRow> = sqlx::query_as(
            r#"
            SELECT id, tenant_id, order_number, provider_order_id, provider_public_token,
                   customer_email, total_amount_minor, currency, capture_mode, state,
                   created_at, updated_at
            FROM orders
            WHERE provider_order_id = $1
            "#,
        )
        .bind(provider_order_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn update_state(
        &self,
        provider_order_id: &str,
        state: OrderState,
    ) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE orders
            SET state = $2, updated_at = now()
            WHERE provider_order_id = $1
            "#,
        )
        .bind(provider_order_id)
        .bind(state.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
