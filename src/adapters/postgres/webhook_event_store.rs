//! PostgreSQL implementation of the append-only webhook audit store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::ports::{NewWebhookEvent, StoreError, WebhookEventStore};

pub struct PostgresWebhookEventStore {
    pool: PgPool,
}

impl PostgresWebhookEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WebhookEventStore for PostgresWebhookEventStore {
    async fn record(&self, event: NewWebhookEvent) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO webhook_events (
                id, tenant_id, provider, environment, event_type, provider_order_id,
                order_id, payload, signature_valid, payload_malformed
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(id)
        .bind(&event.tenant_id)
        .bind(&event.provider)
        .bind(event.environment.as_str())
        .bind(&event.event_type)
        .bind(&event.provider_order_id)
        .bind(event.order_id)
        .bind(&event.payload)
        .bind(event.signature_valid)
        .bind(event.payload_malformed)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }
}
