//! PostgreSQL implementation of PaymentRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::checkout::{Payment, PaymentMethod, PaymentStatus, TimestampField};
use crate::ports::{NewPayment, PaymentRepository, StoreError};

pub struct PostgresPaymentRepository {
    pool: PgPool,
}

impl PostgresPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: Uuid,
    order_id: Uuid,
    provider_order_id: String,
    amount_minor: i64,
    currency: String,
    method: String,
    status: String,
    authorised_at: Option<DateTime<Utc>>,
    captured_at: Option<DateTime<Utc>>,
    cancelled_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = StoreError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        let status = PaymentStatus::parse(&row.status).ok_or_else(|| {
            StoreError::Database(format!("invalid payment status: {}", row.status))
        })?;
        let method = PaymentMethod::parse(&row.method).ok_or_else(|| {
            StoreError::Database(format!("invalid payment method: {}", row.method))
        })?;

        Ok(Payment {
            id: row.id,
            order_id: row.order_id,
            provider_order_id: row.provider_order_id,
            amount_minor: row.amount_minor,
            currency: row.currency,
            method,
            status,
            authorised_at: row.authorised_at,
            captured_at: row.captured_at,
            cancelled_at: row.cancelled_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const SELECT_COLUMNS: &str = "id, order_id, provider_order_id, amount_minor, currency, \
     method, status, authorised_at, captured_at, cancelled_at, created_at, updated_at";

/// One static UPDATE per lifecycle column. `COALESCE(col, now())`
/// keeps the first stamp: a redelivery after the original delivery
/// does not move the recorded time.
fn update_sql(stamp: TimestampField) -> &'static str {
    match stamp {
        TimestampField::AuthorisedAt => {
            r#"
            UPDATE payments
            SET status = $2,
                authorised_at = COALESCE(authorised_at, now()),
                updated_at = now()
            WHERE provider_order_id = $1
            "#
        }
        TimestampField::CapturedAt => {
            r#"
            UPDATE payments
            SET status = $2,
                captured_at = COALESCE(captured_at, now()),
                updated_at = now()
            WHERE provider_order_id = $1
            "#
        }
        TimestampField::CancelledAt => {
            r#"
            UPDATE payments
            SET status = $2,
                cancelled_at = COALESCE(cancelled_at, now()),
                updated_at = now()
            WHERE provider_order_id = $1
            "#
        }
    }
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepository {
    async fn create(&self, new_payment: NewPayment) -> Result<Payment, StoreError> {
        let row: PaymentRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO payments (
                id, order_id, provider_order_id, amount_minor, currency, method, status
            ) VALUES ($1, $2, $3, $4, $5, $6, 'INITIATED')
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(new_payment.order_id)
        .bind(&new_payment.provider_order_id)
        .bind(new_payment.amount_minor)
        .bind(&new_payment.currency)
        .bind(new_payment.method.as_str())
        .fetch_one(&self.pool)
        .await?;

        Payment::try_from(row)
    }

    async fn find_by_provider_order_id(
        &self,
        provider_order_id: &str,
    ) -> Result<Option<Payment>, StoreError> {
        let row: Option<PaymentRow> = sqlx::query_as(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM payments
            WHERE provider_order_id = $1
            "#
        ))
        .bind(provider_order_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Payment::try_from).transpose()
    }

    async fn update_status(
        &self,
        provider_order_id: &str,
        status: PaymentStatus,
        stamp: TimestampField,
    ) -> Result<u64, StoreError> {
        let result = sqlx::query(update_sql(stamp))
            .bind(provider_order_id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
