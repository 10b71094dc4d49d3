//! PostgreSQL implementation of TenantRepository.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use sqlx::PgPool;

use crate::domain::tenant::{EnvCredentials, Environment, Tenant};
use crate::ports::{StoreError, TenantRepository};

pub struct PostgresTenantRepository {
    pool: PgPool,
}

impl PostgresTenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TenantRow {
    id: String,
    name: String,
    webhook_base_url: Option<String>,
    sandbox_api_key: Option<String>,
    sandbox_webhook_id: Option<String>,
    sandbox_signing_secret: Option<String>,
    live_api_key: Option<String>,
    live_webhook_id: Option<String>,
    live_signing_secret: Option<String>,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        let secret = |s: Option<String>| s.map(SecretString::new);
        Tenant {
            id: row.id,
            name: row.name,
            webhook_base_url: row.webhook_base_url,
            sandbox: EnvCredentials {
                api_key: secret(row.sandbox_api_key),
                webhook_id: row.sandbox_webhook_id,
                signing_secret: secret(row.sandbox_signing_secret),
            },
            live: EnvCredentials {
                api_key: secret(row.live_api_key),
                webhook_id: row.live_webhook_id,
                signing_secret: secret(row.live_signing_secret),
            },
        }
    }
}

#[async_trait]
impl TenantRepository for PostgresTenantRepository {
    async fn find_by_id(&self, tenant_id: &str) -> Result<Option<Tenant>, StoreError> {
        let row: Option<TenantRow> = sqlx::query_as(
            r#"
            SELECT id, name, webhook_base_url,
                   sandbox_api_key, sandbox_webhook_id, sandbox_signing_secret,
                   live_api_key, live_webhook_id, live_signing_secret
            FROM tenants
            WHERE id = $1
            "#,
        )
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Tenant::from))
    }

    async fn update_webhook_registration(
        &self,
        tenant_id: &str,
        env: Environment,
        webhook_id: &str,
        signing_secret: &SecretString,
    ) -> Result<(), StoreError> {
        // Static SQL per environment keeps the queries bind-only.
        let sql = match env {
            Environment::Sandbox => {
                r#"
                UPDATE tenants
                SET sandbox_webhook_id = $2,
                    sandbox_signing_secret = $3,
                    updated_at = now()
                WHERE id = $1
                "#
            }
            Environment::Live => {
                r#"
                UPDATE tenants
                SET live_webhook_id = $2,
                    live_signing_secret = $3,
                    updated_at = now()
                WHERE id = $1
                "#
            }
        };

        let result = sqlx::query(sql)
            .bind(tenant_id)
            .bind(webhook_id)
            .bind(signing_secret.expose_secret())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Database(format!(
                "tenant {tenant_id} not found"
            )));
        }
        Ok(())
    }

    async fn update_signing_secret(
        &self,
        tenant_id: &str,
        env: Environment,
        signing_secret: &SecretString,
    ) -> Result<(), StoreError> {
        let sql = match env {
            Environment::Sandbox => {
                r#"
                UPDATE tenants
                SET sandbox_signing_secret = $2, updated_at = now()
                WHERE id = $1
                "#
            }
            Environment::Live => {
                r#"
                UPDATE tenants
                SET live_signing_secret = $2, updated_at = now()
                WHERE id = $1
                "#
            }
        };

        let result = sqlx::query(sql)
            .bind(tenant_id)
            .bind(signing_secret.expose_secret())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Database(format!(
                "tenant {tenant_id} not found"
            )));
        }
        Ok(())
    }
}
