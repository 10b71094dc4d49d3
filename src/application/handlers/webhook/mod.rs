//! Webhook ingestion handlers.

mod ingest_webhook;
mod secret_resolver;

#[cfg(test)]
pub mod test_support;

pub use ingest_webhook::{IngestReport, IngestWebhookCommand, IngestWebhookHandler};
pub use secret_resolver::TenantSecretResolver;
