//! Request/response types for the webhook endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::tenant::Environment;

/// Query parameters on the webhook callback URL, as registered with
/// the provider.
#[derive(Debug, Deserialize)]
pub struct WebhookQuery {
    pub tenant_id: String,
    /// Anything other than `live` is treated as sandbox, matching the
    /// URL shape handed to the provider at registration.
    pub env: Option<String>,
}

impl WebhookQuery {
    pub fn environment(&self) -> Environment {
        self.env
            .as_deref()
            .and_then(Environment::parse)
            .unwrap_or_default()
    }
}

/// Body returned to the provider on successful ingestion.
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_defaults_to_sandbox() {
        let query = WebhookQuery {
            tenant_id: "t1".into(),
            env: None,
        };
        assert_eq!(query.environment(), Environment::Sandbox);
    }

    #[test]
    fn unknown_env_tag_falls_back_to_sandbox() {
        let query = WebhookQuery {
            tenant_id: "t1".into(),
            env: Some("staging".into()),
        };
        assert_eq!(query.environment(), Environment::Sandbox);
    }

    #[test]
    fn live_env_is_recognised() {
        let query = WebhookQuery {
            tenant_id: "t1".into(),
            env: Some("live".into()),
        };
        assert_eq!(query.environment(), Environment::Live);
    }
}
