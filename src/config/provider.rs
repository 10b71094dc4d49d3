//! Payment provider configuration (Revolut Merchant API)

use serde::Deserialize;

use super::error::ValidationError;

/// Payment provider configuration.
///
/// Per-tenant credentials (API keys, signing secrets) live in the database;
/// this section only carries process-wide settings for the Merchant API.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Merchant API version sent with every request
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Base URL for sandbox merchant accounts
    #[serde(default = "default_sandbox_base_url")]
    pub sandbox_base_url: String,

    /// Base URL for live merchant accounts
    #[serde(default = "default_live_base_url")]
    pub live_base_url: String,

    /// Default public base URL for webhook callbacks, used when a tenant
    /// has no webhook_base_url of its own
    pub default_webhook_base_url: Option<String>,
}

impl ProviderConfig {
    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for url in [&self.sandbox_base_url, &self.live_base_url] {
            if !url.starts_with("https://") {
                return Err(ValidationError::InsecureProviderUrl);
            }
        }
        // API versions are dates, e.g. "2024-09-01"
        if self.api_version.len() != 10 || self.api_version.matches('-').count() != 2 {
            return Err(ValidationError::InvalidApiVersion);
        }
        Ok(())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
            sandbox_base_url: default_sandbox_base_url(),
            live_base_url: default_live_base_url(),
            default_webhook_base_url: None,
        }
    }
}

fn default_api_version() -> String {
    "2024-09-01".to_string()
}

fn default_sandbox_base_url() -> String {
    "https://sandbox-merchant.revolut.com".to_string()
}

fn default_live_base_url() -> String {
    "https://merchant.revolut.com".to_string()
}
