//! Tenant aggregate - merchant account with per-environment provider credentials.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::TenantError;

/// Payment provider environment a credential set belongs to.
///
/// Sandbox and live credentials are fully isolated: resolution never
/// falls back from one environment to the other. A valid signature
/// computed with a sandbox secret must fail against the live endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Sandbox,
    Live,
}

impl Environment {
    /// Parse an environment tag. Unknown tags are `None`; callers decide
    /// whether absence means sandbox.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sandbox" => Some(Self::Sandbox),
            "live" => Some(Self::Live),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider credentials for one environment of a tenant.
///
/// All three fields are provisioned out-of-band: the API key by the
/// merchant, the webhook id and signing secret by the admin registrar.
/// A signing secret is only meaningful once a webhook has been
/// registered for the environment.
#[derive(Clone, Default)]
pub struct EnvCredentials {
    /// Merchant API secret key (Bearer token for provider calls).
    pub api_key: Option<SecretString>,

    /// Identifier of the webhook registered with the provider.
    pub webhook_id: Option<String>,

    /// Webhook signing secret issued at registration or rotation.
    pub signing_secret: Option<SecretString>,
}

impl fmt::Debug for EnvCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvCredentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("webhook_id", &self.webhook_id)
            .field(
                "signing_secret",
                &self.signing_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Tenant - a merchant account in the multi-tenant checkout integration.
#[derive(Debug, Clone)]
pub struct Tenant {
    /// Tenant identifier, referenced by the webhook callback URL.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Public base URL used when building webhook callback URLs.
    pub webhook_base_url: Option<String>,

    /// Sandbox credentials.
    pub sandbox: EnvCredentials,

    /// Live credentials.
    pub live: EnvCredentials,
}

impl Tenant {
    /// Credentials for the given environment.
    pub fn credentials(&self, env: Environment) -> &EnvCredentials {
        match env {
            Environment::Sandbox => &self.sandbox,
            Environment::Live => &self.live,
        }
    }

    /// Mutable credentials for the given environment.
    pub fn credentials_mut(&mut self, env: Environment) -> &mut EnvCredentials {
        match env {
            Environment::Sandbox => &mut self.sandbox,
            Environment::Live => &mut self.live,
        }
    }

    /// The webhook signing secret for the given environment.
    ///
    /// An absent OR empty secret is `SecretNotConfigured`: an empty
    /// string must never be used as an HMAC key.
    pub fn signing_secret(&self, env: Environment) -> Result<&SecretString, TenantError> {
        self.credentials(env)
            .signing_secret
            .as_ref()
            .filter(|s| !s.expose_secret().is_empty())
            .ok_or_else(|| TenantError::SecretNotConfigured {
                tenant_id: self.id.clone(),
                env,
            })
    }

    /// The provider API key for the given environment.
    pub fn api_key(&self, env: Environment) -> Result<&SecretString, TenantError> {
        self.credentials(env)
            .api_key
            .as_ref()
            .filter(|s| !s.expose_secret().is_empty())
            .ok_or_else(|| TenantError::ApiKeyNotConfigured {
                tenant_id: self.id.clone(),
                env,
            })
    }

    /// The registered webhook id for the given environment.
    pub fn webhook_id(&self, env: Environment) -> Result<&str, TenantError> {
        self.credentials(env)
            .webhook_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| TenantError::WebhookNotRegistered {
                tenant_id: self.id.clone(),
                env,
            })
    }
}
