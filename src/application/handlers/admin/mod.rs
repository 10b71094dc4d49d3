//! Admin handlers for webhook credential management.

mod get_webhook_config;
mod masking;
mod register_webhook;
mod rotate_secret;

pub use get_webhook_config::{EnvWebhookConfig, GetWebhookConfigHandler, WebhookConfigView};
pub use masking::mask_secret;
pub use register_webhook::{
    RegisterWebhookCommand, RegisterWebhookHandler, WebhookRegistered, SUBSCRIBED_EVENTS,
};
pub use rotate_secret::{
    RotateSecretCommand, RotateSecretHandler, SecretRotated, DEFAULT_EXPIRATION_PERIOD,
};
