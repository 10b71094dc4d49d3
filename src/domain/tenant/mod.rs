//! Tenant bounded context.
//!
//! A tenant is a merchant account holding provider credentials per
//! environment (sandbox/live). Credentials are written only by the admin
//! registrar/rotator; the webhook path reads them through
//! [`Tenant::signing_secret`], which never falls back across environments.

mod aggregate;
mod errors;

pub use aggregate::{EnvCredentials, Environment, Tenant};
pub use errors::TenantError;
