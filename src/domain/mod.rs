//! Domain layer - business logic with no infrastructure dependencies.
//!
//! Organized by bounded context:
//! - `tenant` - merchant accounts and per-environment provider credentials
//! - `checkout` - orders, payments, webhook verification and reconciliation

pub mod checkout;
pub mod tenant;
