//! Paylane - Multi-Tenant Checkout Integration
//!
//! This crate integrates provider-hosted checkout orders with local
//! order/payment state, reconciled asynchronously through signed webhooks.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
