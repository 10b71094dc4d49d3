//! Outbound adapter for the payment provider's Merchant API.

mod client;

pub use client::RevolutClient;
