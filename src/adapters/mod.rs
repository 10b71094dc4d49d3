//! Infrastructure adapters implementing the ports.

pub mod http;
pub mod postgres;
pub mod provider;
