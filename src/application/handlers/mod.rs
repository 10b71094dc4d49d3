//! Application handlers - use-case orchestration over domain and ports.

pub mod admin;
pub mod checkout;
pub mod webhook;

#[cfg(test)]
pub mod test_support;
