//! Application layer.

pub mod handlers;
