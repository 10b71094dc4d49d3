//! Checkout and order-action handlers.

mod create_checkout;
mod order_actions;

pub use create_checkout::{CartItem, CheckoutCreated, CreateCheckoutCommand, CreateCheckoutHandler};
pub use order_actions::{OrderActionsHandler, OrderView};
