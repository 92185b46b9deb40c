//! Shopping cart module.
//!
//! Contains the cart state machine and the order summary derived from it.

mod cart;
mod pricing;

pub use cart::{parse_quantity_input, Cart, CartAction, CartItem};
pub use pricing::{OrderSummary, FLAT_SHIPPING_USD};
