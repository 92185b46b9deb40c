//! Order summary shown at checkout.

use crate::cart::Cart;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Flat shipping charged on any non-empty order, in USD.
pub const FLAT_SHIPPING_USD: i64 = 15;

/// Pricing breakdown for a cart, in USD.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
    /// Number of units.
    pub item_count: u64,
}

impl OrderSummary {
    /// Summarise a cart. An empty cart ships for free.
    pub fn for_cart(cart: &Cart) -> Self {
        let subtotal = cart.subtotal();
        let shipping = if cart.is_empty() {
            Money::usd(0)
        } else {
            Money::usd(FLAT_SHIPPING_USD)
        };
        let total = Money::new(
            subtotal.amount_cents.saturating_add(shipping.amount_cents),
            subtotal.currency,
        );
        Self {
            subtotal,
            shipping,
            total,
            item_count: cart.item_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;
    use std::num::NonZeroU32;

    #[test]
    fn test_empty_cart_summary() {
        let summary = OrderSummary::for_cart(&Cart::new());
        assert_eq!(summary.shipping, Money::usd(0));
        assert_eq!(summary.total, Money::usd(0));
    }

    #[test]
    fn test_summary_adds_flat_shipping() {
        let catalog = Catalog::global();
        let mut cart = Cart::new();
        let choker = catalog.product(&ProductId::new("prod-6")).unwrap().clone();
        cart.add_item(choker, NonZeroU32::new(2).unwrap());

        let summary = OrderSummary::for_cart(&cart);
        assert_eq!(summary.subtotal, Money::usd(550));
        assert_eq!(summary.shipping, Money::usd(15));
        assert_eq!(summary.total, Money::usd(565));
        assert_eq!(summary.item_count, 2);
    }
}
