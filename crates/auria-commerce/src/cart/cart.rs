//! Cart and cart item types.

use std::num::NonZeroU32;

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A transition of the cart state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add `quantity` units of a product, merging with an existing item.
    Add(Product, NonZeroU32),
    /// Delete the item for a product. Absent ids are ignored.
    Remove(ProductId),
    /// Set an item's quantity. Zero or below removes the item.
    SetQuantity(ProductId, i64),
    /// Empty the cart.
    Clear,
}

/// A product in the cart with its quantity (always at least 1).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Unit price times quantity.
    pub fn total(&self) -> Money {
        self.product.price.saturating_multiply(i64::from(self.quantity))
    }
}

/// A shopping cart.
///
/// Holds at most one item per product id, in first-added order. Every
/// transition is total: none of them can fail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a transition. This is the only path that mutates the cart.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Add(product, quantity) => {
                let quantity = quantity.get();
                if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
                    existing.quantity = existing.quantity.saturating_add(quantity);
                    debug!(product = %product.id, quantity = existing.quantity, "cart item incremented");
                } else {
                    debug!(product = %product.id, quantity, "cart item added");
                    self.items.push(CartItem { product, quantity });
                }
            }
            CartAction::Remove(id) => {
                let len_before = self.items.len();
                self.items.retain(|i| i.product.id != id);
                if self.items.len() < len_before {
                    debug!(product = %id, "cart item removed");
                }
            }
            CartAction::SetQuantity(id, quantity) => {
                if quantity <= 0 {
                    self.apply(CartAction::Remove(id));
                    return;
                }
                let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                if let Some(item) = self.items.iter_mut().find(|i| i.product.id == id) {
                    item.quantity = quantity;
                    debug!(product = %id, quantity, "cart quantity set");
                }
            }
            CartAction::Clear => {
                self.items.clear();
                debug!("cart cleared");
            }
        }
    }

    /// Add an item to the cart.
    pub fn add_item(&mut self, product: Product, quantity: NonZeroU32) {
        self.apply(CartAction::Add(product, quantity));
    }

    /// Remove an item from the cart.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.apply(CartAction::Remove(id.clone()));
    }

    /// Update item quantity. If quantity is <= 0, removes the item.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        self.apply(CartAction::SetQuantity(id.clone(), quantity));
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.apply(CartAction::Clear);
    }

    /// Items in first-added order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get an item by product id.
    pub fn get_item(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product.id == id)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get number of distinct products.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals, in USD.
    pub fn subtotal(&self) -> Money {
        let cents = self
            .items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.total().amount_cents));
        Money::new(cents, Currency::USD)
    }

    /// Line total for one product, if it is in the cart.
    pub fn line_total(&self, id: &ProductId) -> Option<Money> {
        self.get_item(id).map(CartItem::total)
    }
}

/// Turn a quantity typed by the shopper into a valid add quantity.
///
/// Non-numeric input and values below 1 become 1.
pub fn parse_quantity_input(input: &str) -> NonZeroU32 {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|n| u32::try_from(n).ok())
        .and_then(NonZeroU32::new)
        .unwrap_or(NonZeroU32::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: &str) -> Product {
        Catalog::global().product(&ProductId::new(id)).unwrap().clone()
    }

    fn qty(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.subtotal(), Money::usd(0));
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_item(product("prod-2"), qty(2));

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.subtotal(), Money::usd(900));
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = Cart::new();
        cart.add_item(product("prod-1"), qty(2));
        cart.add_item(product("prod-1"), qty(3));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get_item(&ProductId::new("prod-1")).unwrap().quantity, 5);
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(product("prod-6"), qty(1));
        cart.add_item(product("prod-3"), qty(1));
        cart.add_item(product("prod-6"), qty(1));
        let ids: Vec<&str> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(ids, vec!["prod-6", "prod-3"]);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add_item(product("prod-8"), qty(1));
        cart.update_quantity(&ProductId::new("prod-8"), 4);
        assert_eq!(cart.line_total(&ProductId::new("prod-8")), Some(Money::usd(1400)));

        // unknown ids are ignored
        cart.update_quantity(&ProductId::new("prod-99"), 4);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_zero_quantity_removes() {
        let mut cart = Cart::new();
        cart.add_item(product("prod-4"), qty(2));
        cart.apply(CartAction::SetQuantity(ProductId::new("prod-4"), 0));
        assert!(cart.is_empty());

        cart.add_item(product("prod-4"), qty(2));
        cart.apply(CartAction::SetQuantity(ProductId::new("prod-4"), -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product("prod-5"), qty(1));
        let before = cart.clone();
        cart.apply(CartAction::Remove(ProductId::new("prod-1")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(product("prod-5"), qty(1));
        cart.add_item(product("prod-7"), qty(2));
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = Cart::new();
        cart.add_item(product("prod-6"), qty(u32::MAX));
        cart.add_item(product("prod-6"), qty(1));
        assert_eq!(cart.items()[0].quantity, u32::MAX);
    }

    #[test]
    fn test_parse_quantity_input() {
        assert_eq!(parse_quantity_input("3").get(), 3);
        assert_eq!(parse_quantity_input(" 12 ").get(), 12);
        assert_eq!(parse_quantity_input("0").get(), 1);
        assert_eq!(parse_quantity_input("-4").get(), 1);
        assert_eq!(parse_quantity_input("two").get(), 1);
        assert_eq!(parse_quantity_input("").get(), 1);
    }
}
