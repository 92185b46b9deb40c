//! Owned storefront session state.

use std::num::NonZeroU32;

use crate::cart::{Cart, CartAction, OrderSummary};
use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, CurrencySelection, Money};

/// One shopper's session: their cart and display currency over the
/// shared catalog.
///
/// Reading requires `&Storefront`; changing cart or currency requires
/// `&mut Storefront`, so there is exactly one writer at a time.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: &'static Catalog,
    cart: Cart,
    currency: CurrencySelection,
}

impl Storefront {
    /// Session over the global catalog with the default currency.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::global())
    }

    pub fn with_catalog(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            currency: CurrencySelection::default(),
        }
    }

    /// Start with a specific display currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = CurrencySelection::new(currency);
        self
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn currency(&self) -> Currency {
        self.currency.current()
    }

    /// Apply a cart transition.
    pub fn dispatch(&mut self, action: CartAction) {
        self.cart.apply(action);
    }

    /// Look up `id` in the catalog and add it to the cart.
    pub fn add_to_cart(&mut self, id: &ProductId, quantity: NonZeroU32) -> Result<(), CommerceError> {
        let product = self.catalog.product(id)?.clone();
        self.dispatch(CartAction::Add(product, quantity));
        Ok(())
    }

    /// Switch display currency. Unsupported codes are ignored.
    pub fn select_currency(&mut self, code: &str) -> bool {
        self.currency.select(code)
    }

    /// Format a USD price in the session currency.
    pub fn format_price(&self, price_usd: Money) -> String {
        self.currency.format(price_usd)
    }

    pub fn order_summary(&self) -> OrderSummary {
        OrderSummary::for_cart(&self.cart)
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}
