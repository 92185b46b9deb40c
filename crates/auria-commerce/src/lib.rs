//! Storefront domain types and logic for Auria.
//!
//! This crate holds everything the storefront does without a network:
//!
//! - **Catalog**: Products, categories, typed attributes, the seeded store
//! - **Search**: Collection scopes, filters, sorting, listing address sync
//! - **Cart**: Cart state machine and order summary
//! - **Money**: USD prices and fixed-rate display currencies
//!
//! # Example
//!
//! ```rust
//! use auria_commerce::prelude::*;
//! use std::num::NonZeroU32;
//!
//! let catalog = Catalog::global();
//! let view = CollectionView::open(catalog, "rings", "stone=Diamond", ViewOptions::default())?;
//! assert_eq!(view.products().len(), 1);
//!
//! let mut store = Storefront::new();
//! store.add_to_cart(&view.products()[0].id, NonZeroU32::MIN)?;
//! assert_eq!(store.format_price(store.cart().subtotal()), "\u{20b9}165,917.00");
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod storefront;

pub use error::CommerceError;
pub use ids::*;
pub use money::{format_price, Currency, CurrencySelection, Money};
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{format_price, Currency, CurrencySelection, Money};
    pub use crate::storefront::Storefront;

    // Catalog
    pub use crate::catalog::{
        Catalog, Category, CategoryName, CollectionInfo, Material, Product, Stone, Style,
    };

    // Cart
    pub use crate::cart::{parse_quantity_input, Cart, CartAction, CartItem, OrderSummary};

    // Search
    pub use crate::search::{
        derive_listing, search_products, CollectionScope, CollectionView, FilterSelection,
        PriceRange, QueryParams, SortKey, ViewOptions,
    };
}
