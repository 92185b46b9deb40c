//! Collection listing module.
//!
//! Scope resolution, conjunctive filters, stable sorting, the listing
//! address codec and the debounced view state built on top of them.

mod filter;
pub(crate) mod params;
mod query;
mod results;
mod text;
mod view;

pub use filter::{FilterSelection, PriceRange, DEFAULT_PRICE_CEILING, DEFAULT_PRICE_FLOOR, PRICE_STEP};
pub use params::{
    QueryParams, PARAM_MATERIAL, PARAM_MAX_PRICE, PARAM_MIN_PRICE, PARAM_SORT, PARAM_STONE,
    PARAM_STYLE,
};
pub use query::{derive_listing, CollectionScope, SortKey};
pub use results::ListingSnapshot;
pub use text::{search_products, MIN_QUERY_CHARS};
pub use view::{CollectionView, UrlDebounce, ViewOptions, DEFAULT_URL_DEBOUNCE};
