//! Collection scopes, sort keys and the listing pipeline.

use crate::catalog::{Catalog, CategoryName, Product};
use crate::error::CommerceError;
use crate::search::FilterSelection;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Sort options for collection listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Featured items first (default).
    #[default]
    Featured,
    /// New items first.
    Newest,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Featured,
        SortKey::Newest,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
    ];

    /// Value of the `sortBy` URL parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::Newest => "Newest",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
        }
    }

    /// Sort products in place. Ties keep their relative order.
    pub fn sort(&self, products: &mut [&Product]) {
        match self {
            SortKey::Featured => products.sort_by_key(|p| !p.is_featured),
            SortKey::Newest => products.sort_by_key(|p| !p.is_new),
            SortKey::PriceAsc => products.sort_by_key(|p| p.price.amount_cents),
            SortKey::PriceDesc => products.sort_by_key(|p| Reverse(p.price.amount_cents)),
        }
    }
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(SortKey::Featured),
            "newest" => Ok(SortKey::Newest),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The base subset of the catalog a listing starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionScope {
    /// Every product.
    All,
    /// Products flagged new.
    NewArrivals,
    /// Products of one category.
    Category(CategoryName),
}

impl CollectionScope {
    /// Resolve a listing slug against the catalog.
    ///
    /// `all` and `new-arrivals` are reserved; any other slug must name a
    /// catalog category (case-insensitive) or the lookup is not-found.
    pub fn from_slug(catalog: &Catalog, slug: &str) -> Result<Self, CommerceError> {
        let scope = match slug {
            "all" => CollectionScope::All,
            "new-arrivals" => CollectionScope::NewArrivals,
            _ => CollectionScope::Category(catalog.category_by_slug(slug)?.name),
        };
        debug!(slug, ?scope, "resolved collection scope");
        Ok(scope)
    }

    /// Canonical listing slug, as written in addresses.
    pub fn slug(&self) -> String {
        match self {
            CollectionScope::All => "all".to_string(),
            CollectionScope::NewArrivals => "new-arrivals".to_string(),
            CollectionScope::Category(name) => name.slug(),
        }
    }

    /// Whether a product belongs to this scope.
    pub fn contains(&self, product: &Product) -> bool {
        match self {
            CollectionScope::All => true,
            CollectionScope::NewArrivals => product.is_new,
            CollectionScope::Category(name) => product.category == *name,
        }
    }

    /// Products of this scope, in catalog order.
    pub fn products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.products().iter().filter(|p| self.contains(p)).collect()
    }
}

/// Derive the displayed listing: scope, then filter, then stable sort.
pub fn derive_listing<'a>(
    catalog: &'a Catalog,
    scope: CollectionScope,
    selection: &FilterSelection,
) -> Vec<&'a Product> {
    let mut products: Vec<&Product> = scope
        .products(catalog)
        .into_iter()
        .filter(|p| selection.matches(p))
        .collect();
    selection.sort.sort(&mut products);
    products
}
