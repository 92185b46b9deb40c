//! The read-only catalog store.

use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::debug;

use crate::catalog::{seed, Category, CategoryName, CollectionInfo, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Static collection of product and category records.
///
/// Immutable once built. The storefront's instance is obtained through
/// [`Catalog::global`], which seeds it on first use.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Build a catalog, enforcing the record invariants:
    /// unique product ids, non-negative prices and at least one image.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id.clone()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
            if product.price.is_negative() {
                return Err(CommerceError::InvalidProduct {
                    id: product.id.to_string(),
                    reason: "price is negative".to_string(),
                });
            }
            if product.images.is_empty() {
                return Err(CommerceError::InvalidProduct {
                    id: product.id.to_string(),
                    reason: "no images".to_string(),
                });
            }
        }
        Ok(Self::from_parts(products, categories))
    }

    pub(crate) fn from_parts(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// The process-wide storefront catalog.
    pub fn global() -> &'static Catalog {
        GLOBAL.get_or_init(|| {
            let catalog = seed::storefront_catalog();
            debug!(
                products = catalog.products.len(),
                categories = catalog.categories.len(),
                "catalog loaded"
            );
            catalog
        })
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Look up a category by its listing slug (case-insensitive).
    pub fn category_by_slug(&self, slug: &str) -> Result<&Category, CommerceError> {
        CategoryName::from_slug(slug)
            .and_then(|name| self.categories.iter().find(|c| c.name == name))
            .ok_or_else(|| CommerceError::CategoryNotFound(slug.to_string()))
    }

    /// Header info for a collection slug (`all`, `new-arrivals` or a category).
    pub fn collection_info(&self, slug: &str) -> Result<CollectionInfo, CommerceError> {
        match slug {
            "all" => Ok(CollectionInfo::all()),
            "new-arrivals" => Ok(CollectionInfo::new_arrivals()),
            _ => self.category_by_slug(slug).map(Category::collection_info),
        }
    }

    /// The first `limit` new-flagged products.
    pub fn new_arrivals(&self, limit: usize) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).take(limit).collect()
    }

    /// The first `limit` featured products.
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_featured).take(limit).collect()
    }

    /// Other products from the same category.
    pub fn related_products(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }
}
