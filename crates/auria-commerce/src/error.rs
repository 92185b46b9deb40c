//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog and storefront operations.
///
/// Cart, filter and currency operations are total and never produce one of
/// these; only catalog lookups and catalog construction can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category (collection slug) not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Two catalog records share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// A catalog record violates a catalog invariant.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },
}

impl CommerceError {
    /// Whether this is a routing-level absence rather than a runtime failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CommerceError::ProductNotFound(_) | CommerceError::CategoryNotFound(_)
        )
    }
}
