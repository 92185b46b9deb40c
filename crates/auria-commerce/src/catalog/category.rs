//! Category records and collection headers.

use crate::catalog::CategoryName;
use crate::ids::{CategoryId, ImageId};
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name, shared with `Product::category`.
    pub name: CategoryName,
    /// Category description.
    pub description: String,
    /// Grid thumbnail.
    pub image: ImageId,
    /// Listing page header.
    pub header_image: ImageId,
}

impl Category {
    /// URL slug of this category's listing.
    pub fn slug(&self) -> String {
        self.name.slug()
    }

    /// Header info for this category's listing page.
    pub fn collection_info(&self) -> CollectionInfo {
        CollectionInfo {
            name: self.name.label().to_string(),
            description: self.description.clone(),
            header_image: self.header_image.clone(),
        }
    }
}

/// Heading shown above a collection listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInfo {
    pub name: String,
    pub description: String,
    pub header_image: ImageId,
}

impl CollectionInfo {
    /// Heading for the unfiltered catalog.
    pub fn all() -> Self {
        Self {
            name: "All Collections".to_string(),
            description: "Explore our full range of handcrafted jewelry, designed to be cherished for a lifetime.".to_string(),
            header_image: ImageId::new("collection-header-all"),
        }
    }

    /// Heading for the new-arrivals listing.
    pub fn new_arrivals() -> Self {
        Self {
            name: "New Arrivals".to_string(),
            description: "Discover the latest additions to our collection of timeless and elegant jewelry.".to_string(),
            header_image: ImageId::new("collection-header-all"),
        }
    }
}
