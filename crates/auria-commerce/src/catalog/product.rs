//! Product records.

use crate::catalog::{CategoryName, Material, Stone, Style};
use crate::ids::{ImageId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A piece of jewellery in the catalog.
///
/// Defined once in static configuration and never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Long description.
    pub description: String,
    /// Price in USD.
    pub price: Money,
    /// Collection the product is listed under.
    pub category: CategoryName,
    /// Metal.
    pub material: Material,
    /// Principal stone, if the piece has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stone: Option<Stone>,
    /// Design style.
    pub style: Style,
    /// Ordered image references; the first is the listing thumbnail.
    pub images: Vec<ImageId>,
    /// Shown under "New Arrivals".
    #[serde(default)]
    pub is_new: bool,
    /// Promoted by the default sort.
    #[serde(default)]
    pub is_featured: bool,
    /// Units in stock.
    pub stock: u32,
}

impl Product {
    /// The listing thumbnail.
    pub fn primary_image(&self) -> Option<&ImageId> {
        self.images.first()
    }

    /// Gallery images shown on the detail page (at most four).
    pub fn gallery(&self) -> &[ImageId] {
        &self.images[..self.images.len().min(4)]
    }

    /// Whether any units are in stock.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Case-insensitive substring match used by quick search.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
            || self.category.label().to_lowercase().contains(needle_lower)
            || self.material.label().to_lowercase().contains(needle_lower)
    }
}
