//! Serializable listing snapshots.

use crate::catalog::{CollectionInfo, Product};
use crate::search::{CollectionView, FilterSelection};
use serde::Serialize;

/// A point-in-time view of a collection listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSnapshot<'a> {
    pub collection: &'a CollectionInfo,
    pub url: String,
    pub selection: &'a FilterSelection,
    pub active_filters: usize,
    pub total: usize,
    pub products: &'a [&'a Product],
}

impl<'a> CollectionView<'a> {
    /// Capture the current listing.
    pub fn snapshot(&self) -> ListingSnapshot<'_> {
        ListingSnapshot {
            collection: self.info(),
            url: self.url(),
            selection: self.selection(),
            active_filters: self.active_filter_count(),
            total: self.products().len(),
            products: self.products(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::search::{CollectionView, ViewOptions};

    #[test]
    fn test_snapshot_serializes() {
        let view = CollectionView::open(Catalog::global(), "bracelets", "sortBy=price-asc", ViewOptions::default())
            .unwrap();
        let json = serde_json::to_value(view.snapshot()).unwrap();
        assert_eq!(json["collection"]["name"], "Bracelets");
        assert_eq!(json["total"], 2);
        assert_eq!(json["selection"]["sort"], "price-asc");
        assert_eq!(json["products"][0]["id"], "prod-8");
    }
}
