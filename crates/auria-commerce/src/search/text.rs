//! Quick text search over the catalog.

use crate::catalog::{Catalog, Product};

/// Shortest query that produces results.
pub const MIN_QUERY_CHARS: usize = 2;

/// Case-insensitive substring search over name, description, category and
/// material, in catalog order. Queries shorter than two characters match
/// nothing.
pub fn search_products<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Product> {
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    catalog
        .products()
        .iter()
        .filter(|p| p.matches_text(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(query: &str) -> Vec<&'static str> {
        search_products(Catalog::global(), query)
            .iter()
            .map(|p| p.id.as_str())
            .collect()
    }

    #[test]
    fn test_short_queries_return_nothing() {
        assert!(search("").is_empty());
        assert!(search("r").is_empty());
    }

    #[test]
    fn test_matches_name_and_description() {
        assert_eq!(search("SAPPHIRE"), vec!["prod-5"]);
        // prod-5 mentions diamonds only in its description
        assert_eq!(search("diamond"), vec!["prod-1", "prod-5", "prod-7"]);
        assert_eq!(search("earrings"), vec!["prod-3", "prod-7"]);
    }

    #[test]
    fn test_matches_material_label() {
        assert_eq!(search("rose gold"), vec!["prod-4"]);
    }

    #[test]
    fn test_no_match() {
        assert!(search("tiara").is_empty());
    }
}
