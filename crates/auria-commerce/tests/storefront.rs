//! End-to-end scenarios over the seeded catalog.

use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use auria_commerce::prelude::*;

fn ids(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn test_rings_listing_then_diamond_filter() {
    let catalog = Catalog::global();
    let mut view = CollectionView::open(catalog, "rings", "", ViewOptions::default()).unwrap();

    let expected: Vec<String> = catalog
        .products()
        .iter()
        .filter(|p| p.category == CategoryName::Rings)
        .map(|p| p.id.to_string())
        .collect();
    let mut listed = ids(view.products());
    listed.sort();
    assert_eq!(listed, expected);

    view.toggle_stone(Stone::Diamond, true);
    assert!(!view.products().is_empty());
    assert!(view.products().iter().all(|p| p.stone == Some(Stone::Diamond)));
    assert_eq!(view.url(), "/collections/rings?stone=Diamond");
}

#[test]
fn test_unknown_collection_is_not_found() {
    let err = CollectionView::open(Catalog::global(), "brooches", "", ViewOptions::default())
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err, CommerceError::CategoryNotFound("brooches".into()));
}

/// Every subset of `values`, each in declaration order.
fn subsets<T: Copy>(values: &[T]) -> Vec<Vec<T>> {
    (0..1u32 << values.len())
        .map(|mask| {
            values
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, v)| *v)
                .collect()
        })
        .collect()
}

/// Material and stone subsets crossed with a few style sets, price ranges
/// and every sort key.
fn selection_grid() -> Vec<FilterSelection> {
    let style_sets = [vec![], vec![Style::Hoop], vec![Style::Solitaire, Style::Pendant, Style::Chain]];
    let prices = [
        PriceRange::default(),
        PriceRange::usd(450, 875),
        PriceRange::new(
            Money::from_decimal(99.5, Currency::USD),
            Money::from_decimal(2000.25, Currency::USD),
        ),
    ];

    let mut grid = Vec::new();
    for materials in subsets(Material::ALL) {
        for stones in subsets(Stone::ALL) {
            for styles in &style_sets {
                for price in prices {
                    for sort in SortKey::ALL {
                        let mut selection = FilterSelection::with_price(price);
                        selection.sort = sort;
                        for &material in &materials {
                            selection.toggle_material(material, true);
                        }
                        for &stone in &stones {
                            selection.toggle_stone(stone, true);
                        }
                        for &style in styles {
                            selection.toggle_style(style, true);
                        }
                        grid.push(selection);
                    }
                }
            }
        }
    }
    grid
}

fn in_order(sort: SortKey, a: &Product, b: &Product) -> bool {
    match sort {
        SortKey::Featured => a.is_featured >= b.is_featured,
        SortKey::Newest => a.is_new >= b.is_new,
        SortKey::PriceAsc => a.price.amount_cents <= b.price.amount_cents,
        SortKey::PriceDesc => a.price.amount_cents >= b.price.amount_cents,
    }
}

#[test]
fn test_listing_is_exactly_the_matching_scope() {
    let catalog = Catalog::global();
    let position = |p: &Product| catalog.products().iter().position(|q| q.id == p.id);
    let scopes = [
        CollectionScope::All,
        CollectionScope::NewArrivals,
        CollectionScope::Category(CategoryName::Rings),
    ];

    let grid = selection_grid();
    assert_eq!(grid.len(), 256 * 36);
    for selection in &grid {
        for scope in scopes {
            let listing = derive_listing(catalog, scope, selection);

            let mut listed = ids(&listing);
            listed.sort();
            let mut expected: Vec<String> = catalog
                .products()
                .iter()
                .filter(|p| scope.contains(p) && selection.matches(p))
                .map(|p| p.id.to_string())
                .collect();
            expected.sort();
            assert_eq!(listed, expected, "{:?} {:?}", scope, selection);

            for pair in listing.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                assert!(in_order(selection.sort, a, b), "{:?} {:?}", scope, selection);
                if in_order(selection.sort, b, a) {
                    // equal keys keep catalog order
                    assert!(position(a) < position(b), "{:?} {:?}", scope, selection);
                }
            }
        }
    }
}

#[test]
fn test_every_selection_survives_the_address() {
    let bounds = PriceRange::default();
    for selection in selection_grid() {
        let mut params = QueryParams::parse("ref=home");
        selection.write_params(&mut params, bounds);
        let reparsed = QueryParams::parse(&params.to_string());
        assert_eq!(FilterSelection::from_params(&reparsed, bounds), selection);
        assert_eq!(reparsed.get("ref"), Some("home"));
    }
}

#[test]
fn test_address_round_trip_through_view() {
    let catalog = Catalog::global();
    let start = Instant::now();
    let mut view = CollectionView::open(catalog, "all", "", ViewOptions::default()).unwrap();
    view.toggle_material(Material::RoseGold, true);
    view.toggle_style(Style::Bangle, true);
    view.set_sort(SortKey::PriceDesc);
    view.set_price_range(PriceRange::usd(1000, 1500), start);
    let url = view
        .poll_url(start + Duration::from_millis(500))
        .unwrap();

    let query = url.split_once('?').map(|(_, q)| q).unwrap_or("");
    let reopened = CollectionView::open(catalog, "all", query, ViewOptions::default()).unwrap();
    assert_eq!(reopened.selection(), view.selection());
    assert_eq!(ids(reopened.products()), vec!["prod-4".to_string()]);
}

#[test]
fn test_cart_scenarios() {
    let mut store = Storefront::new().with_currency(Currency::USD);
    let locket = ProductId::new("prod-2");

    store.add_to_cart(&locket, NonZeroU32::new(2).unwrap()).unwrap();
    store.add_to_cart(&locket, NonZeroU32::new(3).unwrap()).unwrap();
    assert_eq!(store.cart().line_count(), 1);
    assert_eq!(store.cart().item_count(), 5);

    let before = store.cart().clone();
    store.dispatch(CartAction::Remove(ProductId::new("prod-9")));
    assert_eq!(store.cart(), &before);

    store.dispatch(CartAction::SetQuantity(locket, 0));
    assert!(store.cart().is_empty());
    assert_eq!(store.order_summary().total, Money::usd(0));
}

#[test]
fn test_currency_formatting() {
    assert_eq!(format_price(Money::usd(100), Currency::USD), "$100.00");
    assert_eq!(format_price(Money::usd(100), Currency::INR), "\u{20b9}8,300.00");
}
