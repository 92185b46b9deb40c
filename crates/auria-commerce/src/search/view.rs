//! Listing view state with address synchronisation.
//!
//! Attribute and sort changes rewrite the address immediately. Price
//! changes re-derive the listing immediately but reach the address only
//! after the slider has been idle for the debounce delay.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::catalog::{Catalog, CollectionInfo, Material, Product, Stone, Style};
use crate::error::CommerceError;
use crate::search::params::FILTER_PARAMS;
use crate::search::{derive_listing, CollectionScope, FilterSelection, PriceRange, QueryParams, SortKey};

/// Default delay before a price change is written to the address.
pub const DEFAULT_URL_DEBOUNCE: Duration = Duration::from_millis(500);

/// Coalesces a stream of values, releasing the latest one once no new
/// value has arrived for `delay`.
#[derive(Debug, Clone)]
pub struct UrlDebounce<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> UrlDebounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Queue `value`, restarting the delay from `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for UrlDebounce<T> {
    fn default() -> Self {
        Self::new(DEFAULT_URL_DEBOUNCE)
    }
}

/// Options for opening a [`CollectionView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Full price interval of the slider.
    pub bounds: PriceRange,
    /// Delay before price changes reach the address.
    pub debounce: Duration,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            bounds: PriceRange::default(),
            debounce: DEFAULT_URL_DEBOUNCE,
        }
    }
}

/// State of one collection listing page.
#[derive(Debug, Clone)]
pub struct CollectionView<'a> {
    catalog: &'a Catalog,
    slug: String,
    scope: CollectionScope,
    info: CollectionInfo,
    bounds: PriceRange,
    selection: FilterSelection,
    params: QueryParams,
    price_sync: UrlDebounce<PriceRange>,
    products: Vec<&'a Product>,
}

impl<'a> CollectionView<'a> {
    /// Open the listing for `slug`, restoring the selection from `query`.
    ///
    /// Fails with a not-found error when the slug names no collection.
    pub fn open(
        catalog: &'a Catalog,
        slug: &str,
        query: &str,
        options: ViewOptions,
    ) -> Result<Self, CommerceError> {
        let scope = CollectionScope::from_slug(catalog, slug)?;
        let slug = scope.slug();
        let info = catalog.collection_info(&slug)?;
        let params = QueryParams::parse(query);
        let selection = FilterSelection::from_params(&params, options.bounds);
        let mut view = Self {
            catalog,
            slug,
            scope,
            info,
            bounds: options.bounds,
            selection,
            params,
            price_sync: UrlDebounce::new(options.debounce),
            products: Vec::new(),
        };
        view.refresh();
        Ok(view)
    }

    pub fn scope(&self) -> CollectionScope {
        self.scope
    }

    pub fn info(&self) -> &CollectionInfo {
        &self.info
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn bounds(&self) -> PriceRange {
        self.bounds
    }

    /// The derived listing.
    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    /// Whether filtering left nothing to show.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn active_filter_count(&self) -> usize {
        self.selection.active_count(self.bounds)
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Current address: `/collections/<slug>` plus the query string.
    pub fn url(&self) -> String {
        if self.params.is_empty() {
            format!("/collections/{}", self.slug)
        } else {
            format!("/collections/{}?{}", self.slug, self.params)
        }
    }

    /// Whether a price change is waiting to reach the address.
    pub fn has_pending_url_write(&self) -> bool {
        self.price_sync.is_pending()
    }

    pub fn toggle_material(&mut self, material: Material, checked: bool) {
        self.selection.toggle_material(material, checked);
        self.selection.write_materials(&mut self.params);
        self.refresh();
    }

    pub fn toggle_stone(&mut self, stone: Stone, checked: bool) {
        self.selection.toggle_stone(stone, checked);
        self.selection.write_stones(&mut self.params);
        self.refresh();
    }

    pub fn toggle_style(&mut self, style: Style, checked: bool) {
        self.selection.toggle_style(style, checked);
        self.selection.write_styles(&mut self.params);
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.selection.sort = sort;
        self.selection.write_sort(&mut self.params);
        self.refresh();
    }

    /// Move the price slider. The listing updates now; the address follows
    /// once `poll_url` is called after the debounce delay.
    pub fn set_price_range(&mut self, price: PriceRange, now: Instant) {
        self.selection.price = price;
        self.price_sync.push(price, now);
        self.refresh();
    }

    /// Flush a settled price change into the address.
    ///
    /// Returns the new address when it changed.
    pub fn poll_url(&mut self, now: Instant) -> Option<String> {
        let price = self.price_sync.poll(now)?;
        let before = self.params.clone();
        let mut settled = self.selection.clone();
        settled.price = price;
        settled.write_price(&mut self.params, self.bounds);
        if self.params == before {
            return None;
        }
        let url = self.url();
        debug!(url = %url, "price filter written to address");
        Some(url)
    }

    /// Reset the selection and drop every filter parameter from the address.
    pub fn clear_filters(&mut self) {
        self.selection.clear(self.bounds);
        self.price_sync.cancel();
        for key in FILTER_PARAMS {
            self.params.delete(key);
        }
        self.refresh();
    }

    fn refresh(&mut self) {
        self.products = derive_listing(self.catalog, self.scope, &self.selection);
        debug!(
            slug = %self.slug,
            results = self.products.len(),
            active_filters = self.active_filter_count(),
            "listing derived"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(slug: &str, query: &str) -> CollectionView<'static> {
        CollectionView::open(Catalog::global(), slug, query, ViewOptions::default()).unwrap()
    }

    #[test]
    fn test_debounce_restarts_on_push() {
        let start = Instant::now();
        let mut debounce = UrlDebounce::new(Duration::from_millis(500));
        debounce.push(1, start);
        debounce.push(2, start + Duration::from_millis(300));
        assert_eq!(debounce.poll(start + Duration::from_millis(600)), None);
        assert_eq!(debounce.poll(start + Duration::from_millis(800)), Some(2));
        assert!(!debounce.is_pending());
        assert_eq!(debounce.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_open_restores_selection() {
        let view = open("rings", "stone=Diamond");
        assert_eq!(view.selection().stones(), [Stone::Diamond]);
        let ids: Vec<&str> = view.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["prod-1"]);
        assert_eq!(view.url(), "/collections/rings?stone=Diamond");
    }

    #[test]
    fn test_address_uses_canonical_slug() {
        let mut view = open("RINGS", "");
        view.toggle_stone(Stone::Diamond, true);
        assert_eq!(view.url(), "/collections/rings?stone=Diamond");
        assert_eq!(view.info().name, "Rings");
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let err = CollectionView::open(Catalog::global(), "brooches", "", ViewOptions::default())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_toggle_writes_address_immediately() {
        let mut view = open("all", "");
        view.toggle_material(Material::Gold, true);
        view.set_sort(SortKey::PriceAsc);
        assert_eq!(view.url(), "/collections/all?material=Gold&sortBy=price-asc");
        assert!(view.products().iter().all(|p| p.material == Material::Gold));

        view.toggle_material(Material::Gold, false);
        assert_eq!(view.url(), "/collections/all?sortBy=price-asc");
        assert_eq!(view.products().len(), 8);
    }

    #[test]
    fn test_price_change_is_debounced() {
        let start = Instant::now();
        let mut view = open("all", "");
        view.set_price_range(PriceRange::usd(0, 1000), start);
        view.set_price_range(PriceRange::usd(0, 500), start + Duration::from_millis(100));

        // listing reflects the latest drag step at once
        assert!(view.products().iter().all(|p| p.price.amount_cents <= 50_000));
        assert_eq!(view.url(), "/collections/all");

        assert_eq!(view.poll_url(start + Duration::from_millis(400)), None);
        assert_eq!(
            view.poll_url(start + Duration::from_millis(600)),
            Some("/collections/all?maxPrice=500".to_string())
        );
        assert!(!view.has_pending_url_write());
    }

    #[test]
    fn test_clear_filters() {
        let start = Instant::now();
        let mut view = open("earrings", "material=Gold&sortBy=newest&ref=home");
        view.set_price_range(PriceRange::usd(100, 900), start);
        assert_eq!(view.active_filter_count(), 2);

        view.clear_filters();
        assert_eq!(view.active_filter_count(), 0);
        assert_eq!(view.selection(), &FilterSelection::default());
        assert_eq!(view.url(), "/collections/earrings?ref=home");
        assert_eq!(view.poll_url(start + Duration::from_secs(1)), None);
        assert_eq!(view.products().len(), 2);
    }

    #[test]
    fn test_empty_listing_is_valid() {
        let view = open("necklaces", "stone=Ruby");
        assert!(view.is_empty());
        assert_eq!(view.info().name, "Necklaces");
    }
}
