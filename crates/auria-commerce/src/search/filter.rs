//! Filter selection for collection listings.

use crate::catalog::{Material, Product, Stone, Style};
use crate::money::{Currency, Money};
use crate::search::SortKey;
use serde::Serialize;

/// Lowest price of the default interval, in USD.
pub const DEFAULT_PRICE_FLOOR: i64 = 0;
/// Highest price of the default interval, in USD.
pub const DEFAULT_PRICE_CEILING: i64 = 5000;
/// Step of the price slider, in USD.
pub const PRICE_STEP: i64 = 50;

/// A closed USD price interval with `0 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PriceRange {
    min: Money,
    max: Money,
}

impl PriceRange {
    /// Create an interval, clamping negative bounds to zero and
    /// swapping reversed bounds.
    pub fn new(min: Money, max: Money) -> Self {
        let min = Money::new(min.amount_cents.max(0), Currency::USD);
        let max = Money::new(max.amount_cents.max(0), Currency::USD);
        if min.amount_cents <= max.amount_cents {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Interval from whole-dollar bounds.
    pub fn usd(min: i64, max: i64) -> Self {
        Self::new(Money::usd(min), Money::usd(max))
    }

    /// Lower bound.
    pub fn min(&self) -> Money {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> Money {
        self.max
    }

    /// Inclusive membership test.
    pub fn contains(&self, price: Money) -> bool {
        price.amount_cents >= self.min.amount_cents && price.amount_cents <= self.max.amount_cents
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::usd(DEFAULT_PRICE_FLOOR, DEFAULT_PRICE_CEILING)
    }
}

/// The conjunctive set of constraints narrowing a collection scope,
/// plus the active sort key.
///
/// Attribute selections keep the order in which values were picked and
/// never hold duplicates; they change only through the toggle methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct FilterSelection {
    pub(crate) materials: Vec<Material>,
    pub(crate) stones: Vec<Stone>,
    pub(crate) styles: Vec<Style>,
    pub price: PriceRange,
    pub sort: SortKey,
}

impl FilterSelection {
    /// Selection with empty attribute sets and the given price interval.
    pub fn with_price(price: PriceRange) -> Self {
        Self {
            price,
            ..Default::default()
        }
    }

    /// Selected materials, in pick order.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Selected stones, in pick order.
    pub fn stones(&self) -> &[Stone] {
        &self.stones
    }

    /// Selected styles, in pick order.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Whether a product satisfies every active predicate.
    ///
    /// Empty attribute sets are inactive. A product without a stone never
    /// matches an active stone filter. The price interval is always active.
    pub fn matches(&self, product: &Product) -> bool {
        (self.materials.is_empty() || self.materials.contains(&product.material))
            && (self.stones.is_empty()
                || product.stone.is_some_and(|stone| self.stones.contains(&stone)))
            && (self.styles.is_empty() || self.styles.contains(&product.style))
            && self.price.contains(product.price)
    }

    /// Check or uncheck a material.
    pub fn toggle_material(&mut self, material: Material, checked: bool) {
        toggle(&mut self.materials, material, checked);
    }

    /// Check or uncheck a stone.
    pub fn toggle_stone(&mut self, stone: Stone, checked: bool) {
        toggle(&mut self.stones, stone, checked);
    }

    /// Check or uncheck a style.
    pub fn toggle_style(&mut self, style: Style, checked: bool) {
        toggle(&mut self.styles, style, checked);
    }

    /// Number of active constraints: one per selected attribute value,
    /// plus one if the price interval is narrower than `bounds`.
    pub fn active_count(&self, bounds: PriceRange) -> usize {
        let narrowed = self.price.min().amount_cents > bounds.min().amount_cents
            || self.price.max().amount_cents < bounds.max().amount_cents;
        self.materials.len() + self.stones.len() + self.styles.len() + usize::from(narrowed)
    }

    /// Reset every attribute set, the price interval and the sort key.
    pub fn clear(&mut self, bounds: PriceRange) {
        *self = Self::with_price(bounds);
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T, checked: bool) {
    let present = values.contains(&value);
    if checked && !present {
        values.push(value);
    } else if !checked && present {
        values.retain(|v| v != &value);
    }
}
