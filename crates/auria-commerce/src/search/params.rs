//! Query-string codec for listing addresses.
//!
//! [`QueryParams`] is an ordered multi-map over the raw query string.
//! [`FilterSelection`] reads itself from and writes itself back into one,
//! leaving every parameter it does not own untouched.

use crate::catalog::{Material, Stone, Style};
use crate::money::{Currency, Money};
use crate::search::{FilterSelection, PriceRange, SortKey};
use std::fmt;

pub const PARAM_MATERIAL: &str = "material";
pub const PARAM_STONE: &str = "stone";
pub const PARAM_STYLE: &str = "style";
pub const PARAM_MIN_PRICE: &str = "minPrice";
pub const PARAM_MAX_PRICE: &str = "maxPrice";
pub const PARAM_SORT: &str = "sortBy";

/// Every parameter owned by [`FilterSelection`].
pub const FILTER_PARAMS: [&str; 6] = [
    PARAM_MATERIAL,
    PARAM_STONE,
    PARAM_STYLE,
    PARAM_MIN_PRICE,
    PARAM_MAX_PRICE,
    PARAM_SORT,
];

/// Ordered query-string parameters. Keys may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without a leading `?`.
    ///
    /// `+` decodes to a space. Malformed percent escapes are kept verbatim.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let mut parts = pair.splitn(2, '=');
                let key = decode(parts.next().unwrap_or(""));
                let value = decode(parts.next().unwrap_or(""));
                (key, value)
            })
            .collect();
        Self { pairs }
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value of `key`, in order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Add a value without touching existing ones.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Replace every value of `key` with a single one.
    ///
    /// The new value takes the position of the first existing occurrence.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = 0usize;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Replace every value of `key` with `values`.
    pub fn set_all<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delete(key);
        for value in values {
            self.append(key, value);
        }
    }

    /// Remove every value of `key`.
    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for QueryParams {
    /// Render as `k=v&k=v` (no leading `?`), spaces as `+`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", encode(key), encode(value))?;
        }
        Ok(())
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

fn encode(raw: &str) -> String {
    urlencoding::encode(raw).replace("%20", "+")
}

/// Parse a decimal USD amount. Non-numeric and non-finite values are rejected.
fn parse_usd(raw: &str) -> Option<Money> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| Money::from_decimal(v, Currency::USD))
}

/// Render a USD amount the way the price slider writes it: whole dollars
/// without decimals, otherwise two decimals.
fn format_usd(money: Money) -> String {
    if money.amount_cents % 100 == 0 {
        (money.amount_cents / 100).to_string()
    } else {
        format!("{:.2}", money.to_decimal())
    }
}

impl FilterSelection {
    /// Read a selection from listing parameters.
    ///
    /// Unknown attribute labels are ignored, duplicates collapse, missing or
    /// non-numeric prices fall back to `bounds`, and an unknown `sortBy`
    /// falls back to `featured`.
    pub fn from_params(params: &QueryParams, bounds: PriceRange) -> Self {
        let mut selection = FilterSelection::with_price(bounds);
        for label in params.get_all(PARAM_MATERIAL) {
            if let Some(material) = Material::from_label(label) {
                selection.toggle_material(material, true);
            }
        }
        for label in params.get_all(PARAM_STONE) {
            if let Some(stone) = Stone::from_label(label) {
                selection.toggle_stone(stone, true);
            }
        }
        for label in params.get_all(PARAM_STYLE) {
            if let Some(style) = Style::from_label(label) {
                selection.toggle_style(style, true);
            }
        }

        let min = params
            .get(PARAM_MIN_PRICE)
            .and_then(parse_usd)
            .unwrap_or(bounds.min());
        let max = params
            .get(PARAM_MAX_PRICE)
            .and_then(parse_usd)
            .unwrap_or(bounds.max());
        selection.price = PriceRange::new(min, max);

        selection.sort = params
            .get(PARAM_SORT)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        selection
    }

    /// Write every filter parameter into `params`, dropping those at their
    /// default. Other parameters are preserved.
    pub fn write_params(&self, params: &mut QueryParams, bounds: PriceRange) {
        self.write_materials(params);
        self.write_stones(params);
        self.write_styles(params);
        self.write_price(params, bounds);
        self.write_sort(params);
    }

    pub(crate) fn write_materials(&self, params: &mut QueryParams) {
        params.set_all(PARAM_MATERIAL, self.materials.iter().map(|m| m.label()));
    }

    pub(crate) fn write_stones(&self, params: &mut QueryParams) {
        params.set_all(PARAM_STONE, self.stones.iter().map(|s| s.label()));
    }

    pub(crate) fn write_styles(&self, params: &mut QueryParams) {
        params.set_all(PARAM_STYLE, self.styles.iter().map(|s| s.label()));
    }

    pub(crate) fn write_price(&self, params: &mut QueryParams, bounds: PriceRange) {
        if self.price.min() == bounds.min() {
            params.delete(PARAM_MIN_PRICE);
        } else {
            params.set(PARAM_MIN_PRICE, format_usd(self.price.min()));
        }
        if self.price.max() == bounds.max() {
            params.delete(PARAM_MAX_PRICE);
        } else {
            params.set(PARAM_MAX_PRICE, format_usd(self.price.max()));
        }
    }

    pub(crate) fn write_sort(&self, params: &mut QueryParams) {
        if self.sort == SortKey::default() {
            params.delete(PARAM_SORT);
        } else {
            params.set(PARAM_SORT, self.sort.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let params = QueryParams::parse("?material=Rose+Gold&stone=Diamond&stone=Pearl&page=2");
        assert_eq!(params.get("material"), Some("Rose Gold"));
        assert_eq!(params.get_all("stone"), vec!["Diamond", "Pearl"]);
        assert_eq!(params.get("missing"), None);
        assert_eq!(
            params.to_string(),
            "material=Rose+Gold&stone=Diamond&stone=Pearl&page=2"
        );
    }

    #[test]
    fn test_percent_decoding() {
        let params = QueryParams::parse("material=Rose%20Gold&bad=%E0%A4%A");
        assert_eq!(params.get("material"), Some("Rose Gold"));
        assert_eq!(params.get("bad"), Some("%E0%A4%A"));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = QueryParams::parse("a=1&b=2&a=3");
        params.set("a", "9");
        assert_eq!(params.to_string(), "a=9&b=2");
        params.set("c", "x");
        assert_eq!(params.to_string(), "a=9&b=2&c=x");
        params.delete("a");
        assert_eq!(params.to_string(), "b=2&c=x");
    }

    #[test]
    fn test_selection_decodes_all_params() {
        let params = QueryParams::parse(
            "material=Gold&material=Silver&stone=Diamond&style=Hoop&minPrice=100&maxPrice=2000&sortBy=price-desc",
        );
        let selection = FilterSelection::from_params(&params, PriceRange::default());
        assert_eq!(selection.materials(), [Material::Gold, Material::Silver]);
        assert_eq!(selection.stones(), [Stone::Diamond]);
        assert_eq!(selection.styles(), [Style::Hoop]);
        assert_eq!(selection.price, PriceRange::usd(100, 2000));
        assert_eq!(selection.sort, SortKey::PriceDesc);
    }

    #[test]
    fn test_selection_decode_fallbacks() {
        let params = QueryParams::parse(
            "material=Platinum&material=Gold&material=Gold&minPrice=abc&maxPrice=-5&sortBy=popular",
        );
        let selection = FilterSelection::from_params(&params, PriceRange::default());
        assert_eq!(selection.materials(), [Material::Gold]);
        // min falls back to 0, max clamps to 0
        assert_eq!(selection.price, PriceRange::usd(0, 0));
        assert_eq!(selection.sort, SortKey::Featured);
    }

    #[test]
    fn test_reversed_prices_are_swapped() {
        let params = QueryParams::parse("minPrice=3000&maxPrice=500");
        let selection = FilterSelection::from_params(&params, PriceRange::default());
        assert_eq!(selection.price, PriceRange::usd(500, 3000));
    }

    #[test]
    fn test_defaults_are_omitted() {
        let mut params = QueryParams::new();
        FilterSelection::default().write_params(&mut params, PriceRange::default());
        assert!(params.is_empty());
    }

    #[test]
    fn test_write_preserves_foreign_params() {
        let mut params = QueryParams::parse("utm_source=mail&stone=Ruby");
        let mut selection = FilterSelection::default();
        selection.toggle_stone(Stone::Pearl, true);
        selection.price = PriceRange::new(Money::from_decimal(99.5, Currency::USD), Money::usd(5000));
        selection.write_params(&mut params, PriceRange::default());
        assert_eq!(params.to_string(), "utm_source=mail&stone=Pearl&minPrice=99.50");
    }

    #[test]
    fn test_round_trip() {
        let bounds = PriceRange::default();
        let mut selection = FilterSelection::default();
        selection.toggle_material(Material::RoseGold, true);
        selection.toggle_stone(Stone::Sapphire, true);
        selection.toggle_stone(Stone::Diamond, true);
        selection.toggle_style(Style::Vintage, true);
        selection.price = PriceRange::usd(250, 4000);
        selection.sort = SortKey::Newest;

        let mut params = QueryParams::new();
        selection.write_params(&mut params, bounds);
        let reparsed = QueryParams::parse(&params.to_string());
        assert_eq!(FilterSelection::from_params(&reparsed, bounds), selection);
    }
}
