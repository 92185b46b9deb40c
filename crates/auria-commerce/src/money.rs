//! Money type and currency formatting.
//!
//! Catalog prices are USD amounts held as integer cents. Display prices in
//! other currencies are derived with fixed multiplicative exchange rates;
//! there is no live-rate lookup.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Supported display currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    INR,
}

impl Currency {
    /// Every supported currency, in selector order.
    pub const ALL: [Currency; 2] = [Currency::USD, Currency::INR];

    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::INR => "INR",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::INR => "\u{20b9}",
        }
    }

    /// Units of this currency per one USD.
    pub fn exchange_rate(&self) -> f64 {
        match self {
            Currency::USD => 1.0,
            Currency::INR => 83.0,
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string. Returns `None` for unsupported codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "INR" => Some(Currency::INR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (cents / paise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a USD value from whole dollars, saturating at the `i64` range.
    pub fn usd(dollars: i64) -> Self {
        Self::new(dollars.saturating_mul(100), Currency::USD)
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ```
    /// use auria_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Try to add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let sum = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(sum, self.currency))
    }

    /// Multiply by a scalar, saturating at the representable range.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Convert a USD amount into `target` using the fixed exchange rate.
    ///
    /// Amounts not denominated in USD are first normalised back to USD.
    pub fn convert(&self, target: Currency) -> Money {
        if self.currency == target {
            return *self;
        }
        let usd_cents = self.amount_cents as f64 / self.currency.exchange_rate();
        let converted = (usd_cents * target.exchange_rate()).round() as i64;
        Money::new(converted, target)
    }

    /// Format as a display string with thousands separators (e.g., "$1,999.00").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without symbol (e.g., "1,999.00").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let magnitude = self.amount_cents.unsigned_abs();
        let whole = group_thousands(magnitude / divisor);
        let sign = if self.is_negative() { "-" } else { "" };
        if places == 0 {
            format!("{sign}{whole}")
        } else {
            let frac = magnitude % divisor;
            format!("{sign}{whole}.{frac:0width$}", width = places as usize)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format a USD-denominated price for display in `currency`.
///
/// `displayPrice = round(price * rate, 2)` rendered with thousands separators.
pub fn format_price(price_usd: Money, currency: Currency) -> String {
    price_usd.convert(currency).display()
}

/// The shopper's selected display currency.
///
/// Unsupported codes are ignored rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySelection {
    current: Currency,
}

impl CurrencySelection {
    /// Start with an explicit currency.
    pub fn new(current: Currency) -> Self {
        Self { current }
    }

    /// The selected currency.
    pub fn current(&self) -> Currency {
        self.current
    }

    /// Select a currency by code. Returns whether the selection changed.
    pub fn select(&mut self, code: &str) -> bool {
        match Currency::from_code(code) {
            Some(currency) => {
                let changed = currency != self.current;
                self.current = currency;
                if changed {
                    debug!(currency = currency.code(), "display currency changed");
                }
                changed
            }
            None => {
                debug!(code, "ignoring unsupported currency");
                false
            }
        }
    }

    /// Format a USD price in the selected currency.
    pub fn format(&self, price_usd: Money) -> String {
        format_price(price_usd, self.current)
    }
}

impl Default for CurrencySelection {
    fn default() -> Self {
        Self::new(Currency::INR)
    }
}

fn group_thousands(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while n > 0 {
        groups.push(n % 1000);
        n /= 1000;
    }
    let mut out = String::new();
    for (i, group) in groups.iter().rev().enumerate() {
        if i == 0 {
            out.push_str(&group.to_string());
        } else {
            out.push(',');
            out.push_str(&format!("{:03}", group));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_cents, 4999);
    }

    #[test]
    fn test_money_display_groups_thousands() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::usd(1999).display(), "$1,999.00");
        assert_eq!(Money::usd(1_234_567).display(), "$1,234,567.00");
        assert_eq!(Money::zero(Currency::USD).display(), "$0.00");
    }

    #[test]
    fn test_usd_saturates_instead_of_overflowing() {
        assert_eq!(Money::usd(100_000_000_000_000_000).amount_cents, i64::MAX);
        assert_eq!(Money::usd(i64::MIN).amount_cents, i64::MIN);
    }

    #[test]
    fn test_negative_display() {
        assert_eq!(Money::new(-150_000, Currency::USD).display(), "$-1,500.00");
    }

    #[test]
    fn test_format_price_usd() {
        assert_eq!(format_price(Money::usd(100), Currency::USD), "$100.00");
    }

    #[test]
    fn test_format_price_inr() {
        assert_eq!(format_price(Money::usd(100), Currency::INR), "\u{20b9}8,300.00");
    }

    #[test]
    fn test_format_price_rounds_to_cents() {
        let price = Money::new(1, Currency::USD); // $0.01 -> 0.83 INR
        assert_eq!(format_price(price, Currency::INR), "\u{20b9}0.83");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code("EUR"), None);
    }

    #[test]
    fn test_selection_ignores_unsupported_codes() {
        let mut selection = CurrencySelection::new(Currency::USD);
        assert!(!selection.select("GBP"));
        assert_eq!(selection.current(), Currency::USD);

        assert!(selection.select("INR"));
        assert_eq!(selection.current(), Currency::INR);
        assert!(!selection.select("INR"));
    }

    #[test]
    fn test_selection_defaults_to_inr() {
        assert_eq!(CurrencySelection::default().current(), Currency::INR);
    }

    #[test]
    fn test_try_add_rejects_mixed_currencies() {
        let usd = Money::usd(1);
        let inr = Money::new(100, Currency::INR);
        assert!(usd.try_add(&inr).is_none());
        assert_eq!(usd.try_add(&usd), Some(Money::usd(2)));
    }
}
