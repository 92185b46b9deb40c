//! Price formatting command.

use anyhow::{bail, Result};
use auria_commerce::{format_price, Currency, Money};
use serde::Serialize;

use super::PriceArgs;
use crate::context::Context;

#[derive(Serialize)]
struct FormattedPrice {
    currency: &'static str,
    rate: f64,
    display: String,
}

/// Run the price command.
pub async fn run(args: PriceArgs, ctx: &Context) -> Result<()> {
    if !args.amount.is_finite() || args.amount < 0.0 {
        bail!("Price must be a non-negative amount in USD");
    }
    let price = Money::from_decimal(args.amount, Currency::USD);

    let currencies: Vec<Currency> = if args.all {
        Currency::ALL.to_vec()
    } else {
        vec![ctx.currency()?.current()]
    };
    let formatted: Vec<FormattedPrice> = currencies
        .into_iter()
        .map(|currency| FormattedPrice {
            currency: currency.code(),
            rate: currency.exchange_rate(),
            display: format_price(price, currency),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&formatted);
        return Ok(());
    }

    for entry in &formatted {
        ctx.output.kv(entry.currency, &entry.display);
    }
    Ok(())
}
