//! Cart simulation command.

use std::num::NonZeroU32;

use anyhow::{anyhow, Context as _, Result};
use auria_commerce::cart::{parse_quantity_input, CartAction, CartItem, OrderSummary};
use auria_commerce::{ProductId, Storefront};
use serde::Serialize;

use super::CartArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CartReport<'a> {
    currency: &'static str,
    items: &'a [CartItem],
    summary: OrderSummary,
}

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = Storefront::new().with_currency(ctx.currency()?.current());

    for entry in &args.add {
        let (id, quantity) = parse_add_entry(entry);
        store
            .add_to_cart(&ProductId::new(id), quantity)
            .with_context(|| format!("Cannot add '{}'", entry))?;
        ctx.output.debug(&format!("ADD {} x{}", id, quantity));
    }
    for entry in &args.set {
        let (id, qty) = entry
            .split_once(':')
            .ok_or_else(|| anyhow!("Expected id:quantity, got '{}'", entry))?;
        let quantity: i64 = qty
            .trim()
            .parse()
            .with_context(|| format!("Invalid quantity in '{}'", entry))?;
        store.dispatch(CartAction::SetQuantity(ProductId::new(id), quantity));
        ctx.output.debug(&format!("SET_QUANTITY {} {}", id, quantity));
    }
    for id in &args.remove {
        store.dispatch(CartAction::Remove(ProductId::new(id.as_str())));
        ctx.output.debug(&format!("REMOVE {}", id));
    }
    if args.clear {
        store.dispatch(CartAction::Clear);
        ctx.output.debug("CLEAR");
    }

    let summary = store.order_summary();
    if ctx.output.is_json() {
        ctx.output.json(&CartReport {
            currency: store.currency().code(),
            items: store.cart().items(),
            summary,
        });
        return Ok(());
    }

    ctx.output.header("Cart");
    if store.cart().is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    const WIDTHS: [usize; 4] = [8, 26, 4, 14];
    ctx.output.table_row(&["ID", "NAME", "QTY", "TOTAL"], &WIDTHS);
    for item in store.cart().items() {
        let total = store.format_price(item.total());
        ctx.output.table_row(
            &[
                item.product.id.as_str(),
                &item.product.name,
                &item.quantity.to_string(),
                &total,
            ],
            &WIDTHS,
        );
    }

    ctx.output.header("Order Summary");
    ctx.output.kv("items", &summary.item_count.to_string());
    ctx.output.kv("subtotal", &store.format_price(summary.subtotal));
    ctx.output.kv("shipping", &store.format_price(summary.shipping));
    ctx.output.kv("total", &store.format_price(summary.total));
    Ok(())
}

/// Split `id[:quantity]`. A missing or unusable quantity counts as one.
fn parse_add_entry(entry: &str) -> (&str, NonZeroU32) {
    match entry.split_once(':') {
        Some((id, qty)) => (id, parse_quantity_input(qty)),
        None => (entry, NonZeroU32::MIN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_entry() {
        assert_eq!(parse_add_entry("prod-1"), ("prod-1", NonZeroU32::MIN));
        assert_eq!(parse_add_entry("prod-3:4").1.get(), 4);
        assert_eq!(parse_add_entry("prod-3:zero").1.get(), 1);
    }
}
