//! Product detail command.

use anyhow::{Context as _, Result};
use auria_commerce::catalog::Catalog;
use auria_commerce::ProductId;
use serde::Serialize;

use super::ProductArgs;
use crate::context::Context;
use crate::output::stock_badge;

const RELATED_LIMIT: usize = 4;

#[derive(Serialize)]
struct ProductDetail<'a> {
    product: &'a auria_commerce::catalog::Product,
    display_price: String,
    related: Vec<&'a str>,
}

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::global();
    let currency = ctx.currency()?;
    let product = catalog
        .product(&ProductId::new(args.id.as_str()))
        .with_context(|| format!("No product at /products/{}", args.id))?;
    let related = catalog.related_products(product, RELATED_LIMIT);

    if ctx.output.is_json() {
        ctx.output.json(&ProductDetail {
            product,
            display_price: currency.format(product.price),
            related: related.iter().map(|p| p.id.as_str()).collect(),
        });
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.text(&product.description);
    ctx.output.kv("price", &currency.format(product.price));
    ctx.output.kv("category", product.category.label());
    ctx.output.kv("material", product.material.label());
    if let Some(stone) = product.stone {
        ctx.output.kv("stone", stone.label());
    }
    ctx.output.kv("style", product.style.label());
    ctx.output.kv("availability", &stock_badge(product.stock));
    let gallery: Vec<&str> = product.gallery().iter().map(|i| i.as_str()).collect();
    ctx.output.kv("images", &gallery.join(", "));

    if !related.is_empty() {
        ctx.output.header("You may also like");
        for item in related {
            ctx.output
                .list_item(&format!("{} ({}) {}", item.name, item.id, currency.format(item.price)));
        }
    }
    Ok(())
}
