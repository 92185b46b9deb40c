//! Collection listing command.

use std::time::Instant;

use anyhow::{anyhow, Context as _, Result};
use auria_commerce::catalog::{Catalog, Material, Stone, Style};
use auria_commerce::search::{CollectionView, PriceRange, SortKey};
use auria_commerce::{Currency, Money};

use super::CollectionArgs;
use crate::context::Context;

/// Run the collection command.
pub async fn run(args: CollectionArgs, ctx: &Context) -> Result<()> {
    let catalog = Catalog::global();
    let currency = ctx.currency()?;
    let options = ctx.config.view_options();
    let query = args.query.as_deref().unwrap_or("");

    let mut view = CollectionView::open(catalog, &args.slug, query, options)
        .with_context(|| format!("No collection at /collections/{}", args.slug))?;

    for label in &args.material {
        let material = parse_label(label, Material::from_label, Material::ALL)?;
        view.toggle_material(material, true);
    }
    for label in &args.stone {
        let stone = parse_label(label, Stone::from_label, Stone::ALL)?;
        view.toggle_stone(stone, true);
    }
    for label in &args.style {
        let style = parse_label(label, Style::from_label, Style::ALL)?;
        view.toggle_style(style, true);
    }
    if let Some(sort) = &args.sort {
        let sort: SortKey = sort.parse().map_err(|_| {
            anyhow!("Unknown sort '{}' (expected featured, newest, price-asc or price-desc)", sort)
        })?;
        view.set_sort(sort);
    }

    if args.min_price.is_some() || args.max_price.is_some() {
        let current = view.selection().price;
        let min = args.min_price.map(usd).unwrap_or(current.min());
        let max = args.max_price.map(usd).unwrap_or(current.max());
        let now = Instant::now();
        view.set_price_range(PriceRange::new(min, max), now);
        if let Some(url) = view.poll_url(now + options.debounce) {
            ctx.output.debug(&format!("Price filter settled, address is {}", url));
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&view.snapshot());
        return Ok(());
    }

    let info = view.info();
    ctx.output.header(&info.name);
    ctx.output.text(&info.description);
    ctx.output.kv("address", &view.url());
    ctx.output.kv("sort", view.selection().sort.display_name());
    ctx.output.kv("active filters", &view.active_filter_count().to_string());
    ctx.output.kv("currency", currency.current().code());
    println!();

    if view.is_empty() {
        ctx.output.info("No products match the current filters.");
        return Ok(());
    }

    ctx.output.product_table(view.products(), &currency);
    println!();
    ctx.output.success(&format!("{} products", view.products().len()));
    Ok(())
}

fn usd(amount: f64) -> Money {
    Money::from_decimal(amount, Currency::USD)
}

fn parse_label<T: Copy + std::fmt::Display>(
    label: &str,
    parse: fn(&str) -> Option<T>,
    all: &[T],
) -> Result<T> {
    parse(label).ok_or_else(|| {
        let known: Vec<String> = all.iter().map(ToString::to_string).collect();
        anyhow!("Unknown value '{}' (expected one of: {})", label, known.join(", "))
    })
}
