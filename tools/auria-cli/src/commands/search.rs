//! Quick search command.

use anyhow::Result;
use auria_commerce::catalog::Catalog;
use auria_commerce::search::{search_products, MIN_QUERY_CHARS};

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let currency = ctx.currency()?;
    let results = search_products(Catalog::global(), &args.text);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    if args.text.chars().count() < MIN_QUERY_CHARS {
        ctx.output
            .info(&format!("Type at least {} characters to search.", MIN_QUERY_CHARS));
        return Ok(());
    }
    if results.is_empty() {
        ctx.output.info(&format!("No results for \"{}\".", args.text));
        return Ok(());
    }

    ctx.output.header(&format!("Results for \"{}\"", args.text));
    ctx.output.product_table(&results, &currency);
    Ok(())
}
