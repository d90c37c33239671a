//! Catalog listing.

use anyhow::Result;

use crate::context::Context;

/// List catalog products.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    if ctx.output.is_json() {
        ctx.output.json(&catalog.products());
        return Ok(());
    }

    ctx.output.header("Catalog");

    if catalog.is_empty() {
        ctx.output.info(&format!(
            "No products found in {}",
            ctx.resolve_path(&ctx.config.catalog.path).display()
        ));
        return Ok(());
    }

    let currency = ctx.config.display.currency;
    let id_width = catalog
        .products()
        .iter()
        .map(|p| p.id.as_str().chars().count())
        .max()
        .unwrap_or(0)
        .max(2);
    let title_width = catalog
        .products()
        .iter()
        .map(|p| p.title.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);
    let widths = [id_width, title_width, 0];

    ctx.output.table_row(&["ID", "TITLE", "PRICE"], &widths);
    for product in catalog.products() {
        let price = currency.format(product.price);
        ctx.output.table_row(
            &[product.id.as_str(), product.title.as_str(), price.as_str()],
            &widths,
        );
    }

    Ok(())
}
