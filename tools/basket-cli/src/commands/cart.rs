//! Cart commands.

use anyhow::{bail, Result};
use basket_cart::prelude::*;
use serde_json::json;

use super::{AddArgs, QtyArgs, RemoveArgs};
use crate::context::Context;

/// Confirmation shown after an add.
pub const ADDED_MESSAGE: &str = "Added to cart!";

/// Add one unit of an item.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store()?;
    let item = resolve_item(&args, &store.load(), ctx)?;
    let added = store.add(item)?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "item": added.item, "merged": added.merged }));
        return Ok(());
    }

    ctx.output.success(ADDED_MESSAGE);
    ctx.output.kv("item", &added.item.title);
    ctx.output.kv("qty", &added.item.qty.to_string());
    Ok(())
}

/// Build the add input from explicit flags, the cart itself, or the catalog.
fn resolve_item(args: &AddArgs, cart: &Cart, ctx: &Context) -> Result<NewItem> {
    if let (Some(title), Some(price)) = (&args.title, args.price) {
        return Ok(NewItem::new(args.id.as_str(), title.as_str(), price)?);
    }

    // Merging into an existing line only needs the id.
    if let Some(line) = cart.get(&args.id) {
        return Ok(NewItem::new(line.id.clone(), line.title.clone(), line.price)?);
    }

    let catalog = ctx.catalog()?;
    match catalog.get(&args.id) {
        Some(product) => {
            ctx.output.debug(&format!("Found {} in catalog", product.id));
            Ok(product.to_new_item()?)
        }
        None => bail!(
            "Unknown item '{}'. Pass --title and --price, or add it to the catalog.",
            args.id
        ),
    }
}

/// Remove an item.
pub fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let removed = ctx.store()?.remove(&args.id)?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "id": args.id, "removed": removed }));
    } else if removed {
        ctx.output.success(&format!("Removed {}", args.id));
    } else {
        ctx.output.warn(&format!("{} is not in the cart", args.id));
    }
    Ok(())
}

/// Set an item's quantity.
pub fn set_quantity(args: QtyArgs, ctx: &Context) -> Result<()> {
    let store = ctx.store()?;
    let updated = store.set_quantity(&args.id, args.qty.as_deref())?;
    let qty = store.load().get(&args.id).map(|item| item.qty);

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "id": args.id, "updated": updated, "qty": qty }));
    } else if let (true, Some(qty)) = (updated, qty) {
        ctx.output.success(&format!("{} quantity set to {}", args.id, qty));
    } else {
        ctx.output.warn(&format!("{} is not in the cart", args.id));
    }
    Ok(())
}

/// Empty the cart.
pub fn clear(ctx: &Context) -> Result<()> {
    ctx.store()?.clear()?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "cleared": true }));
    } else {
        ctx.output.success("Cart cleared");
    }
    Ok(())
}

/// Show the cart.
pub fn show(ctx: &Context) -> Result<()> {
    let cart = ctx.store()?.load();
    let summary = CartSummary::from_cart(&cart, ctx.config.display.currency);

    ctx.output.header("Cart");
    ctx.output.cart(&summary);
    Ok(())
}

/// Print the cart total.
pub fn total(ctx: &Context) -> Result<()> {
    let store = ctx.store()?;
    let total = store.total();
    let currency = ctx.config.display.currency;

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "total": total, "currency": currency }));
    } else {
        println!("{}", currency.format(total));
    }
    Ok(())
}
