//! Add-to-cart command.

use anyhow::Result;
use storefront_commerce::cart::CartLine;
use storefront_commerce::Storefront;

use super::AddArgs;
use crate::context::Context;

/// Run the add command.
pub async fn run(args: AddArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;

    match add_by_id(&shop, &args.id)? {
        Some(line) if ctx.output.is_json() => ctx.output.json(&line),
        Some(line) => ctx.output.success(&format!(
            "Added \"{}\" to cart (quantity {})",
            line.product.display_title(),
            line.quantity
        )),
        None => ctx.output.warn(&format!(
            "No product {} in the cached catalog (run `shop load` first)",
            args.id
        )),
    }
    Ok(())
}

/// Resolve `raw_id` against the cached catalog and add it to the cart.
///
/// Never fetches. `None` when the catalog is not cached or has no such id.
fn add_by_id(shop: &Storefront, raw_id: &str) -> Result<Option<CartLine>> {
    let mut screen = shop.detail_screen();
    screen.open(raw_id);
    Ok(screen.add_to_cart()?)
}
