//! Product detail command.

use anyhow::Result;
use storefront_commerce::detail::ProductLookup;

use super::ShowArgs;
use crate::context::Context;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let mut screen = shop.detail_screen();

    let product = match screen.open(&args.id) {
        ProductLookup::Found(product) => product.clone(),
        ProductLookup::CatalogNotLoaded => {
            ctx.output
                .warn("Loading product details... (run `shop load` to cache the catalog)");
            return Ok(());
        }
        ProductLookup::NotFound => {
            ctx.output.warn("Loading product details...");
            ctx.output
                .debug(&format!("No product {} in the cached catalog", args.id));
            return Ok(());
        }
    };

    if ctx.output.is_json() {
        ctx.output.json(&product);
    } else {
        ctx.output.header(&product.title);
        ctx.output.kv("category", product.category.label());
        ctx.output.kv("price", &product.display_price());
        ctx.output.kv("image", &product.image);
        println!("\n  {}", product.description);
    }

    if args.add {
        if let Some(line) = screen.add_to_cart()? {
            ctx.output
                .success(&format!("Added to cart (quantity {})", line.quantity));
        }
    }
    Ok(())
}
