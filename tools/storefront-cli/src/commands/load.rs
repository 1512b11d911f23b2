//! Catalog refresh command.

use anyhow::Result;

use crate::context::Context;

/// Run the load command.
pub async fn run(ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;

    let spinner = ctx.output.spinner("Fetching products...");
    let result = shop.loader().load_catalog().await;
    spinner.finish_and_clear();

    let products = result?;
    if ctx.output.is_json() {
        ctx.output.json(&products);
    } else {
        ctx.output.success(&format!(
            "Cached {} products under \"{}\"",
            products.len(),
            shop.catalog().key()
        ));
    }
    Ok(())
}
