//! Cart and checkout commands.

use anyhow::Result;
use storefront_commerce::ProductId;

use super::RemoveArgs;
use crate::context::Context;
use crate::output::format_dollars;

/// Show the cart.
pub async fn show(ctx: &Context) -> Result<()> {
    let screen = ctx.storefront()?.cart_screen();
    let lines = screen.lines();
    let summary = screen.summary();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "lines": lines,
            "summary": summary,
        }));
        return Ok(());
    }

    ctx.output.header("Cart");
    if lines.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    for line in &lines {
        ctx.output.kv(
            &format!("#{}", line.id()),
            &format!(
                "{} x {} = {}",
                line.product.display_title(),
                line.quantity,
                format_dollars(line.line_total())
            ),
        );
    }
    println!();
    ctx.output.kv("items", &summary.items.to_string());
    ctx.output.kv("total", &format_dollars(summary.total));
    Ok(())
}

/// Remove a product from the cart.
pub async fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let screen = ctx.storefront()?.cart_screen();
    if screen.remove(ProductId::new(args.id))? {
        ctx.output.success(&format!("Removed #{} from cart", args.id));
    } else {
        ctx.output.warn(&format!("#{} is not in the cart", args.id));
    }
    Ok(())
}

/// Place an order and empty the cart.
pub async fn checkout(ctx: &Context) -> Result<()> {
    let screen = ctx.storefront()?.cart_screen();
    let order = screen.checkout()?;

    if ctx.output.is_json() {
        ctx.output.json(&order);
    } else {
        ctx.output.success(&format!(
            "Order placed: {} items, {}",
            order.summary.items,
            format_dollars(order.summary.total)
        ));
    }
    Ok(())
}
