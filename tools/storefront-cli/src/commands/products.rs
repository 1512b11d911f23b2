//! Product list command.

use anyhow::Result;
use storefront_commerce::search::Layout;
use storefront_commerce::ProductId;

use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.storefront()?;
    let mut screen = shop.list_screen();

    let spinner = ctx.output.spinner("Loading products...");
    screen.mount().await;
    spinner.finish_and_clear();

    let view = screen.view_mut();
    if let Some(term) = args.search {
        view.set_search(term);
    }
    view.set_page(args.page);
    if args.list {
        view.toggle_layout();
    }

    if let Some(id) = args.add {
        let line = screen.add_to_cart(ProductId::new(id))?;
        ctx.output.success(&format!(
            "Added \"{}\" to cart (quantity {})",
            line.product.display_title(),
            line.quantity
        ));
        return Ok(());
    }

    let view = screen.view();
    let page = view.page_view();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": page.items,
            "pagination": page.pagination,
        }));
        return Ok(());
    }

    if view.search().is_empty() {
        ctx.output
            .header(&format!("Products ({} items)", view.filtered_count()));
    } else {
        ctx.output.header(&format!(
            "Products matching \"{}\" ({} items)",
            view.search(),
            view.filtered_count()
        ));
    }

    if page.no_results() {
        ctx.output.info("No products found");
        return Ok(());
    }

    for product in &page.items {
        ctx.output.product(product, view.layout() == Layout::List);
    }

    if page.show_pager() {
        println!();
        ctx.output.kv(
            "page",
            &format!("{}/{}", page.pagination.page, page.pagination.total_pages),
        );
        if let Some(label) = page.range_label() {
            ctx.output.info(&label);
        }
        if page.pagination.has_prev() {
            ctx.output
                .info(&format!("previous: --page {}", page.pagination.page - 1));
        }
        if page.pagination.has_next() {
            ctx.output
                .info(&format!("next: --page {}", page.pagination.page + 1));
        }
    }
    Ok(())
}
