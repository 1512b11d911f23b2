//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{CliConfig, CONFIG_FILE_NAME};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let sf = &ctx.config.storefront;
    ctx.output.info("[storefront]");
    ctx.output.kv("source_url", &sf.source_url);
    ctx.output.kv("posts_path", &sf.posts_path);
    ctx.output.kv("catalog_limit", &sf.catalog_limit.to_string());
    ctx.output.kv("page_size", &sf.page_size.to_string());
    ctx.output.kv("image_host", &sf.image_host);
    ctx.output.kv("synthesis", &format!("{:?}", sf.synthesis));
    if let Some(secs) = sf.fetch_timeout_secs {
        ctx.output.kv("fetch_timeout_secs", &secs.to_string());
    }
    ctx.output.kv("keys.products", &sf.keys.products);
    ctx.output.kv("keys.cart", &sf.keys.cart);

    ctx.output.info("[store]");
    ctx.output.kv("path", &ctx.config.store.path);
    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    CliConfig::default().save(&path)?;
    ctx.output
        .success(&format!("Wrote {}", path.display()));
    Ok(())
}
