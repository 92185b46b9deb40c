//! Configuration management commands.

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

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

    let config = &ctx.config;

    ctx.output.info("[store]");
    ctx.output.kv("default_currency", &config.store.default_currency);

    ctx.output.info("[catalog]");
    ctx.output.kv("price_floor", &config.catalog.price_floor.to_string());
    ctx.output.kv("price_ceiling", &config.catalog.price_ceiling.to_string());
    ctx.output.kv("url_debounce_ms", &config.catalog.url_debounce_ms.to_string());

    ctx.output.info("[gifts]");
    ctx.output.kv("endpoint", &config.gifts.endpoint);
    ctx.output.kv("model", &config.gifts.model);
    ctx.output.kv(
        "api_key",
        if config.gifts.api_key.is_some() { "(set)" } else { "(not set)" },
    );
    ctx.output.kv("api_key_env", &config.gifts.api_key_env);
    ctx.output.kv("timeout_secs", &config.gifts.timeout_secs.to_string());

    ctx.output.info("[logging]");
    ctx.output.kv("level", &config.logging.level.to_string());
    ctx.output.kv("format", &format!("{:?}", config.logging.format).to_lowercase());

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(CONFIG_NAMES[0]);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    std::fs::write(&path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    ctx.output.success(&format!("Wrote {}", path.display()));
    Ok(())
}
