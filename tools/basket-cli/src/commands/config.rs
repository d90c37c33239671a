//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Path => show_path(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    println!();
    println!("[storage]");
    ctx.output.kv(
        "dir",
        &ctx.resolve_path(&ctx.config.storage.dir).display().to_string(),
    );
    ctx.output.kv("key", &ctx.config.storage.key);

    println!();
    println!("[checkout]");
    ctx.output.kv("endpoint", &ctx.config.checkout.endpoint);
    ctx.output
        .kv("timeout_secs", &ctx.config.checkout.timeout_secs.to_string());

    println!();
    println!("[display]");
    ctx.output.kv("currency", ctx.config.display.currency.code());

    println!();
    println!("[catalog]");
    ctx.output.kv(
        "path",
        &ctx.resolve_path(&ctx.config.catalog.path).display().to_string(),
    );

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    let path = ctx.config_path.as_ref().map(|p| p.display().to_string());

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "path": path }));
        return Ok(());
    }

    match path {
        Some(path) => println!("{}", path),
        None => ctx.output.info("No config file found, using defaults"),
    }
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::for_dir(dir.path());

        init_config(false, &ctx).unwrap();
        let config = CliConfig::load(dir.path().join("basket.toml")).unwrap();
        assert_eq!(config, CliConfig::default());

        assert!(init_config(false, &ctx).is_err());
        init_config(true, &ctx).unwrap();
    }
}
