use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;
use zipper_site::config::{self, Config};

/// Execute the config show command
///
/// Prints the effective configuration (file, env overrides and defaults)
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();
    println!("{}", render_toml(&cfg)?);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!(
        "  Materials Feed: {}",
        if cfg.catalog.sheet_url.trim().is_empty() {
            "disabled"
        } else {
            "enabled"
        }
    );
    println!("  Site Assets: {}", cfg.site.assets.len());
    println!("  Accepted Extensions: {}", cfg.site.accepted_extensions.join(", "));

    info!("Configuration validation successful");
    Ok(())
}

fn render_toml(cfg: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}
