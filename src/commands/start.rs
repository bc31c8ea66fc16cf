use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;
use zipper_site::{config, init_tracing, server};

/// Execute the start command
///
/// Tracing is configured from the loaded file, so it starts after the config.
pub async fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Starting 3D ZIPPER site backend...".green());

    let cfg = config::load_config(config_path)?;
    init_tracing(&cfg.server.log_level, &cfg.server.log_format);

    info!(config = %config_path.display(), "Configuration loaded");

    // Blocks until shutdown
    server::start_server(cfg).await?;

    Ok(())
}
