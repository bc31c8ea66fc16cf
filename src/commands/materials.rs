use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use zipper_site::catalog::{loader::build_feed_client, CatalogSnapshot, CatalogSource, MaterialCatalog};
use zipper_site::config::{self, Config};

/// Fetch the catalog the same way the server does at startup
pub async fn load_snapshot(cfg: &Config, fallback_only: bool) -> Result<Arc<CatalogSnapshot>> {
    if fallback_only {
        return Ok(Arc::new(CatalogSnapshot::fallback()));
    }
    let client = build_feed_client(cfg.catalog.timeout_seconds.map(Duration::from_secs))?;
    let catalog = MaterialCatalog::new(client, cfg.catalog.sheet_url.clone());
    Ok(catalog.refresh().await)
}

/// Execute the materials command
pub async fn execute(config_path: &Path, fallback_only: bool) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    if !fallback_only && !cfg.catalog.sheet_url.trim().is_empty() {
        println!("{}", "Fetching materials sheet...".yellow());
    }
    let snapshot = load_snapshot(&cfg, fallback_only).await?;

    let source = match snapshot.source {
        CatalogSource::Feed => "spreadsheet".green(),
        CatalogSource::Fallback => "built-in fallback".yellow(),
    };
    println!("{} {} ({} materials)", "Source:".bold(), source, snapshot.materials.len());
    println!();
    println!("{}", render_table(&snapshot));

    Ok(())
}

fn render_table(snapshot: &CatalogSnapshot) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::Cyan),
        Cell::new("MATERIAL").fg(Color::Cyan),
        Cell::new("TECH").fg(Color::Cyan),
        Cell::new("USE").fg(Color::Cyan),
        Cell::new("MULTIPLIER").fg(Color::Cyan),
    ]);

    for (idx, material) in snapshot.materials.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&material.name),
            Cell::new(&material.tech),
            Cell::new(&material.tag),
            Cell::new(format!("×{:.2}", material.multiplier)).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
