use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;
use zipper_site::config;
use zipper_site::pricing::{estimate_for, PricingBranch, QualityTier};

use super::materials::load_snapshot;

/// Execute the estimate command
pub async fn execute(config_path: &Path, volume: f64, material: &str, quality: QualityTier) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    let calc = &cfg.calculator;
    if !(calc.min_volume_cm3..=calc.max_volume_cm3).contains(&volume) {
        bail!(
            "Volume {} cm³ is outside the calculator range [{}, {}]",
            volume,
            calc.min_volume_cm3,
            calc.max_volume_cm3
        );
    }

    let snapshot = load_snapshot(&cfg, false).await?;
    if snapshot.find(material).is_none() {
        println!(
            "{} '{}' is not in the catalog; pricing by name keywords",
            "Note:".yellow(),
            material
        );
    }

    let estimate = estimate_for(&snapshot, material, volume, quality);

    let formula = match estimate.branch {
        PricingBranch::Resin => "resin, by weight",
        PricingBranch::Volume => "by volume",
    };
    println!("{}", "Estimate:".bold());
    println!("  {}: {}", "Material".cyan(), estimate.material);
    println!("  {}: {}", "Quality".cyan(), estimate.quality);
    println!("  {}: {} cm³", "Volume".cyan(), estimate.volume_cm3);
    println!("  {}: {}", "Formula".cyan(), formula);
    println!("  {}: {} ₽", "Price".cyan(), estimate.price.to_string().green().bold());

    Ok(())
}
