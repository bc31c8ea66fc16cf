use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::normalizer::guess_multiplier;
use crate::catalog::{CatalogSnapshot, Material};
use crate::metrics;
use crate::pricing::models::{PriceEstimate, PricingBranch, QualityTier};

/// Base rate per cm³ for filament printing, ₽
pub const BASE_RATE_PER_CM3: f64 = 35.0;
/// Photopolymer density, g/cm³
pub const RESIN_DENSITY: f64 = 1.1;
/// Resin price per gram, ₽
pub const RESIN_PRICE_PER_GRAM: f64 = 65.0;

static RESIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)resin|смола|sla").unwrap());

/// Whether a material is priced by resin weight
pub fn is_resin(material: &Material) -> bool {
    RESIN_RE.is_match(&format!("{} {}", material.name, material.tech))
}

/// Material multiplier, falling back to keywords when the material has none
pub fn material_multiplier(material: &Material) -> f64 {
    if material.multiplier.is_finite() && material.multiplier > 0.0 {
        material.multiplier
    } else {
        guess_multiplier(&format!("{} {} {}", material.name, material.tech, material.tag))
    }
}

/// Estimated price in whole roubles.
///
/// Resin ignores both the material multiplier and the quality tier.
pub fn estimate_price(volume_cm3: f64, material: &Material, quality: QualityTier) -> u64 {
    let (price, _) = estimate_with_branch(volume_cm3, material, quality);
    price
}

fn estimate_with_branch(
    volume_cm3: f64,
    material: &Material,
    quality: QualityTier,
) -> (u64, PricingBranch) {
    let volume = if volume_cm3.is_finite() && volume_cm3 > 0.0 {
        volume_cm3
    } else {
        0.0
    };

    if is_resin(material) {
        let grams = volume * RESIN_DENSITY;
        return ((grams * RESIN_PRICE_PER_GRAM).round() as u64, PricingBranch::Resin);
    }

    let raw = volume * BASE_RATE_PER_CM3 * material_multiplier(material) * quality.multiplier();
    (raw.round() as u64, PricingBranch::Volume)
}

/// Price a material picked by name from the catalog.
///
/// Names missing from the catalog are priced as a bare material whose
/// multiplier comes from keywords in the name.
pub fn estimate_for(
    snapshot: &CatalogSnapshot,
    material_name: &str,
    volume_cm3: f64,
    quality: QualityTier,
) -> PriceEstimate {
    let material = snapshot
        .find(material_name)
        .cloned()
        .unwrap_or_else(|| Material::new(material_name, "", "", 0.0));

    let (price, branch) = estimate_with_branch(volume_cm3, &material, quality);
    metrics::record_estimate(branch.as_str());

    PriceEstimate {
        material: material.name,
        quality,
        volume_cm3,
        branch,
        price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_materials;

    fn petg() -> Material {
        Material::new("PETG", "FFF", "визуал/декор", 1.0)
    }

    #[test]
    fn test_volume_formula() {
        assert_eq!(estimate_price(250.0, &petg(), QualityTier::Std), 8750);
        assert_eq!(estimate_price(100.0, &petg(), QualityTier::Draft), 2625);
        let pa_cf = Material::new("PA+CF", "FFF", "", 2.1);
        assert_eq!(estimate_price(10.0, &pa_cf, QualityTier::Hd), 992);
    }

    #[test]
    fn test_resin_ignores_quality_and_multiplier() {
        let resin = Material::new("Resin Tough", "SLA", "смола", 1.8);
        for volume in [10.0, 250.0, 1234.0, 2000.0] {
            let expected = (volume * 1.1 * 65.0_f64).round() as u64;
            for quality in [QualityTier::Draft, QualityTier::Std, QualityTier::Hd] {
                assert_eq!(estimate_price(volume, &resin, quality), expected);
            }
        }
    }

    #[test]
    fn test_resin_detected_by_tech_or_cyrillic_name() {
        assert!(is_resin(&Material::new("Tough", "SLA", "", 1.0)));
        assert!(is_resin(&Material::new("Смола Basic", "", "", 1.0)));
        assert!(!is_resin(&Material::new("PETG", "FFF", "смола", 1.0)));
    }

    #[test]
    fn test_missing_multiplier_uses_keywords() {
        let tpu = Material::new("TPU", "FFF", "", 0.0);
        assert_eq!(material_multiplier(&tpu), 1.6);
        assert_eq!(estimate_price(100.0, &tpu, QualityTier::Std), 5600);
    }

    #[test]
    fn test_negative_or_nan_volume_is_zero() {
        assert_eq!(estimate_price(-5.0, &petg(), QualityTier::Hd), 0);
        assert_eq!(estimate_price(f64::NAN, &petg(), QualityTier::Std), 0);
    }

    #[test]
    fn test_estimate_for_known_and_unknown_names() {
        let snapshot = CatalogSnapshot::new(fallback_materials(), crate::catalog::CatalogSource::Fallback);

        let known = estimate_for(&snapshot, "ASA", 100.0, QualityTier::Std);
        assert_eq!(known.price, 4200);
        assert_eq!(known.branch, PricingBranch::Volume);

        let unknown = estimate_for(&snapshot, "ABS Pro", 100.0, QualityTier::Std);
        assert_eq!(unknown.price, 4025);

        let resin = estimate_for(&snapshot, "Resin Tough", 100.0, QualityTier::Hd);
        assert_eq!(resin.branch, PricingBranch::Resin);
        assert_eq!(resin.price, 7150);
    }
}
