use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Printable material as offered on the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub tech: String,
    pub tag: String,
    pub multiplier: f64,
}

impl Material {
    pub fn new(name: &str, tech: &str, tag: &str, multiplier: f64) -> Self {
        Self {
            name: name.to_string(),
            tech: tech.to_string(),
            tag: tag.to_string(),
            multiplier,
        }
    }
}

/// Where the current material list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    Feed,
    Fallback,
}

impl CatalogSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Fallback => "fallback",
        }
    }
}

/// Immutable result of one fetch cycle
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    pub materials: Vec<Material>,
    pub source: CatalogSource,
    pub loaded_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(materials: Vec<Material>, source: CatalogSource) -> Self {
        Self {
            materials,
            source,
            loaded_at: Utc::now(),
        }
    }

    /// Fallback snapshot, used before the first refresh completes
    pub fn fallback() -> Self {
        Self::new(fallback_materials(), CatalogSource::Fallback)
    }

    /// Find a material by its exact display name
    pub fn find(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }
}

/// Fixed list shown when the spreadsheet is unavailable or empty
pub fn fallback_materials() -> Vec<Material> {
    vec![
        Material::new("PETG", "FFF", "визуал/декор", 1.0),
        Material::new("ASA", "FFF", "удар и улица", 1.2),
        Material::new("PA+CF", "FFF", "прочность/жёсткость", 2.1),
        Material::new("TPU 95A", "FFF", "эластомер", 1.6),
        Material::new("Resin Tough", "SLA", "смола", 1.8),
    ]
}
