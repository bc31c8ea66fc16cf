use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Print resolution preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    /// 1.5-0.8 mm layers
    Draft,
    /// 0.6-0.4 mm layers
    #[default]
    Std,
    /// 0.4-0.2 mm layers
    Hd,
}

impl QualityTier {
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Draft => 0.75,
            Self::Std => 1.0,
            Self::Hd => 1.35,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Std => "std",
            Self::Hd => "hd",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "std" => Ok(Self::Std),
            "hd" => Ok(Self::Hd),
            other => Err(AppError::BadRequest(format!("Unknown quality tier: {}", other))),
        }
    }
}

/// Which formula produced an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingBranch {
    /// Resin priced by weight
    Resin,
    /// Everything else priced by volume
    Volume,
}

impl PricingBranch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resin => "resin",
            Self::Volume => "volume",
        }
    }
}

/// Result of one price estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceEstimate {
    pub material: String,
    pub quality: QualityTier,
    pub volume_cm3: f64,
    pub branch: PricingBranch,
    pub price: u64,
}
