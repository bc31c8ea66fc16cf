pub mod calculator;
pub mod models;

pub use calculator::{estimate_for, estimate_price, is_resin, material_multiplier};
pub use models::{PriceEstimate, PricingBranch, QualityTier};
