pub mod estimate;
pub mod health;
pub mod leads;
pub mod materials;
pub mod metrics_handler;
pub mod phone;
pub mod site;

use std::sync::Arc;

use crate::catalog::MaterialCatalog;
use crate::config::{CalculatorConfig, Config};
use crate::error::AppError;
use crate::leads::LeadSubmitter;

/// Shared state for the API handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<MaterialCatalog>,
    pub submitter: LeadSubmitter,
}

/// Reject volumes outside the calculator slider range
pub(crate) fn check_volume(calc: &CalculatorConfig, volume_cm3: f64) -> Result<(), AppError> {
    if !volume_cm3.is_finite()
        || volume_cm3 < calc.min_volume_cm3
        || volume_cm3 > calc.max_volume_cm3
    {
        return Err(AppError::BadRequest(format!(
            "volume_cm3 must be within [{}, {}], got {}",
            calc.min_volume_cm3, calc.max_volume_cm3, volume_cm3
        )));
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_volume_bounds() {
        let calc = CalculatorConfig::default();
        assert!(check_volume(&calc, 10.0).is_ok());
        assert!(check_volume(&calc, 2000.0).is_ok());
        assert!(check_volume(&calc, 9.9).is_err());
        assert!(check_volume(&calc, 2000.5).is_err());
        assert!(check_volume(&calc, f64::NAN).is_err());
    }
}
