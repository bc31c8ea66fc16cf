use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use super::{check_volume, AppState};
use crate::error::AppError;
use crate::pricing::{estimate_for, PriceEstimate, QualityTier};

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub volume_cm3: f64,
    pub material: String,
    #[serde(default)]
    pub quality: QualityTier,
}

/// POST /api/estimate
pub async fn estimate(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<PriceEstimate>, AppError> {
    let Json(request) = payload?;

    check_volume(&state.config.calculator, request.volume_cm3)?;
    if request.material.trim().is_empty() {
        return Err(AppError::BadRequest("material is required".to_string()));
    }

    let snapshot = state.catalog.snapshot();
    let estimate = estimate_for(
        &snapshot,
        request.material.trim(),
        request.volume_cm3,
        request.quality,
    );

    Ok(Json(estimate))
}
