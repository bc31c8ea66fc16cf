use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{check_volume, AppState};
use crate::error::AppError;
use crate::leads::{
    bytes_to_nice, capture_utm, format_phone, generate_lead_id, merge_files,
    validate_upload_form, Contact, LeadPayload, UploadForm,
};
use crate::logging::{mask_name, SensitivePhone};
use crate::metrics;
use crate::pricing::{estimate_for, QualityTier};

#[derive(Debug, Deserialize)]
pub struct CalcLeadRequest {
    pub material: String,
    #[serde(default)]
    pub quality: QualityTier,
    pub volume_cm3: f64,
}

#[derive(Debug, Serialize)]
pub struct CalcLeadResponse {
    pub lead_id: String,
    pub price_est: u64,
}

#[derive(Debug, Serialize)]
pub struct AcceptedFile {
    pub name: String,
    pub size: u64,
    pub size_nice: String,
}

#[derive(Debug, Serialize)]
pub struct UploadLeadResponse {
    pub lead_id: String,
    pub files: Vec<AcceptedFile>,
}

fn referrer(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::REFERER).and_then(|v| v.to_str().ok())
}

/// POST /api/leads/calc - request a quote from the calculator
pub async fn submit_calc(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    payload: Result<Json<CalcLeadRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CalcLeadResponse>), AppError> {
    let Json(request) = payload?;

    check_volume(&state.config.calculator, request.volume_cm3)?;
    let material = request.material.trim();
    if material.is_empty() {
        return Err(AppError::BadRequest("material is required".to_string()));
    }

    let snapshot = state.catalog.snapshot();
    let estimate = estimate_for(&snapshot, material, request.volume_cm3, request.quality);

    let lead_id = generate_lead_id();
    let utm = capture_utm(&query, referrer(&headers));

    info!(
        lead_id = %lead_id,
        material = %estimate.material,
        quality = estimate.quality.as_str(),
        price_est = estimate.price,
        "Calculator lead accepted"
    );
    metrics::record_lead("calc", "accepted");

    state.submitter.spawn_submit(LeadPayload::calc(
        lead_id.clone(),
        estimate.material,
        estimate.quality,
        estimate.volume_cm3,
        estimate.price,
        utm,
    ));

    Ok((
        StatusCode::ACCEPTED,
        Json(CalcLeadResponse {
            lead_id,
            price_est: estimate.price,
        }),
    ))
}

/// POST /api/leads/upload - file-upload form
pub async fn submit_upload(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    payload: Result<Json<UploadForm>, JsonRejection>,
) -> Result<(StatusCode, Json<UploadLeadResponse>), AppError> {
    let Json(mut form) = payload?;

    form.files = merge_files(&[], &form.files);

    if let Err(e) = validate_upload_form(&form, Utc::now(), state.config.leads.min_fill_ms) {
        info!(error = %e, "Upload lead rejected");
        metrics::record_lead("file", "rejected");
        return Err(e);
    }

    let lead_id = generate_lead_id();
    let utm = capture_utm(&query, referrer(&headers));
    let contact = Contact {
        name: form.name.trim().to_string(),
        phone: format_phone(&form.phone),
    };

    info!(
        lead_id = %lead_id,
        name = %mask_name(&contact.name),
        phone = %SensitivePhone::new(&contact.phone),
        files = form.files.len(),
        "Upload lead accepted"
    );
    metrics::record_lead("file", "accepted");

    let files = form
        .files
        .iter()
        .map(|f| AcceptedFile {
            name: f.name.clone(),
            size: f.size,
            size_nice: bytes_to_nice(f.size),
        })
        .collect();

    state.submitter.spawn_submit(LeadPayload::file(
        lead_id.clone(),
        form.consent,
        contact,
        form.files,
        utm,
    ));

    Ok((StatusCode::ACCEPTED, Json(UploadLeadResponse { lead_id, files })))
}
