use axum::{extract::State, Json};

use super::AppState;
use crate::site::SiteInfo;

/// GET /api/site - contacts, branding and form limits
pub async fn site_info(State(state): State<AppState>) -> Json<SiteInfo> {
    Json(SiteInfo::from_config(&state.config))
}
