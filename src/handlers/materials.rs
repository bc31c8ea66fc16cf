use axum::{extract::State, Json};

use super::AppState;
use crate::catalog::CatalogSnapshot;

/// GET /api/materials - current catalog snapshot
pub async fn list_materials(State(state): State<AppState>) -> Json<CatalogSnapshot> {
    Json(state.catalog.snapshot().as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::test_state;

    #[tokio::test]
    async fn test_list_materials_returns_snapshot() {
        let Json(snapshot) = list_materials(State(test_state())).await;
        assert_eq!(snapshot.materials.len(), 5);
        assert_eq!(snapshot.materials[0].name, "PETG");
    }
}
