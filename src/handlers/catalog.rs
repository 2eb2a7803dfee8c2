use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::models::ServiceCategory;
use crate::state::AppState;

// GET /api/services
pub async fn list_services(State(state): State<Arc<AppState>>) -> Json<Vec<ServiceCategory>> {
    Json(state.forms.catalog.categories().to_vec())
}
