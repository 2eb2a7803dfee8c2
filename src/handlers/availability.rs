use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::availability::weekday_name;
use crate::models::{SlotOption, TimeSelector};
use crate::services::scheduling::compute_availability;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub date: String,
}

#[derive(Serialize)]
pub struct AvailabilityResponse {
    pub date: String,
    pub weekday: &'static str,
    pub is_open: bool,
    pub slots: Vec<SlotOption>,
    pub placeholder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

// GET /api/availability?date=YYYY-MM-DD
pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let date = NaiveDate::parse_from_str(query.date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("invalid date: {}", query.date)))?;

    let window = compute_availability(date, &state.forms.hours);
    let selector = TimeSelector::from_window(Some(&window));

    Ok(Json(AvailabilityResponse {
        date: date.format("%Y-%m-%d").to_string(),
        weekday: weekday_name(date.weekday()),
        is_open: window.is_open,
        slots: window.slots.iter().map(|s| s.option()).collect(),
        placeholder: selector.placeholder(),
        hint: selector.hint(),
    }))
}
