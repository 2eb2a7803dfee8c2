use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{Field, ValidationResult};
use crate::services::booking_form::{BookingForm, SubmitOutcome};
use crate::state::AppState;

/// Form fields as posted by the page. Missing fields count as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingPayload {
    #[serde(alias = "name")]
    pub customer_name: String,
    pub phone: String,
    pub email: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub service: String,
    pub notes: String,
}

impl BookingPayload {
    /// Replays the fields into a fresh form. The date goes in before the time
    /// so the time is checked against that date's slots.
    fn into_form(self, state: &AppState) -> BookingForm {
        let mut form = state.new_form();
        let fields = [
            (Field::CustomerName, self.customer_name),
            (Field::Phone, self.phone),
            (Field::Email, self.email),
            (Field::PreferredDate, self.preferred_date),
            (Field::PreferredTime, self.preferred_time),
            (Field::Service, self.service),
            (Field::Notes, self.notes),
        ];
        for (field, value) in fields {
            form.set_field(field, value);
        }
        form
    }
}

// POST /api/booking/validate
pub async fn validate_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookingPayload>,
) -> Json<ValidationResult> {
    Json(payload.into_form(&state).validate())
}

// POST /api/booking/submit
pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookingPayload>,
) -> Result<Response, AppError> {
    let mut form = payload.into_form(&state);
    let outcome = form.submit()?;
    let status = form.status().as_str();

    let response = match outcome {
        SubmitOutcome::Submitted(handoff) => Json(serde_json::json!({
            "status": status,
            "message": handoff.message,
            "url": handoff.url,
        }))
        .into_response(),
        SubmitOutcome::Rejected(result) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({
                "status": status,
                "failures": result.failures,
            })),
        )
            .into_response(),
    };

    Ok(response)
}
