//! Kiosk check-in endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use super::ApiJson;
use crate::{
    error::AppResult,
    models::{CheckInRequest, ResetState, Visit},
};

/// Check-in response shown on the kiosk ticket popup
#[derive(Serialize, ToSchema)]
pub struct CheckInResponse {
    /// Ticket label (zero-padded daily number)
    pub ticket: String,
    pub visit: Visit,
}

/// Register a visit
#[utoipa::path(
    post,
    path = "/checkins",
    tag = "checkins",
    request_body = CheckInRequest,
    responses(
        (status = 201, description = "Visit registered", body = CheckInResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse)
    )
)]
pub async fn check_in(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<CheckInRequest>,
) -> AppResult<(StatusCode, Json<CheckInResponse>)> {
    let visit = state.services.checkins.check_in(&request).await?;

    Ok((
        StatusCode::CREATED,
        Json(CheckInResponse {
            ticket: visit.ticket_label(),
            visit,
        }),
    ))
}

/// Current period counters
#[utoipa::path(
    get,
    path = "/counters",
    tag = "checkins",
    responses(
        (status = 200, description = "Counters with due resets applied", body = ResetState)
    )
)]
pub async fn current_counters(State(state): State<crate::AppState>) -> AppResult<Json<ResetState>> {
    let counters = state.services.checkins.current_counters().await?;
    Ok(Json(counters))
}
