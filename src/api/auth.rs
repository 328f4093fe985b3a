//! Staff authentication endpoint

use axum::{extract::State, Json};

use super::ApiJson;
use crate::{
    error::AppResult,
    models::staff::{StaffLoginRequest, StaffLoginResponse},
};

/// Open a staff session with the passcode
#[utoipa::path(
    post,
    path = "/auth/staff",
    tag = "auth",
    request_body = StaffLoginRequest,
    responses(
        (status = 200, description = "Staff session opened", body = StaffLoginResponse),
        (status = 401, description = "Invalid passcode", body = crate::error::ErrorResponse)
    )
)]
pub async fn staff_login(
    State(state): State<crate::AppState>,
    ApiJson(request): ApiJson<StaffLoginRequest>,
) -> AppResult<Json<StaffLoginResponse>> {
    let response = state.services.auth.login(&request.passcode)?;
    Ok(Json(response))
}
