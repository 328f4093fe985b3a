//! Visit history endpoints

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{visit::headcount, Visit, VisitQuery},
};

use super::{ApiQuery, StaffSession};

const DEFAULT_PER_PAGE: usize = 50;
const MAX_PER_PAGE: usize = 500;

/// One page of the visit log
#[derive(Serialize, ToSchema)]
pub struct VisitPage {
    /// Visits on this page, newest first
    pub items: Vec<Visit>,
    /// Number of visits matching the filter
    pub total: usize,
    /// People represented by all matching visits
    pub people: u64,
    /// Current page number
    pub page: usize,
    /// Items per page
    pub per_page: usize,
}

/// List visits with filters and pagination
#[utoipa::path(
    get,
    path = "/visits",
    tag = "visits",
    params(VisitQuery),
    responses(
        (status = 200, description = "Visit log", body = VisitPage),
        (status = 400, description = "Invalid filter", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_visits(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<VisitQuery>,
) -> AppResult<Json<VisitPage>> {
    let filter = query.filter()?;
    let visits = state.services.checkins.list(&filter).await?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
    let total = visits.len();
    let people = headcount(&visits);

    let items = visits
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .collect();

    Ok(Json(VisitPage {
        items,
        total,
        people,
        page,
        per_page,
    }))
}

/// Download the filtered visit log as CSV (staff only)
#[utoipa::path(
    get,
    path = "/visits/export",
    tag = "visits",
    security(("bearer_auth" = [])),
    params(VisitQuery),
    responses(
        (status = 200, description = "CSV file", content_type = "text/csv", body = String),
        (status = 400, description = "Invalid filter", body = crate::error::ErrorResponse),
        (status = 401, description = "Staff passcode required", body = crate::error::ErrorResponse)
    )
)]
pub async fn export_visits(
    State(state): State<crate::AppState>,
    StaffSession(_claims): StaffSession,
    ApiQuery(query): ApiQuery<VisitQuery>,
) -> AppResult<impl IntoResponse> {
    let filter = query.filter()?;
    let visits = state.services.checkins.list(&filter).await?;

    let export = &state.services.export;
    let csv = export.to_csv(&visits, query.lang.unwrap_or_default());
    let file_name = export.file_name(Utc::now());

    tracing::info!("Exported {} visits to {}", visits.len(), file_name);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        csv,
    ))
}

/// Erase all visits and counters (staff only)
#[utoipa::path(
    delete,
    path = "/visits",
    tag = "visits",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "All data cleared"),
        (status = 401, description = "Staff passcode required", body = crate::error::ErrorResponse)
    )
)]
pub async fn clear_visits(
    State(state): State<crate::AppState>,
    StaffSession(_claims): StaffSession,
) -> AppResult<StatusCode> {
    state.services.checkins.clear_all().await?;
    Ok(StatusCode::NO_CONTENT)
}
