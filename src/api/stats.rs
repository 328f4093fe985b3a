//! Dashboard statistics endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::ApiQuery;
use crate::{
    error::AppResult,
    models::{
        stats::{ChartData, CounterStats},
        Lang, Location,
    },
};

/// Dashboard query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct StatsQuery {
    /// Restrict to one location; all locations when absent
    pub location: Option<Location>,
    /// Label language (en, ms)
    pub lang: Option<Lang>,
}

/// Head-counts for the current day, week, month, year and all time
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    params(StatsQuery),
    responses(
        (status = 200, description = "Counter statistics", body = CounterStats),
        (status = 400, description = "Invalid query", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<StatsQuery>,
) -> AppResult<Json<CounterStats>> {
    let stats = state.services.stats.counter_stats(query.location).await?;
    Ok(Json(stats))
}

/// Location distribution and visitor split
#[utoipa::path(
    get,
    path = "/stats/charts",
    tag = "stats",
    params(StatsQuery),
    responses(
        (status = 200, description = "Chart series", body = ChartData),
        (status = 400, description = "Invalid query", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_charts(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<StatsQuery>,
) -> AppResult<Json<ChartData>> {
    let charts = state
        .services
        .stats
        .chart_data(query.location, query.lang.unwrap_or_default())
        .await?;
    Ok(Json(charts))
}
