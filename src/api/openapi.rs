//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, checkins, health, stats, visits};

struct StaffAuthAddon;

impl Modify for StaffAuthAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Artemis API",
        version = "1.0.0",
        description = "Museum & Gallery Visitor Check-in REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    modifiers(&StaffAuthAddon),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Kiosk
        checkins::check_in,
        checkins::current_counters,
        // History
        visits::list_visits,
        visits::export_visits,
        visits::clear_visits,
        // Dashboard
        stats::get_stats,
        stats::get_charts,
        // Staff
        auth::staff_login,
    ),
    components(
        schemas(
            // Visits
            crate::models::Visit,
            crate::models::CheckInRequest,
            crate::models::VisitQuery,
            crate::models::VisitorCategory,
            crate::models::Location,
            crate::models::Lang,
            checkins::CheckInResponse,
            visits::VisitPage,
            // Counters
            crate::models::ResetState,
            crate::models::PeriodCounter,
            crate::models::TicketNumbers,
            crate::models::Period,
            // Stats
            crate::models::stats::CounterStats,
            crate::models::stats::ChartData,
            crate::models::stats::StatEntry,
            stats::StatsQuery,
            // Staff
            crate::models::staff::StaffLoginRequest,
            crate::models::staff::StaffLoginResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "checkins", description = "Kiosk check-in"),
        (name = "visits", description = "Visit history and export"),
        (name = "stats", description = "Dashboard statistics"),
        (name = "auth", description = "Staff passcode gate")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
