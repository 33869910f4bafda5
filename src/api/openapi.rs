//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{dashboard, equipment, health, requests, teams};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GearGuard API",
        version = "1.0.0",
        description = "Maintenance Tracking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::list_equipment_requests,
        equipment::open_request_count,
        // Teams
        teams::list_teams,
        teams::list_team_members,
        // Requests
        requests::list_requests,
        requests::calendar,
        requests::create_request,
        requests::update_status,
        requests::complete_request,
        requests::assign_technician,
        // Dashboard
        dashboard::get_stats,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentDetail,
            crate::models::equipment::OpenRequestCount,
            crate::models::enums::EquipmentStatus,
            // Teams
            crate::models::team::Team,
            crate::models::user::User,
            crate::models::user::TechnicianSummary,
            // Requests
            crate::models::maintenance_request::MaintenanceRequest,
            crate::models::maintenance_request::CreateMaintenanceRequest,
            crate::models::maintenance_request::UpdateStatusRequest,
            crate::models::maintenance_request::CompleteRequest,
            crate::models::maintenance_request::AssignTechnicianRequest,
            crate::models::enums::RequestStatus,
            crate::models::enums::RequestType,
            crate::models::enums::Priority,
            // Dashboard
            crate::models::dashboard::DashboardStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment lookup"),
        (name = "teams", description = "Maintenance teams"),
        (name = "requests", description = "Maintenance request lifecycle"),
        (name = "dashboard", description = "Aggregate counters")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
