//! Maintenance request endpoints

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use super::extract;
use crate::{
    error::AppResult,
    models::maintenance_request::{
        AssignTechnicianRequest, CalendarQuery, CompleteRequest, CreateMaintenanceRequest, MaintenanceRequest,
        RequestQuery, UpdateStatusRequest,
    },
};

/// List requests, optionally by equipment and type
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    params(RequestQuery),
    responses(
        (status = 200, description = "Requests, newest first", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
    extract::Query(query): extract::Query<RequestQuery>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    let requests = state.services.requests.list(&query).await?;
    Ok(Json(requests))
}

/// Preventive requests for the maintenance calendar
#[utoipa::path(
    get,
    path = "/requests/calendar",
    tag = "requests",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Preventive requests by scheduled date", body = Vec<MaintenanceRequest>),
        (status = 400, description = "Invalid range", body = crate::error::ErrorResponse)
    )
)]
pub async fn calendar(
    State(state): State<crate::AppState>,
    extract::Query(query): extract::Query<CalendarQuery>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    let requests = state.services.requests.calendar(&query).await?;
    Ok(Json(requests))
}

/// Create a maintenance request
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = CreateMaintenanceRequest,
    responses(
        (status = 201, description = "Request created", body = MaintenanceRequest),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    extract::Json(data): extract::Json<CreateMaintenanceRequest>,
) -> AppResult<(StatusCode, Json<MaintenanceRequest>)> {
    let request = state.services.requests.create(data).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Move a request to another stage
#[utoipa::path(
    put,
    path = "/requests/{id}/status",
    tag = "requests",
    params(("id" = Uuid, Path, description = "Request ID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated request", body = MaintenanceRequest),
        (status = 400, description = "Invalid status", body = crate::error::ErrorResponse),
        (status = 404, description = "Request not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_status(
    State(state): State<crate::AppState>,
    extract::Path(id): extract::Path<Uuid>,
    extract::Json(data): extract::Json<UpdateStatusRequest>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state.services.requests.update_status(id, &data).await?;
    Ok(Json(request))
}

/// Record hours spent and mark repaired
#[utoipa::path(
    post,
    path = "/requests/{id}/complete",
    tag = "requests",
    params(("id" = Uuid, Path, description = "Request ID")),
    request_body = CompleteRequest,
    responses(
        (status = 200, description = "Completed request", body = MaintenanceRequest),
        (status = 400, description = "Missing hours_spent", body = crate::error::ErrorResponse),
        (status = 404, description = "Request not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn complete_request(
    State(state): State<crate::AppState>,
    extract::Path(id): extract::Path<Uuid>,
    extract::Json(data): extract::Json<CompleteRequest>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state.services.requests.complete(id, &data).await?;
    Ok(Json(request))
}

/// Reassign the technician of a request
#[utoipa::path(
    put,
    path = "/requests/{id}/technician",
    tag = "requests",
    params(("id" = Uuid, Path, description = "Request ID")),
    request_body = AssignTechnicianRequest,
    responses(
        (status = 200, description = "Updated request", body = MaintenanceRequest),
        (status = 400, description = "Missing technician", body = crate::error::ErrorResponse),
        (status = 404, description = "Request or technician not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn assign_technician(
    State(state): State<crate::AppState>,
    extract::Path(id): extract::Path<Uuid>,
    extract::Json(data): extract::Json<AssignTechnicianRequest>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state.services.requests.assign_technician(id, &data).await?;
    Ok(Json(request))
}
