//! Equipment API endpoints

use axum::{extract::State, Json};
use uuid::Uuid;

use super::extract;
use crate::{
    error::AppResult,
    models::{
        equipment::{Equipment, EquipmentDetail, EquipmentQuery, OpenRequestCount},
        maintenance_request::MaintenanceRequest,
    },
};

/// List equipment, optionally filtered
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    extract::Query(query): extract::Query<EquipmentQuery>,
) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.list(&query).await?;
    Ok(Json(equipment))
}

/// Get equipment with its team and default technician
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentDetail),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    extract::Path(id): extract::Path<Uuid>,
) -> AppResult<Json<EquipmentDetail>> {
    let detail = state.services.equipment.get_detail(id).await?;
    Ok(Json(detail))
}

/// List requests raised against an equipment
#[utoipa::path(
    get,
    path = "/equipment/{id}/requests",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Requests for the equipment", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn list_equipment_requests(
    State(state): State<crate::AppState>,
    extract::Path(id): extract::Path<Uuid>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    let requests = state.services.equipment.list_requests(id).await?;
    Ok(Json(requests))
}

/// Count open requests of an equipment
#[utoipa::path(
    get,
    path = "/equipment/{id}/open-count",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Open request count", body = OpenRequestCount)
    )
)]
pub async fn open_request_count(
    State(state): State<crate::AppState>,
    extract::Path(id): extract::Path<Uuid>,
) -> AppResult<Json<OpenRequestCount>> {
    let count = state.services.equipment.open_request_count(id).await?;
    Ok(Json(count))
}
