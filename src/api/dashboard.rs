//! Dashboard endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::dashboard::DashboardStats};

/// Aggregate request counters
#[utoipa::path(
    get,
    path = "/dashboard/stats",
    tag = "dashboard",
    responses(
        (status = 200, description = "Request counters", body = DashboardStats)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = state.services.dashboard.stats().await?;
    Ok(Json(stats))
}
