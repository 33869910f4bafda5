//! User model (employees and technicians)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Team member as listed under `/teams/{id}/members`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub team_id: Option<Uuid>,
    pub role: Option<String>,
}

/// Technician fields shown on an equipment detail
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TechnicianSummary {
    pub id: Uuid,
    pub full_name: String,
    pub avatar_url: Option<String>,
}
