//! Equipment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::{enums::EquipmentStatus, team::Team, user::TechnicianSummary};

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: Uuid,
    pub name: String,
    pub serial_number: Option<String>,
    pub category: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    /// Employee who owns / uses the equipment
    pub owner_employee_id: Option<Uuid>,
    /// Maintenance team responsible for the equipment
    pub team_id: Option<Uuid>,
    /// Technician pre-filled on new requests
    pub default_technician_id: Option<Uuid>,
    pub status: EquipmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Equipment search filters. Empty values are ignored.
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EquipmentQuery {
    /// Case-insensitive substring of the name
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub q: Option<String>,
    /// Exact department
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub department: Option<String>,
    /// Exact owner
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub owner_employee_id: Option<Uuid>,
}

/// Equipment with its resolved team and default technician
#[derive(Debug, Serialize, ToSchema)]
pub struct EquipmentDetail {
    pub equipment: Equipment,
    pub team: Option<Team>,
    pub default_technician: Option<TechnicianSummary>,
}

/// Open-request badge for one piece of equipment
#[derive(Debug, Serialize, ToSchema)]
pub struct OpenRequestCount {
    pub equipment_id: Uuid,
    pub open_count: i64,
}
