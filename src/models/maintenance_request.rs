//! Maintenance request model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::enums::{Priority, RequestStatus, RequestType};
use crate::error::{AppError, AppResult};

/// Maintenance request record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceRequest {
    pub id: Uuid,
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: Uuid,
    pub team_id: Option<Uuid>,
    pub assigned_technician_id: Option<Uuid>,
    pub request_type: RequestType,
    pub priority: Priority,
    pub status: RequestStatus,
    /// Planned date, always set for preventive requests
    pub scheduled_date: Option<NaiveDate>,
    /// Date the request reached `repaired`
    pub completed_date: Option<NaiveDate>,
    pub hours_spent: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create request payload.
///
/// Required fields are optional here so that missing values surface as
/// validation messages instead of deserialization failures. Empty strings
/// count as missing.
#[serde_as]
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateMaintenanceRequest {
    pub subject: Option<String>,
    pub description: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub equipment_id: Option<Uuid>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub team_id: Option<Uuid>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub assigned_technician_id: Option<Uuid>,
    pub request_type: Option<RequestType>,
    pub priority: Option<Priority>,
    pub status: Option<RequestStatus>,
    /// Required when `request_type` is `preventive` (YYYY-MM-DD)
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Fully validated row ready for insertion
#[derive(Debug, Clone)]
pub struct NewMaintenanceRequest {
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: Uuid,
    pub team_id: Option<Uuid>,
    pub assigned_technician_id: Option<Uuid>,
    pub request_type: RequestType,
    pub priority: Priority,
    pub status: RequestStatus,
    pub scheduled_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl CreateMaintenanceRequest {
    /// Checks subject, equipment and scheduled date (in that order) and
    /// fills in defaults.
    pub fn validate(self, now: DateTime<Utc>) -> AppResult<NewMaintenanceRequest> {
        let subject = self
            .subject
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::validation("subject required"))?;
        let equipment_id = self
            .equipment_id
            .ok_or_else(|| AppError::validation("equipment_id required"))?;

        let request_type = self.request_type.unwrap_or_default();
        if request_type == RequestType::Preventive && self.scheduled_date.is_none() {
            return Err(AppError::validation("scheduled_date required for preventive"));
        }

        Ok(NewMaintenanceRequest {
            subject,
            description: self.description,
            equipment_id,
            team_id: self.team_id,
            assigned_technician_id: self.assigned_technician_id,
            request_type,
            priority: self.priority.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            scheduled_date: self.scheduled_date,
            created_at: self.created_at.unwrap_or(now),
        })
    }
}

/// Request search filters. Empty values are ignored.
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RequestQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, rename = "equipmentId", alias = "equipment_id")]
    #[param(value_type = Option<String>)]
    pub equipment_id: Option<Uuid>,
    /// `preventive` or `corrective`
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, rename = "type")]
    #[param(value_type = Option<String>)]
    pub request_type: Option<RequestType>,
}

/// Preventive calendar range (inclusive, both bounds optional)
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalendarQuery {
    /// First day (YYYY-MM-DD)
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub from: Option<NaiveDate>,
    /// Last day (YYYY-MM-DD)
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub to: Option<NaiveDate>,
}

/// Kanban move body. Kept as a raw JSON value so that unknown stages
/// and non-string values are reported as `invalid status`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub status: Option<serde_json::Value>,
}

impl UpdateStatusRequest {
    /// The status when it was sent as a string
    pub fn status_str(&self) -> Option<&str> {
        self.status.as_ref().and_then(|v| v.as_str())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CompleteRequest {
    pub hours_spent: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignTechnicianRequest {
    pub assigned_technician_id: Option<Uuid>,
}

/// Column values written by a status move
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub status: RequestStatus,
    pub updated_at: DateTime<Utc>,
    /// Set only when moving to `repaired`; other moves leave the column untouched
    pub completed_date: Option<NaiveDate>,
}

impl StatusChange {
    /// Parses a raw status and derives the columns to write.
    ///
    /// Any stage may follow any other; the board allows free dragging.
    pub fn parse(raw: Option<&str>, now: DateTime<Utc>) -> AppResult<Self> {
        let status = raw
            .and_then(|s| s.parse::<RequestStatus>().ok())
            .ok_or_else(|| AppError::validation("invalid status"))?;
        Ok(Self::new(status, now))
    }

    pub fn new(status: RequestStatus, now: DateTime<Utc>) -> Self {
        let completed_date = (status == RequestStatus::Repaired).then(|| now.date_naive());
        Self {
            status,
            updated_at: now,
            completed_date,
        }
    }
}

/// Column values written when a technician records the work done
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub hours_spent: f64,
    pub completed_date: NaiveDate,
    pub updated_at: DateTime<Utc>,
}

impl Completion {
    pub fn parse(hours_spent: Option<f64>, now: DateTime<Utc>) -> AppResult<Self> {
        let hours_spent = hours_spent.ok_or_else(|| AppError::validation("hours_spent required"))?;
        Ok(Self {
            hours_spent,
            completed_date: now.date_naive(),
            updated_at: now,
        })
    }
}
