//! Dashboard aggregates

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::enums::{RequestStatus, RequestType};

/// Projection of `maintenance_requests` loaded for the counters
#[derive(Debug, Clone, FromRow)]
pub struct RequestStatRow {
    pub id: Uuid,
    pub status: RequestStatus,
    pub scheduled_date: Option<NaiveDate>,
    pub request_type: RequestType,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total: i64,
    /// `new` + `in_progress`
    pub open: i64,
    /// Open with a scheduled date before today
    pub overdue: i64,
    pub repaired: i64,
    pub scrap: i64,
}

impl DashboardStats {
    pub fn compute(rows: &[RequestStatRow], today: NaiveDate) -> Self {
        rows.iter().fold(Self::default(), |mut stats, row| {
            stats.total += 1;
            match row.status {
                RequestStatus::New | RequestStatus::InProgress => {
                    stats.open += 1;
                    if row.scheduled_date.is_some_and(|d| d < today) {
                        stats.overdue += 1;
                    }
                }
                RequestStatus::Repaired => stats.repaired += 1,
                RequestStatus::Scrap => stats.scrap += 1,
            }
            stats
        })
    }
}
