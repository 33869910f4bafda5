//! Maintenance requests repository

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use super::equipment::EquipmentRepository;
use crate::{
    error::{AppError, AppResult},
    models::{
        dashboard::RequestStatRow,
        enums::{EquipmentStatus, RequestStatus, RequestType},
        maintenance_request::{
            CalendarQuery, Completion, MaintenanceRequest, NewMaintenanceRequest, RequestQuery, StatusChange,
        },
    },
};

#[derive(Clone)]
pub struct RequestsRepository {
    pool: Pool<Postgres>,
}

fn not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("Request {} not found", id))
}

impl RequestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List requests with optional equipment / type filters, newest first
    pub async fn list(&self, query: &RequestQuery) -> AppResult<Vec<MaintenanceRequest>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.equipment_id.is_some() {
            conditions.push(format!("equipment_id = ${}", idx));
            idx += 1;
        }
        if query.request_type.is_some() {
            conditions.push(format!("request_type = ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let select_q = format!(
            "SELECT * FROM maintenance_requests {} ORDER BY created_at DESC",
            where_clause
        );
        let mut builder = sqlx::query_as::<_, MaintenanceRequest>(&select_q);
        if let Some(equipment_id) = query.equipment_id {
            builder = builder.bind(equipment_id);
        }
        if let Some(request_type) = query.request_type {
            builder = builder.bind(request_type);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Count requests of an equipment that are still open
    pub async fn count_open_for_equipment(&self, equipment_id: Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM maintenance_requests
            WHERE equipment_id = $1 AND status IN ($2, $3)
            "#,
        )
        .bind(equipment_id)
        .bind(RequestStatus::New)
        .bind(RequestStatus::InProgress)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// Preventive requests scheduled inside the range, by scheduled date
    pub async fn calendar(&self, query: &CalendarQuery) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            SELECT * FROM maintenance_requests
            WHERE request_type = $1
              AND scheduled_date IS NOT NULL
              AND ($2::date IS NULL OR scheduled_date >= $2)
              AND ($3::date IS NULL OR scheduled_date <= $3)
            ORDER BY scheduled_date ASC, created_at ASC
            "#,
        )
        .bind(RequestType::Preventive)
        .bind(query.from)
        .bind(query.to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Minimal projection of every request for the dashboard counters
    pub async fn list_stat_rows(&self) -> AppResult<Vec<RequestStatRow>> {
        let rows = sqlx::query_as::<_, RequestStatRow>(
            "SELECT id, status, scheduled_date, request_type FROM maintenance_requests",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a validated request
    pub async fn create(&self, data: &NewMaintenanceRequest) -> AppResult<MaintenanceRequest> {
        let row = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            INSERT INTO maintenance_requests (
                subject, description, equipment_id, team_id, assigned_technician_id,
                request_type, priority, status, scheduled_date, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&data.subject)
        .bind(&data.description)
        .bind(data.equipment_id)
        .bind(data.team_id)
        .bind(data.assigned_technician_id)
        .bind(data.request_type)
        .bind(data.priority)
        .bind(data.status)
        .bind(data.scheduled_date)
        .bind(data.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Apply a status move. Moving to `scrap` also marks the equipment
    /// `scrapped`; both writes share one transaction.
    pub async fn update_status(&self, id: Uuid, change: &StatusChange) -> AppResult<MaintenanceRequest> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            UPDATE maintenance_requests
            SET status = $1,
                updated_at = $2,
                completed_date = COALESCE($3, completed_date)
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(change.status)
        .bind(change.updated_at)
        .bind(change.completed_date)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found(id))?;

        if change.status.scraps_equipment() {
            let affected =
                EquipmentRepository::set_status_in(&mut tx, row.equipment_id, EquipmentStatus::Scrapped, change.updated_at)
                    .await?;
            if affected == 0 {
                tracing::warn!("Request {} scrapped but equipment {} is missing", id, row.equipment_id);
            }
        }

        tx.commit().await?;
        Ok(row)
    }

    /// Record hours spent and close the request as repaired
    pub async fn complete(&self, id: Uuid, completion: &Completion) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            UPDATE maintenance_requests
            SET hours_spent = $1,
                status = $2,
                completed_date = $3,
                updated_at = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(completion.hours_spent)
        .bind(RequestStatus::Repaired)
        .bind(completion.completed_date)
        .bind(completion.updated_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    pub async fn assign_technician(
        &self,
        id: Uuid,
        technician_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<MaintenanceRequest> {
        sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            UPDATE maintenance_requests
            SET assigned_technician_id = $1, updated_at = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(technician_id)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }
}
