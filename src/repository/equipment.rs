//! Equipment repository

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres, Transaction};
use uuid::Uuid;

use super::contains_pattern;
use crate::{
    error::{AppError, AppResult},
    models::{
        enums::EquipmentStatus,
        equipment::{Equipment, EquipmentQuery},
    },
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List equipment matching the optional filters, newest first
    pub async fn list(&self, query: &EquipmentQuery) -> AppResult<Vec<Equipment>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.q.is_some() {
            conditions.push(format!("name ILIKE ${}", idx));
            idx += 1;
        }
        if query.department.is_some() {
            conditions.push(format!("department = ${}", idx));
            idx += 1;
        }
        if query.owner_employee_id.is_some() {
            conditions.push(format!("owner_employee_id = ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let select_q = format!("SELECT * FROM equipment {} ORDER BY created_at DESC", where_clause);
        let mut builder = sqlx::query_as::<_, Equipment>(&select_q);
        if let Some(ref q) = query.q {
            builder = builder.bind(contains_pattern(q));
        }
        if let Some(ref department) = query.department {
            builder = builder.bind(department);
        }
        if let Some(owner) = query.owner_employee_id {
            builder = builder.bind(owner);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Set the equipment status inside an open transaction
    pub async fn set_status_in(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        status: EquipmentStatus,
        now: DateTime<Utc>,
    ) -> AppResult<u64> {
        let result = sqlx::query("UPDATE equipment SET status = $1, updated_at = $2 WHERE id = $3")
            .bind(status)
            .bind(now)
            .bind(id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected())
    }
}
