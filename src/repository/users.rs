//! Users repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::user::{TechnicianSummary, User},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Members of a team, by full name
    pub async fn list_by_team(&self, team_id: Uuid) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, avatar_url, team_id, role
            FROM users
            WHERE team_id = $1
            ORDER BY full_name ASC
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_technician(&self, id: Uuid) -> AppResult<Option<TechnicianSummary>> {
        let row = sqlx::query_as::<_, TechnicianSummary>(
            "SELECT id, full_name, avatar_url FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
