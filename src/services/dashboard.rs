//! Dashboard service

use chrono::Utc;

use crate::{error::AppResult, models::dashboard::DashboardStats, repository::Repository};

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Recomputed from a full scan on every call
    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let rows = self.repository.requests.list_stat_rows().await?;
        let stats = DashboardStats::compute(&rows, Utc::now().date_naive());
        tracing::debug!("Dashboard stats over {} requests: {:?}", rows.len(), stats);
        Ok(stats)
    }
}
