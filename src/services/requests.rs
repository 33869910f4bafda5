//! Maintenance request service

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::maintenance_request::{
        AssignTechnicianRequest, CalendarQuery, CompleteRequest, Completion, CreateMaintenanceRequest,
        MaintenanceRequest, RequestQuery, StatusChange, UpdateStatusRequest,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct RequestService {
    repository: Repository,
}

impl RequestService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &RequestQuery) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository.requests.list(query).await
    }

    pub async fn calendar(&self, query: &CalendarQuery) -> AppResult<Vec<MaintenanceRequest>> {
        if let (Some(from), Some(to)) = (query.from, query.to) {
            if from > to {
                return Err(AppError::validation("from must not be after to"));
            }
        }
        self.repository.requests.calendar(query).await
    }

    /// Create a request. Status defaults to `new`.
    pub async fn create(&self, data: CreateMaintenanceRequest) -> AppResult<MaintenanceRequest> {
        let new_request = data.validate(Utc::now())?;

        // Fails with NotFound when the equipment does not exist
        self.repository.equipment.get_by_id(new_request.equipment_id).await?;

        let created = self.repository.requests.create(&new_request).await?;
        tracing::info!(
            "Created {} request {} for equipment {}",
            created.request_type,
            created.id,
            created.equipment_id
        );
        Ok(created)
    }

    /// Kanban move; scrapping a request also scraps its equipment
    pub async fn update_status(&self, id: Uuid, data: &UpdateStatusRequest) -> AppResult<MaintenanceRequest> {
        let change = StatusChange::parse(data.status_str(), Utc::now())?;

        let updated = self
            .repository
            .requests
            .update_status(id, &change)
            .await
            .inspect_err(|e| {
                if let AppError::NotFound(_) = e {
                    tracing::warn!("Status move to {} on unknown request {}", change.status, id);
                }
            })?;

        tracing::info!("Request {} moved to {}", id, change.status);
        if change.status.scraps_equipment() {
            tracing::info!("Equipment {} scrapped via request {}", updated.equipment_id, id);
        }
        Ok(updated)
    }

    /// Record hours spent and mark the request repaired
    pub async fn complete(&self, id: Uuid, data: &CompleteRequest) -> AppResult<MaintenanceRequest> {
        let completion = Completion::parse(data.hours_spent, Utc::now())?;
        let updated = self.repository.requests.complete(id, &completion).await?;
        tracing::info!("Request {} completed in {}h", id, completion.hours_spent);
        Ok(updated)
    }

    pub async fn assign_technician(&self, id: Uuid, data: &AssignTechnicianRequest) -> AppResult<MaintenanceRequest> {
        let technician_id = data
            .assigned_technician_id
            .ok_or_else(|| AppError::validation("assigned_technician_id required"))?;

        if self.repository.users.find_technician(technician_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Technician {} not found", technician_id)));
        }

        let updated = self
            .repository
            .requests
            .assign_technician(id, technician_id, Utc::now())
            .await?;
        tracing::info!("Request {} assigned to technician {}", id, technician_id);
        Ok(updated)
    }
}
