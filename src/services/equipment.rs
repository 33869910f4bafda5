//! Equipment service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        equipment::{Equipment, EquipmentDetail, EquipmentQuery, OpenRequestCount},
        maintenance_request::{MaintenanceRequest, RequestQuery},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &EquipmentQuery) -> AppResult<Vec<Equipment>> {
        tracing::debug!("Listing equipment with filters: {:?}", query);
        self.repository.equipment.list(query).await
    }

    /// Equipment with its team and default technician. Dangling references
    /// resolve to `None`.
    pub async fn get_detail(&self, id: Uuid) -> AppResult<EquipmentDetail> {
        let equipment = self.repository.equipment.get_by_id(id).await?;

        let team = match equipment.team_id {
            Some(team_id) => self.repository.teams.find_by_id(team_id).await?,
            None => None,
        };
        let default_technician = match equipment.default_technician_id {
            Some(tech_id) => self.repository.users.find_technician(tech_id).await?,
            None => None,
        };

        Ok(EquipmentDetail {
            equipment,
            team,
            default_technician,
        })
    }

    /// All requests raised against this equipment, newest first
    pub async fn list_requests(&self, id: Uuid) -> AppResult<Vec<MaintenanceRequest>> {
        let query = RequestQuery {
            equipment_id: Some(id),
            ..Default::default()
        };
        self.repository.requests.list(&query).await
    }

    pub async fn open_request_count(&self, id: Uuid) -> AppResult<OpenRequestCount> {
        let open_count = self.repository.requests.count_open_for_equipment(id).await?;
        Ok(OpenRequestCount {
            equipment_id: id,
            open_count,
        })
    }
}
