//! Team service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{team::Team, user::User},
    repository::Repository,
};

#[derive(Clone)]
pub struct TeamService {
    repository: Repository,
}

impl TeamService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Team>> {
        self.repository.teams.list().await
    }

    pub async fn list_members(&self, team_id: Uuid) -> AppResult<Vec<User>> {
        self.repository.users.list_by_team(team_id).await
    }
}
