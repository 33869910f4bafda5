//! Team API endpoints

use axum::{extract::State, Json};
use uuid::Uuid;

use super::extract;
use crate::{
    error::AppResult,
    models::{team::Team, user::User},
};

/// List teams
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    responses(
        (status = 200, description = "Teams by name", body = Vec<Team>)
    )
)]
pub async fn list_teams(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Team>>> {
    let teams = state.services.teams.list().await?;
    Ok(Json(teams))
}

/// List members of a team
#[utoipa::path(
    get,
    path = "/teams/{id}/members",
    tag = "teams",
    params(("id" = Uuid, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Members by full name", body = Vec<User>)
    )
)]
pub async fn list_team_members(
    State(state): State<crate::AppState>,
    extract::Path(id): extract::Path<Uuid>,
) -> AppResult<Json<Vec<User>>> {
    let members = state.services.teams.list_members(id).await?;
    Ok(Json(members))
}
