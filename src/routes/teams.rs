use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use super::{message, parse_body};
use crate::db;
use crate::error::ApiError;
use crate::models::{
    CreateTeam, DataResponse, ListResponse, MessageResponse, Team, TeamPlayerInput, UpdateTeam,
};

const TEAM_NOT_FOUND: &str = "Team not found.";
const TEAM_OR_PLAYER_NOT_FOUND: &str = "Team or player not found.";
const FETCH_TEAMS_FAILED: &str = "Error fetching teams.";
const FETCH_TEAM_FAILED: &str = "Error fetching team.";
const CREATE_TEAM_FAILED: &str = "Error creating team.";
const UPDATE_TEAM_FAILED: &str = "Error updating team.";
const DELETE_TEAM_FAILED: &str = "Error deleting team.";
const TEAM_DELETED: &str = "Team deleted successfully.";
const ADD_PLAYER_FAILED: &str = "Error adding player.";
const UPDATE_PLAYER_FAILED: &str = "Error updating player.";
const REMOVE_PLAYER_FAILED: &str = "Error removing player.";

// GET /api/teams - List all teams sorted by name
pub async fn get_teams(
    State(pool): State<SqlitePool>,
) -> Result<Json<ListResponse<Team>>, ApiError> {
    let teams = db::teams::get_all_teams(&pool)
        .await
        .map_err(ApiError::internal(FETCH_TEAMS_FAILED))?;

    Ok(Json(ListResponse::new(teams)))
}

// GET /api/teams/:id - Get team by ID
pub async fn get_team_by_id(
    State(pool): State<SqlitePool>,
    Path(team_id): Path<String>,
) -> Result<Json<DataResponse<Team>>, ApiError> {
    let team = db::teams::get_team_by_id(&pool, &team_id)
        .await
        .map_err(ApiError::internal(FETCH_TEAM_FAILED))?
        .ok_or(ApiError::NotFound(TEAM_NOT_FOUND))?;

    Ok(Json(DataResponse::new(team)))
}

// POST /api/teams - Create a team
pub async fn create_team(
    State(pool): State<SqlitePool>,
    payload: Result<Json<CreateTeam>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<Team>>), ApiError> {
    let input = parse_body(payload, CREATE_TEAM_FAILED)?;

    let team = db::teams::create_team(&pool, input)
        .await
        .map_err(ApiError::bad_request(CREATE_TEAM_FAILED))?;

    tracing::info!("Created team {} ({})", team.name, team.id);

    Ok((StatusCode::CREATED, Json(DataResponse::new(team))))
}

// PUT|PATCH /api/teams/:id - Merge fields into a team
pub async fn update_team(
    State(pool): State<SqlitePool>,
    Path(team_id): Path<String>,
    payload: Result<Json<UpdateTeam>, JsonRejection>,
) -> Result<Json<DataResponse<Team>>, ApiError> {
    let input = parse_body(payload, UPDATE_TEAM_FAILED)?;

    let team = db::teams::update_team(&pool, &team_id, input)
        .await
        .map_err(ApiError::bad_request(UPDATE_TEAM_FAILED))?
        .ok_or(ApiError::NotFound(TEAM_NOT_FOUND))?;

    Ok(Json(DataResponse::new(team)))
}

// DELETE /api/teams/:id - Delete a team
pub async fn delete_team(
    State(pool): State<SqlitePool>,
    Path(team_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = db::teams::delete_team(&pool, &team_id)
        .await
        .map_err(ApiError::internal(DELETE_TEAM_FAILED))?;

    if !deleted {
        return Err(ApiError::NotFound(TEAM_NOT_FOUND));
    }

    tracing::info!("Deleted team {}", team_id);

    Ok(message(TEAM_DELETED))
}

// POST /api/teams/:id/players - Append a player to the roster
pub async fn add_player(
    State(pool): State<SqlitePool>,
    Path(team_id): Path<String>,
    payload: Result<Json<TeamPlayerInput>, JsonRejection>,
) -> Result<Json<DataResponse<Team>>, ApiError> {
    // Unknown team wins over a bad body
    db::teams::get_team_by_id(&pool, &team_id)
        .await
        .map_err(ApiError::bad_request(ADD_PLAYER_FAILED))?
        .ok_or(ApiError::NotFound(TEAM_NOT_FOUND))?;

    let input = parse_body(payload, ADD_PLAYER_FAILED)?;

    let team = db::teams::add_team_player(&pool, &team_id, input)
        .await
        .map_err(ApiError::bad_request(ADD_PLAYER_FAILED))?
        .ok_or(ApiError::NotFound(TEAM_NOT_FOUND))?;

    Ok(Json(DataResponse::new(team)))
}

// PUT|PATCH /api/teams/:id/players/:player_id - Replace a roster entry
pub async fn update_player(
    State(pool): State<SqlitePool>,
    Path((team_id, player_id)): Path<(String, String)>,
    payload: Result<Json<TeamPlayerInput>, JsonRejection>,
) -> Result<Json<DataResponse<Team>>, ApiError> {
    let input = parse_body(payload, UPDATE_PLAYER_FAILED)?;

    let team = db::teams::update_team_player(&pool, &team_id, &player_id, input)
        .await
        .map_err(ApiError::bad_request(UPDATE_PLAYER_FAILED))?
        .ok_or(ApiError::NotFound(TEAM_OR_PLAYER_NOT_FOUND))?;

    Ok(Json(DataResponse::new(team)))
}

// DELETE /api/teams/:id/players/:player_id - Pull a roster entry
pub async fn remove_player(
    State(pool): State<SqlitePool>,
    Path((team_id, player_id)): Path<(String, String)>,
) -> Result<Json<DataResponse<Team>>, ApiError> {
    let team = db::teams::remove_team_player(&pool, &team_id, &player_id)
        .await
        .map_err(ApiError::bad_request(REMOVE_PLAYER_FAILED))?
        .ok_or(ApiError::NotFound(TEAM_NOT_FOUND))?;

    Ok(Json(DataResponse::new(team)))
}
