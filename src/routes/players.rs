use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;

use super::{message, parse_body};
use crate::db;
use crate::error::ApiError;
use crate::models::{CreatePlayer, DataResponse, ListResponse, MessageResponse, Player, UpdatePlayer};

const PLAYER_NOT_FOUND: &str = "Player not found.";
const FETCH_PLAYERS_FAILED: &str = "Error fetching players.";
const FETCH_PLAYER_FAILED: &str = "Error fetching player.";
const FETCH_TOP_SCORERS_FAILED: &str = "Error fetching top scorers.";
const CREATE_PLAYER_FAILED: &str = "Error creating player.";
const UPDATE_PLAYER_FAILED: &str = "Error updating player.";
const DELETE_PLAYER_FAILED: &str = "Error deleting player.";
const PLAYER_DELETED: &str = "Player deleted successfully.";

// Query parameters for listing players
#[derive(Deserialize)]
pub struct ListPlayersQuery {
    #[serde(default)]
    team: Option<String>,
    #[serde(default)]
    tournament: Option<String>,
}

// Query parameters for the top scorer view
#[derive(Deserialize)]
pub struct TopScorersQuery {
    tournament: String,
    /// Number of players to return (default: 10, max: 100)
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_limit() -> i64 {
    10
}

// GET /api/players?team=..&tournament=.. - List players sorted by name
pub async fn get_players(
    State(pool): State<SqlitePool>,
    params: Result<Query<ListPlayersQuery>, QueryRejection>,
) -> Result<Json<ListResponse<Player>>, ApiError> {
    let Query(params) = params.map_err(ApiError::bad_request(FETCH_PLAYERS_FAILED))?;

    let players = db::players::get_all_players(
        &pool,
        params.team.as_deref(),
        params.tournament.as_deref(),
    )
    .await
    .map_err(ApiError::internal(FETCH_PLAYERS_FAILED))?;

    Ok(Json(ListResponse::new(players)))
}

// GET /api/players/top-scorers?tournament=..&limit=10 - Top scorers of a tournament
pub async fn get_top_scorers(
    State(pool): State<SqlitePool>,
    params: Result<Query<TopScorersQuery>, QueryRejection>,
) -> Result<Json<ListResponse<Player>>, ApiError> {
    let Query(params) = params.map_err(ApiError::bad_request(FETCH_TOP_SCORERS_FAILED))?;

    let limit = params.limit.clamp(1, 100);

    let players = db::players::get_top_scorers(&pool, &params.tournament, limit)
        .await
        .map_err(ApiError::internal(FETCH_TOP_SCORERS_FAILED))?;

    Ok(Json(ListResponse::new(players)))
}

// GET /api/players/:id - Get player by ID
pub async fn get_player_by_id(
    State(pool): State<SqlitePool>,
    Path(player_id): Path<String>,
) -> Result<Json<DataResponse<Player>>, ApiError> {
    let player = db::players::get_player_by_id(&pool, &player_id)
        .await
        .map_err(ApiError::internal(FETCH_PLAYER_FAILED))?
        .ok_or(ApiError::NotFound(PLAYER_NOT_FOUND))?;

    Ok(Json(DataResponse::new(player)))
}

// POST /api/players - Create a player
pub async fn create_player(
    State(pool): State<SqlitePool>,
    payload: Result<Json<CreatePlayer>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<Player>>), ApiError> {
    let input = parse_body(payload, CREATE_PLAYER_FAILED)?;

    let player = db::players::create_player(&pool, input)
        .await
        .map_err(ApiError::bad_request(CREATE_PLAYER_FAILED))?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(player))))
}

// PUT|PATCH /api/players/:id - Merge fields into a player
pub async fn update_player(
    State(pool): State<SqlitePool>,
    Path(player_id): Path<String>,
    payload: Result<Json<UpdatePlayer>, JsonRejection>,
) -> Result<Json<DataResponse<Player>>, ApiError> {
    let input = parse_body(payload, UPDATE_PLAYER_FAILED)?;

    let player = db::players::update_player(&pool, &player_id, input)
        .await
        .map_err(ApiError::bad_request(UPDATE_PLAYER_FAILED))?
        .ok_or(ApiError::NotFound(PLAYER_NOT_FOUND))?;

    Ok(Json(DataResponse::new(player)))
}

// DELETE /api/players/:id - Delete a player
pub async fn delete_player(
    State(pool): State<SqlitePool>,
    Path(player_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = db::players::delete_player(&pool, &player_id)
        .await
        .map_err(ApiError::internal(DELETE_PLAYER_FAILED))?;

    if !deleted {
        return Err(ApiError::NotFound(PLAYER_NOT_FOUND));
    }

    Ok(message(PLAYER_DELETED))
}
