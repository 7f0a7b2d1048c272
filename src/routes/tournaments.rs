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
    CreateTournament, DataResponse, ListResponse, MessageResponse, Tournament, UpdateTournament,
};

const TOURNAMENT_NOT_FOUND: &str = "Tournament not found.";
const FETCH_TOURNAMENTS_FAILED: &str = "Error fetching tournaments.";
const FETCH_TOURNAMENT_FAILED: &str = "Error fetching tournament.";
const CREATE_TOURNAMENT_FAILED: &str = "Error creating tournament.";
const UPDATE_TOURNAMENT_FAILED: &str = "Error updating tournament.";
const DELETE_TOURNAMENT_FAILED: &str = "Error deleting tournament.";
const TOURNAMENT_DELETED: &str = "Tournament deleted successfully.";

// GET /api/tournaments - List all tournaments
pub async fn get_tournaments(
    State(pool): State<SqlitePool>,
) -> Result<Json<ListResponse<Tournament>>, ApiError> {
    let tournaments = db::tournaments::get_all_tournaments(&pool)
        .await
        .map_err(ApiError::internal(FETCH_TOURNAMENTS_FAILED))?;

    Ok(Json(ListResponse::new(tournaments)))
}

// GET /api/tournaments/:id - Get tournament by ID
pub async fn get_tournament_by_id(
    State(pool): State<SqlitePool>,
    Path(tournament_id): Path<String>,
) -> Result<Json<DataResponse<Tournament>>, ApiError> {
    let tournament = db::tournaments::get_tournament_by_id(&pool, &tournament_id)
        .await
        .map_err(ApiError::internal(FETCH_TOURNAMENT_FAILED))?
        .ok_or(ApiError::NotFound(TOURNAMENT_NOT_FOUND))?;

    Ok(Json(DataResponse::new(tournament)))
}

// POST /api/tournaments - Create a tournament
pub async fn create_tournament(
    State(pool): State<SqlitePool>,
    payload: Result<Json<CreateTournament>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<Tournament>>), ApiError> {
    let input = parse_body(payload, CREATE_TOURNAMENT_FAILED)?;

    let tournament = db::tournaments::create_tournament(&pool, input)
        .await
        .map_err(ApiError::bad_request(CREATE_TOURNAMENT_FAILED))?;

    tracing::info!("Created tournament {} ({})", tournament.name, tournament.id);

    Ok((StatusCode::CREATED, Json(DataResponse::new(tournament))))
}

// PUT|PATCH /api/tournaments/:id
pub async fn update_tournament(
    State(pool): State<SqlitePool>,
    Path(tournament_id): Path<String>,
    payload: Result<Json<UpdateTournament>, JsonRejection>,
) -> Result<Json<DataResponse<Tournament>>, ApiError> {
    let input = parse_body(payload, UPDATE_TOURNAMENT_FAILED)?;

    let tournament = db::tournaments::update_tournament(&pool, &tournament_id, input)
        .await
        .map_err(ApiError::bad_request(UPDATE_TOURNAMENT_FAILED))?
        .ok_or(ApiError::NotFound(TOURNAMENT_NOT_FOUND))?;

    Ok(Json(DataResponse::new(tournament)))
}

// DELETE /api/tournaments/:id
pub async fn delete_tournament(
    State(pool): State<SqlitePool>,
    Path(tournament_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = db::tournaments::delete_tournament(&pool, &tournament_id)
        .await
        .map_err(ApiError::internal(DELETE_TOURNAMENT_FAILED))?;

    if !deleted {
        return Err(ApiError::NotFound(TOURNAMENT_NOT_FOUND));
    }

    Ok(message(TOURNAMENT_DELETED))
}
