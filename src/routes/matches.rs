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
use crate::models::{CreateMatch, DataResponse, ListResponse, Match, MessageResponse, UpdateMatch};

const MATCH_NOT_FOUND: &str = "Match not found.";
const FETCH_MATCHES_FAILED: &str = "Error fetching matches.";
const FETCH_MATCH_FAILED: &str = "Error fetching match.";
const CREATE_MATCH_FAILED: &str = "Error creating match.";
const UPDATE_MATCH_FAILED: &str = "Error updating match.";
const DELETE_MATCH_FAILED: &str = "Error deleting match.";
const MATCH_DELETED: &str = "Match deleted successfully.";

#[derive(Deserialize)]
pub struct ListMatchesQuery {
    #[serde(default)]
    tournament: Option<String>,
}

// GET /api/matches?tournament=.. - List matches by date
pub async fn get_matches(
    State(pool): State<SqlitePool>,
    params: Result<Query<ListMatchesQuery>, QueryRejection>,
) -> Result<Json<ListResponse<Match>>, ApiError> {
    let Query(params) = params.map_err(ApiError::bad_request(FETCH_MATCHES_FAILED))?;

    let matches = db::matches::get_all_matches(&pool, params.tournament.as_deref())
        .await
        .map_err(ApiError::internal(FETCH_MATCHES_FAILED))?;

    Ok(Json(ListResponse::new(matches)))
}

// GET /api/matches/:id
pub async fn get_match_by_id(
    State(pool): State<SqlitePool>,
    Path(match_id): Path<String>,
) -> Result<Json<DataResponse<Match>>, ApiError> {
    let found = db::matches::get_match_by_id(&pool, &match_id)
        .await
        .map_err(ApiError::internal(FETCH_MATCH_FAILED))?
        .ok_or(ApiError::NotFound(MATCH_NOT_FOUND))?;

    Ok(Json(DataResponse::new(found)))
}

// POST /api/matches
pub async fn create_match(
    State(pool): State<SqlitePool>,
    payload: Result<Json<CreateMatch>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<Match>>), ApiError> {
    let input = parse_body(payload, CREATE_MATCH_FAILED)?;

    let created = db::matches::create_match(&pool, input)
        .await
        .map_err(ApiError::bad_request(CREATE_MATCH_FAILED))?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(created))))
}

// PUT|PATCH /api/matches/:id - Typically used to record scores and status
pub async fn update_match(
    State(pool): State<SqlitePool>,
    Path(match_id): Path<String>,
    payload: Result<Json<UpdateMatch>, JsonRejection>,
) -> Result<Json<DataResponse<Match>>, ApiError> {
    let input = parse_body(payload, UPDATE_MATCH_FAILED)?;

    let updated = db::matches::update_match(&pool, &match_id, input)
        .await
        .map_err(ApiError::bad_request(UPDATE_MATCH_FAILED))?
        .ok_or(ApiError::NotFound(MATCH_NOT_FOUND))?;

    Ok(Json(DataResponse::new(updated)))
}

// DELETE /api/matches/:id
pub async fn delete_match(
    State(pool): State<SqlitePool>,
    Path(match_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = db::matches::delete_match(&pool, &match_id)
        .await
        .map_err(ApiError::internal(DELETE_MATCH_FAILED))?;

    if !deleted {
        return Err(ApiError::NotFound(MATCH_NOT_FOUND));
    }

    Ok(message(MATCH_DELETED))
}
