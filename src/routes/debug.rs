use axum::{extract::State, response::Json};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;

use super::ROUTES;
use crate::db;
use crate::error::ApiError;

const DB_STATUS_FAILED: &str = "Database connection error";

#[derive(Serialize)]
pub struct RoutesResponse {
    routes: &'static [&'static str],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbStatusResponse {
    connection_state: &'static str,
    database_name: String,
    collections: Vec<String>,
    models: &'static [&'static str],
}

// GET /api/debug/routes - Every registered method and path
pub async fn get_routes() -> Json<RoutesResponse> {
    Json(RoutesResponse { routes: ROUTES })
}

// GET /api/debug/db - Connection state and collections of the store
pub async fn get_db_status(
    State(pool): State<SqlitePool>,
) -> Result<Json<DbStatusResponse>, ApiError> {
    let database_name = db::database_name(&pool)
        .await
        .map_err(ApiError::internal(DB_STATUS_FAILED))?;

    let collections = db::list_collections(&pool)
        .await
        .map_err(ApiError::internal(DB_STATUS_FAILED))?;

    let connection_state = if pool.is_closed() { "disconnected" } else { "connected" };

    Ok(Json(DbStatusResponse {
        connection_state,
        database_name,
        collections,
        models: db::MODELS,
    }))
}
