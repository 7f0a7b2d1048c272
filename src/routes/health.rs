use axum::{http::StatusCode, response::Json};
use serde::Serialize;

use super::message;
use crate::models::MessageResponse;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: i64,
}

// GET /
pub async fn root() -> Json<MessageResponse> {
    message("Football Tournament API is running")
}

// GET /health - Liveness only, does not touch the database
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    (StatusCode::OK, Json(response))
}
