use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt::Display;
use thiserror::Error;

use crate::config::ConfigError;
use crate::models::MessageResponse;

/// Errors returned by request handlers.
///
/// Every variant carries a fixed, client-facing message. The underlying cause is
/// logged where the error is mapped and never reaches the response body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("{0}")]
    Internal(&'static str),
    #[error("{0}")]
    BadGateway(&'static str),
}

impl ApiError {
    /// Logs the cause and maps it to a 400 with `message`.
    ///
    /// ```ignore
    /// db::teams::create_team(&pool, input)
    ///     .await
    ///     .map_err(ApiError::bad_request("Error creating team."))?;
    /// ```
    pub fn bad_request<E: Display>(message: &'static str) -> impl FnOnce(E) -> Self {
        logged(message, ApiError::BadRequest)
    }

    /// Logs the cause and maps it to a 500 with `message`.
    pub fn internal<E: Display>(message: &'static str) -> impl FnOnce(E) -> Self {
        logged(message, ApiError::Internal)
    }

    /// Logs the cause and maps it to a 502 with `message`.
    pub fn bad_gateway<E: Display>(message: &'static str) -> impl FnOnce(E) -> Self {
        logged(message, ApiError::BadGateway)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

fn logged<E: Display>(
    message: &'static str,
    variant: fn(&'static str) -> ApiError,
) -> impl FnOnce(E) -> ApiError {
    move |err| {
        tracing::error!("{}: {}", message, err);
        variant(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(MessageResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

/// Payload rejected at the boundary before reaching the store
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("`{0}` is required")]
    Required(&'static str),
}

/// Fatal errors while bringing a server up
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
