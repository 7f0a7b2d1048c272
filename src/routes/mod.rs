use axum::{
    extract::rejection::JsonRejection,
    response::Json,
    routing::{get, post, put},
    Router,
};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::models::{MessageResponse, Validate};

pub mod debug;
pub mod health;
pub mod matches;
pub mod players;
pub mod teams;
pub mod tournaments;

/// Every route served by [`router`], as reported by `/api/debug/routes`.
///
/// Kept in step with the `.route(..)` calls below by hand; axum can't list a
/// router's routes. The api tests check both directions for listed paths.
pub const ROUTES: &[&str] = &[
    "GET /",
    "GET /health",
    "GET /api/debug/routes",
    "GET /api/debug/db",
    "GET /api/teams",
    "POST /api/teams",
    "GET /api/teams/{id}",
    "PUT /api/teams/{id}",
    "PATCH /api/teams/{id}",
    "DELETE /api/teams/{id}",
    "POST /api/teams/{id}/players",
    "PUT /api/teams/{id}/players/{player_id}",
    "PATCH /api/teams/{id}/players/{player_id}",
    "DELETE /api/teams/{id}/players/{player_id}",
    "GET /api/players",
    "POST /api/players",
    "GET /api/players/top-scorers",
    "GET /api/players/{id}",
    "PUT /api/players/{id}",
    "PATCH /api/players/{id}",
    "DELETE /api/players/{id}",
    "GET /api/tournaments",
    "POST /api/tournaments",
    "GET /api/tournaments/{id}",
    "PUT /api/tournaments/{id}",
    "PATCH /api/tournaments/{id}",
    "DELETE /api/tournaments/{id}",
    "GET /api/matches",
    "POST /api/matches",
    "GET /api/matches/{id}",
    "PUT /api/matches/{id}",
    "PATCH /api/matches/{id}",
    "DELETE /api/matches/{id}",
];

/// Builds the API router around an already connected pool.
///
/// Adding or removing a route here means updating [`ROUTES`] as well.
pub fn router(pool: SqlitePool) -> Router {
    // CORS configuration for the frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(health::root))
        .route("/health", get(health::health_check))

        // Debug endpoints
        .route("/api/debug/routes", get(debug::get_routes))
        .route("/api/debug/db", get(debug::get_db_status))

        // Team endpoints
        .route("/api/teams", get(teams::get_teams).post(teams::create_team))
        .route(
            "/api/teams/{id}",
            get(teams::get_team_by_id)
                .put(teams::update_team)
                .patch(teams::update_team)
                .delete(teams::delete_team),
        )
        .route("/api/teams/{id}/players", post(teams::add_player))
        .route(
            "/api/teams/{id}/players/{player_id}",
            put(teams::update_player)
                .patch(teams::update_player)
                .delete(teams::remove_player),
        )

        // Player endpoints
        .route("/api/players", get(players::get_players).post(players::create_player))
        .route("/api/players/top-scorers", get(players::get_top_scorers))
        .route(
            "/api/players/{id}",
            get(players::get_player_by_id)
                .put(players::update_player)
                .patch(players::update_player)
                .delete(players::delete_player),
        )

        // Tournament endpoints
        .route(
            "/api/tournaments",
            get(tournaments::get_tournaments).post(tournaments::create_tournament),
        )
        .route(
            "/api/tournaments/{id}",
            get(tournaments::get_tournament_by_id)
                .put(tournaments::update_tournament)
                .patch(tournaments::update_tournament)
                .delete(tournaments::delete_tournament),
        )

        // Match endpoints
        .route("/api/matches", get(matches::get_matches).post(matches::create_match))
        .route(
            "/api/matches/{id}",
            get(matches::get_match_by_id)
                .put(matches::update_match)
                .patch(matches::update_match)
                .delete(matches::delete_match),
        )

        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found.")
}

/// Unwraps a JSON body and validates it, collapsing every failure into a 400
/// carrying `message`.
pub(crate) fn parse_body<T: Validate>(
    payload: Result<Json<T>, JsonRejection>,
    message: &'static str,
) -> Result<T, ApiError> {
    let Json(input) = payload.map_err(ApiError::bad_request(message))?;
    input.validate().map_err(ApiError::bad_request(message))?;
    Ok(input)
}

pub(crate) fn message(message: &str) -> Json<MessageResponse> {
    Json(MessageResponse::new(message))
}
