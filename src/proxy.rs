//! Frontend server that forwards `/api/*` to the backend API.
//!
//! Requests are relayed with their method, query string, headers and body;
//! the backend's status, headers and body come back unchanged apart from
//! hop-by-hop headers.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, HeaderMap, HeaderName, Uri},
    response::{Json, Response},
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::models::MessageResponse;

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;
const READ_BODY_FAILED: &str = "Error reading request body.";
const BACKEND_UNAVAILABLE: &str = "Backend unavailable.";

static HOP_BY_HOP: [HeaderName; 9] = [
    header::CONNECTION,
    header::HOST,
    header::CONTENT_LENGTH,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[derive(Clone)]
struct ProxyState {
    client: reqwest::Client,
    backend_url: String,
}

/// Builds the frontend router forwarding to `backend_url`.
pub fn router(backend_url: &str, client: reqwest::Client) -> Router {
    let state = ProxyState {
        client,
        backend_url: backend_url.trim_end_matches('/').to_string(),
    };

    Router::new()
        .route("/", get(root))
        .route("/api/{*path}", any(forward))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Football Tournament frontend"))
}

async fn forward(State(state): State<ProxyState>, request: Request) -> Result<Response, ApiError> {
    let (parts, body) = request.into_parts();

    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(ApiError::bad_request(READ_BODY_FAILED))?;

    let url = upstream_url(&state.backend_url, &parts.uri);
    tracing::debug!("Proxying {} {}", parts.method, url);

    let upstream = state
        .client
        .request(parts.method, &url)
        .headers(strip_hop_by_hop(parts.headers))
        .body(body)
        .send()
        .await
        .map_err(ApiError::bad_gateway(BACKEND_UNAVAILABLE))?;

    let status = upstream.status();
    let headers = strip_hop_by_hop(upstream.headers().clone());
    let bytes = upstream
        .bytes()
        .await
        .map_err(ApiError::bad_gateway(BACKEND_UNAVAILABLE))?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;

    Ok(response)
}

/// Backend URL for an incoming request, keeping path and query as-is.
fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    format!("{backend_url}{path_and_query}")
}

fn strip_hop_by_hop(mut headers: HeaderMap) -> HeaderMap {
    for name in HOP_BY_HOP.iter() {
        headers.remove(name);
    }
    headers
}
