//! API route configuration.

use crate::api::handlers::shorten_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// REST API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a shortened URL
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}
