//! Handler for the shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for the submitted original URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created` with the composed short URL:
///
/// ```json
/// { "shortUrl": "https://s.example.com/Ab3-_9xZ" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is missing or malformed, and
/// 500 Internal Server Error on store failure or an unresolved identifier
/// collision.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let shortened = state.shorten_service.shorten(&payload.original_url).await?;

    tracing::debug!(
        identifier = %shortened.identifier,
        "Created mapping"
    );

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: shortened.short_url,
        }),
    ))
}
