//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{identifier}`
///
/// Answers `302 Found` with the stored URL in the `Location` header. The
/// stored URL is emitted verbatim; no rewriting happens at redirect time.
///
/// # Errors
///
/// Returns 404 Not Found when no mapping exists for the identifier. An
/// unknown identifier never redirects to a default page.
pub async fn redirect_handler(
    Path(identifier): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mapping = state.resolve_service.resolve(&identifier).await?;

    tracing::debug!(identifier = %mapping.identifier, "Redirecting");

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, mapping.original_url)],
    ))
}
