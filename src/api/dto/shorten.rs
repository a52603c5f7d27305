//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a single URL.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten. Scheme-less input is accepted and
    /// normalized with an `https://` prefix.
    pub original_url: String,
}

/// Response for a successfully created mapping.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    /// The externally visible short URL, `<base>/<identifier>`.
    pub short_url: String,
}
