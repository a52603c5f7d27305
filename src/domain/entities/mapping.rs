//! Mapping entity representing a shortened URL.

use chrono::{DateTime, Utc};

/// A persisted mapping between a short identifier and an original URL.
///
/// Mappings are immutable once created: there is no update operation, and
/// `created_at` is set exactly once at insertion.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i64,
    /// Short opaque token, 8 characters from the URL-safe alphabet, unique
    /// across all mappings.
    pub identifier: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        identifier: String,
        original_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            identifier,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// The `original_url` must already be normalized and validated; the store
/// persists exactly this string.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub identifier: String,
    pub original_url: String,
}
