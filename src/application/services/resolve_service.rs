//! Mapping lookup service.

use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for resolving short identifiers back to their original URLs.
///
/// Read-only: resolution never mutates the mapping, and the stored
/// `original_url` is returned verbatim without re-validation or rewriting.
pub struct ResolveService<R: MappingRepository> {
    repository: Arc<R>,
}

impl<R: MappingRepository> ResolveService<R> {
    /// Creates a new resolution service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Looks up the mapping for `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no mapping exists. Absence is a
    /// normal outcome, not a system failure; the boundary translates it into
    /// a 404 and must not redirect to a default page.
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, identifier: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_identifier(identifier)
            .await?
            .ok_or_else(|| {
                AppError::not_found("URL not found", json!({ "identifier": identifier }))
            })
    }
}
