//! Repository trait for mapping data access.

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Store contract for URL mappings.
///
/// The store exclusively owns persisted mappings. Uniqueness of `identifier`
/// is enforced atomically by the backing store, never by a read-then-write
/// check in the service layer: two concurrent creations racing to insert the
/// same identifier must be resolved by the store's constraint mechanism.
///
/// There is no update or delete operation; mappings are immutable once
/// written.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Persists a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the identifier already exists;
    /// an existing mapping is never overwritten.
    ///
    /// Returns [`AppError::Internal`] when the backing store cannot be
    /// reached or fails.
    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by its short identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<UrlMapping>, AppError>;
}
