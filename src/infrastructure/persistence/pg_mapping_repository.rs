//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// PostgreSQL repository for mapping storage and retrieval.
///
/// Uniqueness of `identifier` is enforced by the `mappings_identifier_key`
/// constraint, so concurrent inserts of the same identifier are serialized by
/// the database and exactly one wins. The insert is a single atomic
/// statement; there is no read-then-write window.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO mappings (identifier, original_url)
            VALUES ($1, $2)
            RETURNING id, identifier, original_url, created_at
            "#,
        )
        .bind(&new_mapping.identifier)
        .bind(&new_mapping.original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, identifier, original_url, created_at
            FROM mappings
            WHERE identifier = $1
            "#,
        )
        .bind(identifier)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }
}
