//! Mapping creation service.

use std::sync::Arc;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::identifier_generator::generate_identifier;
use crate::utils::url_validator::{is_valid_url, normalize_url};
use serde_json::json;

/// Result of a successful shortening request.
#[derive(Debug, Clone)]
pub struct ShortenedMapping {
    pub identifier: String,
    /// Externally visible short URL, `<base>/<identifier>`.
    pub short_url: String,
    /// The normalized URL exactly as stored.
    pub original_url: String,
}

/// Service for creating URL mappings.
///
/// Orchestrates validation, normalization, identifier generation and storage.
/// Holds no mapping state between requests; every call is self-contained.
pub struct ShortenService<R: MappingRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: MappingRepository> ShortenService<R> {
    /// Number of insert attempts before an unresolved identifier collision
    /// escalates to an internal error.
    const MAX_ATTEMPTS: usize = 3;

    /// Creates a new shortening service.
    ///
    /// `base_url` is the public prefix for composed short URLs; a trailing
    /// slash is tolerated.
    pub fn new(repository: Arc<R>, base_url: String) -> Self {
        Self {
            repository,
            base_url,
        }
    }

    /// Creates a mapping for `raw_url` and returns the short URL.
    ///
    /// # Policy
    ///
    /// 1. Empty or whitespace-only input is rejected.
    /// 2. Scheme-less input is normalized with an `https://` prefix.
    /// 3. The normalized URL must pass the strict validity check; the store
    ///    receives exactly the validated string.
    /// 4. A fresh identifier is generated and inserted. An identifier
    ///    collision is retried with a new identifier, up to
    ///    [`Self::MAX_ATTEMPTS`] attempts in total.
    ///
    /// Calling twice with the same URL creates two distinct mappings; there
    /// is no deduplication.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for missing or malformed input,
    /// [`AppError::Internal`] on store failure or exhausted collision retries.
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortenedMapping, AppError> {
        if raw_url.trim().is_empty() {
            return Err(AppError::bad_request("Missing URL", json!({})));
        }

        let normalized_url = normalize_url(raw_url);

        if !is_valid_url(&normalized_url) {
            return Err(AppError::bad_request(
                "Invalid URL format",
                json!({ "url": raw_url }),
            ));
        }

        let mapping = self.insert_with_retry(normalized_url).await?;

        let short_url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            mapping.identifier
        );

        Ok(ShortenedMapping {
            identifier: mapping.identifier,
            short_url,
            original_url: mapping.original_url,
        })
    }

    /// Inserts the mapping, regenerating the identifier on collision.
    ///
    /// Uniqueness is enforced by the store's constraint; this loop only
    /// reacts to the resulting conflict. Non-conflict errors propagate
    /// immediately without retry.
    async fn insert_with_retry(&self, original_url: String) -> Result<UrlMapping, AppError> {
        for attempt in 1..=Self::MAX_ATTEMPTS {
            let new_mapping = NewMapping {
                identifier: generate_identifier(),
                original_url: original_url.clone(),
            };

            match self.repository.insert(new_mapping).await {
                Ok(mapping) => return Ok(mapping),
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, "Identifier collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique identifier",
            json!({ "attempts": Self::MAX_ATTEMPTS }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UrlMapping;
    use crate::domain::repositories::MockMappingRepository;
    use chrono::Utc;
    use mockall::Sequence;

    const BASE_URL: &str = "https://s.example.com";

    fn service(repo: MockMappingRepository) -> ShortenService<MockMappingRepository> {
        ShortenService::new(Arc::new(repo), BASE_URL.to_string())
    }

    fn echo_insert(new_mapping: NewMapping) -> Result<UrlMapping, AppError> {
        Ok(UrlMapping::new(
            1,
            new_mapping.identifier,
            new_mapping.original_url,
            Utc::now(),
        ))
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo.expect_insert().times(1).returning(echo_insert);

        let result = service(mock_repo).shorten("https://example.com/a").await;

        assert!(result.is_ok());
        let shortened = result.unwrap();
        assert_eq!(shortened.identifier.len(), 8);
        assert_eq!(shortened.original_url, "https://example.com/a");
        assert_eq!(
            shortened.short_url,
            format!("{}/{}", BASE_URL, shortened.identifier)
        );
    }

    #[tokio::test]
    async fn test_shorten_normalizes_scheme_less_input() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_insert()
            .withf(|new_mapping| new_mapping.original_url == "https://example.com/a")
            .times(1)
            .returning(echo_insert);

        let result = service(mock_repo).shorten("example.com/a").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().original_url, "https://example.com/a");
    }

    #[tokio::test]
    async fn test_shorten_rejects_empty_input() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo.expect_insert().times(0);

        let result = service(mock_repo).shorten("").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn test_shorten_rejects_whitespace_only_input() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo.expect_insert().times(0);

        let result = service(mock_repo).shorten("   \t ").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn test_shorten_rejects_invalid_url() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo.expect_insert().times(0);

        let result = service(mock_repo).shorten("ht!tp://bad").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn test_shorten_retries_on_collision() {
        let mut mock_repo = MockMappingRepository::new();
        let mut seq = Sequence::new();

        mock_repo
            .expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(AppError::conflict(
                    "Unique constraint violation",
                    json!({}),
                ))
            });
        mock_repo
            .expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(echo_insert);

        let result = service(mock_repo).shorten("https://example.com").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_exhausted_retries_become_internal_error() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo.expect_insert().times(3).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                json!({}),
            ))
        });

        let result = service(mock_repo).shorten("https://example.com").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_shorten_does_not_retry_store_failures() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::internal("Store unavailable", json!({}))));

        let result = service(mock_repo).shorten("https://example.com").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_shorten_tolerates_trailing_slash_in_base_url() {
        let mut mock_repo = MockMappingRepository::new();
        mock_repo.expect_insert().times(1).returning(echo_insert);

        let service = ShortenService::new(
            Arc::new(mock_repo),
            "https://s.example.com/".to_string(),
        );
        let shortened = service.shorten("https://example.com").await.unwrap();

        assert_eq!(
            shortened.short_url,
            format!("https://s.example.com/{}", shortened.identifier)
        );
    }
}
