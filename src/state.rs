//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{ResolveService, ShortenService};
use crate::infrastructure::persistence::PgMappingRepository;

/// Application state shared across request handlers.
///
/// Services hold no per-request state; everything here is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<PgMappingRepository>>,
    pub resolve_service: Arc<ResolveService<PgMappingRepository>>,
    /// Pool handle kept for the health check.
    pub db: PgPool,
}

impl AppState {
    /// Wires the services to a PostgreSQL-backed mapping store.
    pub fn new(pool: PgPool, base_url: String) -> Self {
        let pool_arc = Arc::new(pool.clone());
        let mapping_repository = Arc::new(PgMappingRepository::new(pool_arc));

        Self {
            shorten_service: Arc::new(ShortenService::new(
                mapping_repository.clone(),
                base_url,
            )),
            resolve_service: Arc::new(ResolveService::new(mapping_repository)),
            db: pool,
        }
    }
}
