//! PostgreSQL-backed repository implementations.

mod pg_mapping_repository;

pub use pg_mapping_repository::PgMappingRepository;
