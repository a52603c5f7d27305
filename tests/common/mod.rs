#![allow(dead_code)]

use shortid::state::AppState;
use sqlx::PgPool;

pub const TEST_BASE_URL: &str = "https://s.example.com";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(pool, TEST_BASE_URL.to_string())
}

pub async fn create_test_mapping(pool: &PgPool, identifier: &str, url: &str) {
    sqlx::query("INSERT INTO mappings (identifier, original_url) VALUES ($1, $2)")
        .bind(identifier)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM mappings")
        .fetch_one(pool)
        .await
        .unwrap()
}
