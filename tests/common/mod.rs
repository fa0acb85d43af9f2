#![allow(dead_code)]

use sqlx::PgPool;

use shortener_core::config::Config;
use shortener_core::state::AppState;

pub fn test_config() -> Config {
    Config::with_defaults("postgres://localhost/shortener-test")
}

pub fn build_state(pool: PgPool) -> AppState {
    init_tracing();
    AppState::build(pool, &test_config())
}

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

pub async fn insert_record(pool: &PgPool, url: &str, shortcode: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO url_records (url, shortcode) VALUES ($1, $2) RETURNING id",
    )
    .bind(url)
    .bind(shortcode)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_inactive_record(pool: &PgPool, url: &str, shortcode: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO url_records (url, shortcode, active) VALUES ($1, $2, FALSE) RETURNING id",
    )
    .bind(url)
    .bind(shortcode)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn shortcode_of(pool: &PgPool, id: i64) -> String {
    sqlx::query_scalar::<_, String>("SELECT shortcode FROM url_records WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_distinct_shortcodes(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(DISTINCT shortcode) FROM url_records")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_records(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url_records")
        .fetch_one(pool)
        .await
        .unwrap()
}
