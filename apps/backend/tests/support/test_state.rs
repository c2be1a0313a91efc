use quotes_backend::infra::state::build_state;
use quotes_backend::state::app_state::AppState;
use quotes_backend::state::security_config::SecurityConfig;
use quotes_backend::AppError;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET.as_bytes())
}

/// Fresh, migrated in-memory store per call, so tests never share data.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state()
        .with_db("sqlite::memory:")
        .with_security(test_security())
        .build()
        .await
}

/// State with no store at all. Any handler that reaches for the store
/// answers 500, which makes "rejected before touching the store" observable.
pub async fn build_storeless_state() -> Result<AppState, AppError> {
    build_state().with_security(test_security()).build().await
}
