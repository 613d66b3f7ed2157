use std::sync::Arc;

use axum::body::Body;
use axum::http::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;

use pagesmith_api::auth::jwt::JwtConfig;
use pagesmith_api::config::ServerConfig;
use pagesmith_api::router::build_app_router;
use pagesmith_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret,
/// so tests never depend on environment variables.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        platform_domain: "example.com".to_string(),
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Integration tests exercise the same stack that
/// production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Collect a response body into a string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
