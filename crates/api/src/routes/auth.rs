//! Route definitions for authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes.
///
/// ```text
/// POST /signup    -> signup (creates tenant + owner user)
/// POST /login     -> login
/// POST /refresh   -> refresh token exchange
/// GET  /me        -> current principal (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/me", get(auth::me))
}
