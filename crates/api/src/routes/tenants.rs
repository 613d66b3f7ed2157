//! Route definitions for tenant management.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::tenants;
use crate::state::AppState;

/// Tenant routes.
///
/// ```text
/// POST /                                      -> create
/// GET  /{id}                                  -> get_by_id (own tenant)
/// PUT  /{id}                                  -> update (admin, own tenant)
/// GET  /subdomain/{subdomain}                 -> get_by_subdomain
/// GET  /subdomain/{subdomain}/availability    -> subdomain_availability
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(tenants::create))
        .route("/{id}", get(tenants::get_by_id).put(tenants::update))
        .route("/subdomain/{subdomain}", get(tenants::get_by_subdomain))
        .route(
            "/subdomain/{subdomain}/availability",
            get(tenants::subdomain_availability),
        )
}
