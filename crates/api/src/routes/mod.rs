pub mod auth;
pub mod health;
pub mod pages;
pub mod public_site;
pub mod tenants;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                                     signup (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/me                                         current user (auth)
///
/// /tenants                                         create
/// /tenants/{id}                                    get, update
/// /tenants/subdomain/{subdomain}                   get by subdomain
/// /tenants/subdomain/{subdomain}/availability      availability check
///
/// /pages                                           create (editor+)
/// /pages/{id}                                      get, update, delete
/// /pages/{id}/publish                              publish (PATCH)
/// /pages/{id}/unpublish                            unpublish (PATCH)
/// /pages/tenant/{tenantId}                         list for tenant
/// /pages/tenant/{tenantId}/status/{status}         list by status
/// /pages/tenant/{tenantId}/slug/{slug}/availability  slug check
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tenants", tenants::router())
        .nest("/pages", pages::router())
}
