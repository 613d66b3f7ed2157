//! Route definitions for page management.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes.
///
/// ```text
/// POST  /                                             -> create
/// GET   /{id}                                         -> get_by_id
/// PUT   /{id}                                         -> update
/// DELETE /{id}                                        -> delete
/// PATCH /{id}/publish                                 -> publish
/// PATCH /{id}/unpublish                               -> unpublish
/// GET   /tenant/{tenantId}                            -> list_by_tenant
/// GET   /tenant/{tenantId}/status/{status}            -> list_by_tenant_and_status
/// GET   /tenant/{tenantId}/slug/{slug}/availability   -> slug_availability
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(pages::create))
        .route(
            "/{id}",
            get(pages::get_by_id)
                .put(pages::update)
                .delete(pages::delete),
        )
        .route("/{id}/publish", patch(pages::publish))
        .route("/{id}/unpublish", patch(pages::unpublish))
        .route("/tenant/{tenant_id}", get(pages::list_by_tenant))
        .route(
            "/tenant/{tenant_id}/status/{status}",
            get(pages::list_by_tenant_and_status),
        )
        .route(
            "/tenant/{tenant_id}/slug/{slug}/availability",
            get(pages::slug_availability),
        )
}
