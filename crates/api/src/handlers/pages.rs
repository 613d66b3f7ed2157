//! Handlers for the `/pages` resource: the page lifecycle.
//!
//! Slugs are normalized here, before the availability pre-check and before
//! storage. The pre-check exists for friendly Conflict messages; the
//! storage-level unique index on `(tenant_id, slug)` remains the actual
//! guarantee when the check-then-write race is lost, surfacing through
//! the error layer as the same 409.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pagesmith_core::content::PageStatus;
use pagesmith_core::error::CoreError;
use pagesmith_core::slug;
use pagesmith_core::types::DbId;
use pagesmith_db::models::page::{
    CreatePage, CreatePageRequest, Page, ReplacePage, UpdatePageRequest,
};
use pagesmith_db::repositories::{PageRepo, TenantRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireEditor};
use crate::state::AppState;

/// Response body for the slug availability check.
#[derive(Debug, Serialize)]
pub struct SlugAvailability {
    pub available: bool,
}

/// GET /api/v1/pages/tenant/{tenant_id}
pub async fn list_by_tenant(
    State(state): State<AppState>,
    user: AuthUser,
    Path(tenant_id): Path<DbId>,
) -> AppResult<Json<Vec<Page>>> {
    user.ensure_tenant(tenant_id)?;
    let pages = PageRepo::list_by_tenant(&state.pool, tenant_id).await?;
    Ok(Json(pages))
}

/// GET /api/v1/pages/tenant/{tenant_id}/status/{status}
pub async fn list_by_tenant_and_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path((tenant_id, status)): Path<(DbId, PageStatus)>,
) -> AppResult<Json<Vec<Page>>> {
    user.ensure_tenant(tenant_id)?;
    let pages = PageRepo::list_by_tenant_and_status(&state.pool, tenant_id, status).await?;
    Ok(Json(pages))
}

/// GET /api/v1/pages/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Page>> {
    let page = load_page(&state, id).await?;
    user.ensure_tenant(page.tenant_id)?;
    Ok(Json(page))
}

/// POST /api/v1/pages
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreatePageRequest>,
) -> AppResult<(StatusCode, Json<Page>)> {
    user.ensure_tenant(input.tenant_id)?;

    let page_slug = slug::normalize(&input.slug);
    ensure_slug_available(&state, input.tenant_id, &page_slug).await?;

    let tenant = TenantRepo::find_by_id(&state.pool, input.tenant_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tenant", input.tenant_id)))?;
    let page_count = PageRepo::count_by_tenant(&state.pool, input.tenant_id).await?;
    if page_count >= i64::from(tenant.settings.max_pages) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Page limit reached for this tenant (max {})",
            tenant.settings.max_pages
        ))));
    }

    let page = PageRepo::create(
        &state.pool,
        &CreatePage {
            tenant_id: input.tenant_id,
            slug: page_slug,
            title: input.title,
            meta_description: input.meta_description,
            meta_keywords: input.meta_keywords,
            status: input.status.unwrap_or(PageStatus::Draft),
            content: input.content,
            seo_settings: input.seo_settings,
        },
    )
    .await?;

    tracing::info!(page_id = page.id, tenant_id = page.tenant_id, slug = %page.slug, "page created");
    Ok((StatusCode::CREATED, Json(page)))
}

/// PUT /api/v1/pages/{id}
///
/// Full-document replace: every mutable field is overwritten from the
/// request; `id`, `tenant_id`, and `created_at` are preserved.
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePageRequest>,
) -> AppResult<Json<Page>> {
    let existing = load_page(&state, id).await?;
    user.ensure_tenant(existing.tenant_id)?;

    let page_slug = slug::normalize(&input.slug);
    if page_slug != existing.slug {
        ensure_slug_available(&state, existing.tenant_id, &page_slug).await?;
    }

    let page = PageRepo::replace(
        &state.pool,
        id,
        &ReplacePage {
            slug: page_slug,
            title: input.title,
            meta_description: input.meta_description,
            meta_keywords: input.meta_keywords,
            status: input.status,
            content: input.content,
            seo_settings: input.seo_settings,
        },
    )
    .await?
    .ok_or_else(|| AppError::Core(CoreError::not_found("Page", id)))?;

    Ok(Json(page))
}

/// DELETE /api/v1/pages/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let page = load_page(&state, id).await?;
    user.ensure_tenant(page.tenant_id)?;

    PageRepo::hard_delete(&state.pool, id).await?;
    tracing::info!(page_id = id, tenant_id = page.tenant_id, "page deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/pages/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<Page>> {
    let page = load_page(&state, id).await?;
    user.ensure_tenant(page.tenant_id)?;

    let page = PageRepo::publish(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Page", id)))?;
    tracing::info!(page_id = id, tenant_id = page.tenant_id, "page published");
    Ok(Json(page))
}

/// PATCH /api/v1/pages/{id}/unpublish
pub async fn unpublish(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<Page>> {
    let page = load_page(&state, id).await?;
    user.ensure_tenant(page.tenant_id)?;

    let page = PageRepo::unpublish(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Page", id)))?;
    Ok(Json(page))
}

/// GET /api/v1/pages/tenant/{tenant_id}/slug/{slug}/availability
pub async fn slug_availability(
    State(state): State<AppState>,
    user: AuthUser,
    Path((tenant_id, raw_slug)): Path<(DbId, String)>,
) -> AppResult<Json<SlugAvailability>> {
    user.ensure_tenant(tenant_id)?;
    let page_slug = slug::normalize(&raw_slug);
    let available = !PageRepo::exists_by_slug(&state.pool, tenant_id, &page_slug).await?;
    Ok(Json(SlugAvailability { available }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn load_page(state: &AppState, id: DbId) -> Result<Page, AppError> {
    PageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Page", id)))
}

async fn ensure_slug_available(
    state: &AppState,
    tenant_id: DbId,
    page_slug: &str,
) -> Result<(), AppError> {
    if PageRepo::exists_by_slug(&state.pool, tenant_id, page_slug).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Slug '{page_slug}' already exists for this tenant"
        ))));
    }
    Ok(())
}
