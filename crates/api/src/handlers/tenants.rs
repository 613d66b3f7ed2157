//! Handlers for the `/tenants` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pagesmith_core::error::CoreError;
use pagesmith_core::types::DbId;
use pagesmith_core::{slug, validate};
use pagesmith_db::models::tenant::{CreateTenant, Tenant, TenantSettings, UpdateTenant};
use pagesmith_db::repositories::TenantRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Response body for the subdomain availability check.
#[derive(Debug, Serialize)]
pub struct SubdomainAvailability {
    pub available: bool,
}

/// POST /api/v1/tenants
///
/// Register a tenant without a user (operational tooling; interactive
/// registration goes through `/auth/signup`).
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateTenant>,
) -> AppResult<(StatusCode, Json<Tenant>)> {
    input.subdomain = slug::normalize(&input.subdomain);
    validate_tenant_fields(&input.subdomain, &input.name, &input.email, &input.settings)?;

    if TenantRepo::exists_by_subdomain(&state.pool, &input.subdomain).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Tenant already exists with subdomain: {}",
            input.subdomain
        ))));
    }

    let tenant = TenantRepo::create(&state.pool, &input).await?;
    tracing::info!(tenant_id = tenant.id, subdomain = %tenant.subdomain, "tenant created");
    Ok((StatusCode::CREATED, Json(tenant)))
}

/// GET /api/v1/tenants/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Tenant>> {
    user.ensure_tenant(id)?;
    let tenant = TenantRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tenant", id)))?;
    Ok(Json(tenant))
}

/// GET /api/v1/tenants/subdomain/{subdomain}
pub async fn get_by_subdomain(
    State(state): State<AppState>,
    Path(subdomain): Path<String>,
) -> AppResult<Json<Tenant>> {
    let tenant = TenantRepo::find_by_subdomain(&state.pool, &subdomain)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound {
            entity: "Tenant",
            key: subdomain,
        }))?;
    Ok(Json(tenant))
}

/// PUT /api/v1/tenants/{id}
///
/// Update the tenant's name and/or settings. Settings are replaced as a
/// whole document when present.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTenant>,
) -> AppResult<Json<Tenant>> {
    user.ensure_tenant(id)?;

    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Tenant name cannot be empty".into(),
            )));
        }
    }
    if let Some(settings) = &input.settings {
        validate_settings(settings)?;
    }

    let tenant = TenantRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Tenant", id)))?;
    Ok(Json(tenant))
}

/// GET /api/v1/tenants/subdomain/{subdomain}/availability
pub async fn subdomain_availability(
    State(state): State<AppState>,
    Path(subdomain): Path<String>,
) -> AppResult<Json<SubdomainAvailability>> {
    let normalized = slug::normalize(&subdomain);
    let available = validate::is_valid_subdomain(&normalized)
        && !TenantRepo::exists_by_subdomain(&state.pool, &normalized).await?;
    Ok(Json(SubdomainAvailability { available }))
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

fn validate_tenant_fields(
    subdomain: &str,
    name: &str,
    email: &str,
    settings: &TenantSettings,
) -> Result<(), AppError> {
    if !validate::is_valid_subdomain(subdomain) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid subdomain format: {subdomain}"
        ))));
    }
    if name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Tenant name cannot be empty".into(),
        )));
    }
    if !validate::is_valid_email(email) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid email format: {email}"
        ))));
    }
    validate_settings(settings)
}

fn validate_settings(settings: &TenantSettings) -> Result<(), AppError> {
    if let Some(domain) = &settings.custom_domain {
        if !validate::is_valid_domain(domain) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid custom domain format: {domain}"
            ))));
        }
    }
    Ok(())
}
