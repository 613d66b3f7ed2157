//! Handlers for the `/auth` resource (signup, login, refresh, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pagesmith_core::error::CoreError;
use pagesmith_core::roles::ROLE_OWNER;
use pagesmith_core::{slug, validate};
use pagesmith_db::models::tenant::{CreateTenant, TenantSettings};
use pagesmith_db::models::user::{CreateUser, User, UserResponse};
use pagesmith_db::repositories::{TenantRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::{
    generate_access_token, generate_refresh_token, validate_token, TOKEN_TYPE_REFRESH,
};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`: registers a tenant and its owner
/// user in one step.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Email must be valid"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub subdomain: String,
    #[validate(length(min = 1, message = "Tenant name is required"))]
    pub tenant_name: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by signup, login, and
/// refresh.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/signup
///
/// Create a tenant and its OWNER user, returning tokens for the new user.
/// The subdomain is normalized before validation so editor input like
/// `"Acme Corp"` registers as `acme-corp`.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let subdomain = slug::normalize(&input.subdomain);
    if !validate::is_valid_subdomain(&subdomain) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid subdomain format: {subdomain}"
        ))));
    }

    if UserRepo::exists_by_email(&state.pool, &input.email).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already exists".into(),
        )));
    }

    // Advisory; uq_tenants_subdomain is the authoritative guard.
    if TenantRepo::exists_by_subdomain(&state.pool, &subdomain).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Subdomain '{subdomain}' is already taken"
        ))));
    }

    let tenant = TenantRepo::create(
        &state.pool,
        &CreateTenant {
            subdomain,
            name: input.tenant_name.clone(),
            email: input.email.clone(),
            settings: TenantSettings::default(),
        },
    )
    .await?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            tenant_id: tenant.id,
            email: input.email.clone(),
            password_hash,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            role: ROLE_OWNER.to_string(),
        },
    )
    .await?;

    tracing::info!(tenant_id = tenant.id, user_id = user.id, "tenant signed up");

    let response = build_auth_response(&state, &user)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    UserRepo::record_login(&state.pool, user.id).await?;

    Ok(Json(build_auth_response(&state, &user)?))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for a fresh access/refresh pair.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let claims = validate_token(&input.refresh_token, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthorized(
            "Invalid or expired refresh token".into(),
        ))
    })?;

    if claims.token_type != TOKEN_TYPE_REFRESH {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid token type".into(),
        )));
    }

    let user = UserRepo::find_by_id(&state.pool, claims.sub)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User not found".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    Ok(Json(build_auth_response(&state, &user)?))
}

/// GET /api/v1/auth/me
pub async fn me(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", user.user_id)))?;
    Ok(Json(UserResponse::from(&user)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build_auth_response(state: &AppState, user: &User) -> Result<AuthResponse, AppError> {
    let jwt = &state.config.jwt;

    let access_token = generate_access_token(user.id, user.tenant_id, &user.role, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let refresh_token = generate_refresh_token(user.id, user.tenant_id, &user.role, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        access_token,
        refresh_token,
        token_type: "Bearer",
        expires_in: jwt.access_token_expiry_mins * 60,
        user: UserResponse::from(user),
    })
}
