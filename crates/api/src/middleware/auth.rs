//! JWT-based authentication extractor for Axum handlers.
//!
//! The HTTP boundary is the only place the token is decoded; from here on
//! the principal travels as an explicit [`AuthUser`] parameter through the
//! call chain, never through ambient or global state.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use pagesmith_core::error::CoreError;
use pagesmith_core::types::DbId;

use crate::auth::jwt::{validate_token, TOKEN_TYPE_ACCESS};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated principal extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, tenant_id = user.tenant_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The tenant the user belongs to.
    pub tenant_id: DbId,
    /// The user's role name (e.g. `"OWNER"`, `"EDITOR"`).
    pub role: String,
}

impl AuthUser {
    /// Reject with 403 unless the principal belongs to `tenant_id`.
    ///
    /// Every authoring handler that touches tenant-owned data calls this
    /// before acting.
    pub fn ensure_tenant(&self, tenant_id: DbId) -> Result<(), AppError> {
        if self.tenant_id != tenant_id {
            return Err(AppError::Core(CoreError::Forbidden(
                "Resource belongs to another tenant".into(),
            )));
        }
        Ok(())
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        if claims.token_type != TOKEN_TYPE_ACCESS {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Refresh tokens cannot be used for API access".into(),
            )));
        }

        Ok(AuthUser {
            user_id: claims.sub,
            tenant_id: claims.tenant_id,
            role: claims.role,
        })
    }
}
