//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does
//! not meet the minimum requirement, enforcing authorization at the type
//! level in route handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use pagesmith_core::error::CoreError;
use pagesmith_core::roles::{ROLE_ADMIN, ROLE_EDITOR, ROLE_OWNER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires `OWNER` or `ADMIN`. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_OWNER && user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Owner or Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// Requires `OWNER`, `ADMIN`, or `EDITOR`. Rejects with 403 Forbidden
/// otherwise. This is the gate on content mutations.
pub struct RequireEditor(pub AuthUser);

impl FromRequestParts<AppState> for RequireEditor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_OWNER && user.role != ROLE_ADMIN && user.role != ROLE_EDITOR {
            return Err(AppError::Core(CoreError::Forbidden(
                "Editor role required".into(),
            )));
        }
        Ok(RequireEditor(user))
    }
}
