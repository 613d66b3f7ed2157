//! Tenant entity model and DTOs.

use pagesmith_core::error::CoreError;
use pagesmith_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Account state of a tenant. Only `Active` tenants are publicly served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenantStatus {
    Active,
    Inactive,
    Suspended,
    PendingActivation,
}

impl TenantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantStatus::Active => "ACTIVE",
            TenantStatus::Inactive => "INACTIVE",
            TenantStatus::Suspended => "SUSPENDED",
            TenantStatus::PendingActivation => "PENDING_ACTIVATION",
        }
    }
}

impl TryFrom<String> for TenantStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "ACTIVE" => Ok(TenantStatus::Active),
            "INACTIVE" => Ok(TenantStatus::Inactive),
            "SUSPENDED" => Ok(TenantStatus::Suspended),
            "PENDING_ACTIVATION" => Ok(TenantStatus::PendingActivation),
            other => Err(CoreError::Validation(format!(
                "Unknown tenant status: {other}"
            ))),
        }
    }
}

/// Per-tenant configuration stored as a JSONB document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TenantSettings {
    /// Serving domain replacing `{subdomain}.{platform}` when configured.
    pub custom_domain: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub allow_custom_styling: bool,
    /// Upper bound on pages a tenant may create.
    pub max_pages: i32,
}

impl Default for TenantSettings {
    fn default() -> Self {
        TenantSettings {
            custom_domain: None,
            logo_url: None,
            primary_color: "#007bff".into(),
            secondary_color: "#6c757d".into(),
            allow_custom_styling: true,
            max_pages: 10,
        }
    }
}

/// A tenant row from the `tenants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: DbId,
    pub subdomain: String,
    pub name: String,
    pub email: String,
    #[sqlx(try_from = "String")]
    pub status: TenantStatus,
    #[sqlx(json)]
    pub settings: TenantSettings,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for inserting a new tenant record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenant {
    pub subdomain: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub settings: TenantSettings,
}

/// Request body for updating a tenant. All fields optional; settings are
/// replaced as a whole document when present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTenant {
    pub name: Option<String>,
    pub settings: Option<TenantSettings>,
}
