//! Repository for the `tenants` table.

use pagesmith_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::tenant::{CreateTenant, Tenant, TenantStatus, UpdateTenant};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, subdomain, name, email, status, settings, created_at, updated_at";

/// Provides CRUD operations for tenants.
pub struct TenantRepo;

impl TenantRepo {
    /// Insert a new tenant, returning the created row.
    ///
    /// The subdomain must already be validated. Collisions surface as a
    /// unique violation on `uq_tenants_subdomain`.
    pub async fn create(pool: &PgPool, input: &CreateTenant) -> Result<Tenant, sqlx::Error> {
        let query = format!(
            "INSERT INTO tenants (subdomain, name, email, settings)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tenant>(&query)
            .bind(&input.subdomain)
            .bind(&input.name)
            .bind(&input.email)
            .bind(Json(&input.settings))
            .fetch_one(pool)
            .await
    }

    /// Find a tenant by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants WHERE id = $1");
        sqlx::query_as::<_, Tenant>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a tenant by subdomain (the public-serving lookup).
    pub async fn find_by_subdomain(
        pool: &PgPool,
        subdomain: &str,
    ) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenants WHERE subdomain = $1");
        sqlx::query_as::<_, Tenant>(&query)
            .bind(subdomain)
            .fetch_optional(pool)
            .await
    }

    /// Whether a tenant with this subdomain exists.
    pub async fn exists_by_subdomain(pool: &PgPool, subdomain: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tenants WHERE subdomain = $1)")
            .bind(subdomain)
            .fetch_one(pool)
            .await
    }

    /// Update a tenant's name and/or settings. Only non-`None` fields are
    /// applied; settings are replaced as a whole document.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTenant,
    ) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!(
            "UPDATE tenants SET
                name = COALESCE($2, name),
                settings = COALESCE($3, settings),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tenant>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.settings.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Set a tenant's account status.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: TenantStatus,
    ) -> Result<Option<Tenant>, sqlx::Error> {
        let query = format!(
            "UPDATE tenants SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tenant>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}
