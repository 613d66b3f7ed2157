//! Repository for the `pages` table.

use pagesmith_core::content::PageStatus;
use pagesmith_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::page::{CreatePage, Page, ReplacePage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tenant_id, slug, title, meta_description, meta_keywords, status, \
                       content, seo_settings, created_at, updated_at, published_at";

/// Provides CRUD and lookup operations for pages.
pub struct PageRepo;

impl PageRepo {
    /// Insert a new page, returning the created row.
    ///
    /// The slug must already be normalized. Slug collisions within a tenant
    /// surface as a unique violation on `uq_pages_tenant_slug`.
    pub async fn create(pool: &PgPool, input: &CreatePage) -> Result<Page, sqlx::Error> {
        let query = format!(
            "INSERT INTO pages (tenant_id, slug, title, meta_description, meta_keywords, status, content, seo_settings)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(input.tenant_id)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.meta_description)
            .bind(&input.meta_keywords)
            .bind(input.status.as_str())
            .bind(Json(&input.content))
            .bind(Json(&input.seo_settings))
            .fetch_one(pool)
            .await
    }

    /// Find a page by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a PUBLISHED page by tenant and slug, for public serving.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        tenant_id: DbId,
        slug: &str,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages
             WHERE tenant_id = $1 AND slug = $2 AND status = 'PUBLISHED'"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(tenant_id)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the published homepage candidates for a tenant, ordered by
    /// creation time so the degraded "no canonical slug" fallback is
    /// deterministic.
    pub async fn find_homepage_candidates(
        pool: &PgPool,
        tenant_id: DbId,
    ) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages
             WHERE tenant_id = $1 AND slug IN ('home', 'index', '') AND status = 'PUBLISHED'
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// List all pages for a tenant, most recently created first.
    pub async fn list_by_tenant(pool: &PgPool, tenant_id: DbId) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages WHERE tenant_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(tenant_id)
            .fetch_all(pool)
            .await
    }

    /// List pages for a tenant with a given status, most recent first.
    pub async fn list_by_tenant_and_status(
        pool: &PgPool,
        tenant_id: DbId,
        status: PageStatus,
    ) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages
             WHERE tenant_id = $1 AND status = $2
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(tenant_id)
            .bind(status.as_str())
            .fetch_all(pool)
            .await
    }

    /// Whether a page with this (tenant, slug) pair exists.
    ///
    /// Advisory pre-check for friendlier Conflict errors; the unique index
    /// remains the authoritative guard under concurrent writes.
    pub async fn exists_by_slug(
        pool: &PgPool,
        tenant_id: DbId,
        slug: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pages WHERE tenant_id = $1 AND slug = $2)")
            .bind(tenant_id)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Count all pages belonging to a tenant.
    pub async fn count_by_tenant(pool: &PgPool, tenant_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM pages WHERE tenant_id = $1")
            .bind(tenant_id)
            .fetch_one(pool)
            .await
    }

    /// Replace a page's mutable fields wholesale, bumping `updated_at`.
    ///
    /// `id`, `tenant_id`, `created_at`, and `published_at` are untouched.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &ReplacePage,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE pages SET
                slug = $2,
                title = $3,
                meta_description = $4,
                meta_keywords = $5,
                status = $6,
                content = $7,
                seo_settings = $8,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.title)
            .bind(&input.meta_description)
            .bind(&input.meta_keywords)
            .bind(input.status.as_str())
            .bind(Json(&input.content))
            .bind(Json(&input.seo_settings))
            .fetch_optional(pool)
            .await
    }

    /// Mark a page PUBLISHED and stamp `published_at`.
    pub async fn publish(pool: &PgPool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE pages SET status = 'PUBLISHED', published_at = NOW(), updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Revert a page to DRAFT and clear `published_at`.
    pub async fn unpublish(pool: &PgPool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE pages SET status = 'DRAFT', published_at = NULL, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a page by ID. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
