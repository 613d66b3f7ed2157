//! Page entity model and DTOs.

use pagesmith_core::content::{PageContent, PageStatus, SeoSettings};
use pagesmith_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A page row from the `pages` table. The content tree and SEO settings
/// are JSONB columns decoded into the typed core model.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: DbId,
    pub tenant_id: DbId,
    pub slug: String,
    pub title: String,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: PageStatus,
    #[sqlx(json)]
    pub content: PageContent,
    #[sqlx(json)]
    pub seo_settings: SeoSettings,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub published_at: Option<Timestamp>,
}

/// Request body for creating a page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
    pub tenant_id: DbId,
    pub slug: String,
    pub title: String,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    /// Defaults to `DRAFT` when omitted.
    pub status: Option<PageStatus>,
    #[serde(default)]
    pub content: PageContent,
    #[serde(default)]
    pub seo_settings: SeoSettings,
}

/// Request body for updating a page.
///
/// Update is a full-document replace: clients resend the complete section
/// and block tree on every save; the stored content is overwritten
/// wholesale, never merged. `id`, `tenant_id`, and `created_at` are
/// preserved from the existing row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageRequest {
    pub slug: String,
    pub title: String,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub status: PageStatus,
    #[serde(default)]
    pub content: PageContent,
    #[serde(default)]
    pub seo_settings: SeoSettings,
}

/// Input for inserting a new page record. The slug is expected to be
/// normalized by the caller.
#[derive(Debug, Clone)]
pub struct CreatePage {
    pub tenant_id: DbId,
    pub slug: String,
    pub title: String,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub status: PageStatus,
    pub content: PageContent,
    pub seo_settings: SeoSettings,
}

/// Input for the wholesale replace performed by update. The slug is
/// expected to be normalized by the caller.
#[derive(Debug, Clone)]
pub struct ReplacePage {
    pub slug: String,
    pub title: String,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub status: PageStatus,
    pub content: PageContent,
    pub seo_settings: SeoSettings,
}
