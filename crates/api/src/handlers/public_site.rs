//! Public serving: rendered pages, sitemap.xml, and robots.txt per tenant
//! site, addressed by subdomain.
//!
//! Any resolution failure on a page request returns a styled 404 HTML
//! document, never a bare status code or an error payload.

use axum::extract::{Path, State};
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use pagesmith_core::content::PageStatus;
use pagesmith_core::error::CoreError;
use pagesmith_core::render::{self, RenderPage, Site};
use pagesmith_core::sitemap::{robots_txt, sitemap_xml, SitemapEntry};
use pagesmith_core::slug;
use pagesmith_core::types::DbId;
use pagesmith_db::models::page::Page;
use pagesmith_db::models::tenant::{Tenant, TenantStatus};
use pagesmith_db::repositories::{PageRepo, TenantRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Cache lifetime for rendered pages (15 minutes).
const PAGE_CACHE_CONTROL: &str = "max-age=900";
/// Cache lifetime for the rendered 404 document (5 minutes).
const NOT_FOUND_CACHE_CONTROL: &str = "max-age=300";
/// Cache lifetime for sitemap.xml and robots.txt (24 hours).
const CRAWLER_CACHE_CONTROL: &str = "max-age=86400";

/// GET /public/sites/{subdomain}
///
/// Serve the tenant's homepage: the best published page among the homepage
/// alias slugs.
pub async fn homepage(State(state): State<AppState>, Path(subdomain): Path<String>) -> Response {
    match serve_homepage(&state, &subdomain).await {
        Ok(response) => response,
        Err(err) => {
            tracing::debug!(%subdomain, error = %err, "homepage resolution failed");
            not_found_response(&format!("Homepage not found for site: {subdomain}"))
        }
    }
}

/// GET /public/sites/{subdomain}/{slug}
///
/// Serve a page by slug; homepage-alias slugs fall back to homepage
/// resolution so `/`, `/home`, and `/index` are interchangeable.
pub async fn page(
    State(state): State<AppState>,
    Path((subdomain, raw_slug)): Path<(String, String)>,
) -> Response {
    match serve_page(&state, &subdomain, &raw_slug).await {
        Ok(response) => response,
        Err(err) => {
            tracing::debug!(%subdomain, slug = %raw_slug, error = %err, "page resolution failed");
            not_found_response(&format!("Page not found: {raw_slug}"))
        }
    }
}

/// GET /public/sites/{subdomain}/sitemap.xml
pub async fn sitemap(
    State(state): State<AppState>,
    Path(subdomain): Path<String>,
) -> AppResult<Response> {
    let tenant = active_tenant(&state, &subdomain).await?;
    let pages =
        PageRepo::list_by_tenant_and_status(&state.pool, tenant.id, PageStatus::Published).await?;

    let entries: Vec<SitemapEntry<'_>> = pages
        .iter()
        .map(|p| SitemapEntry {
            slug: &p.slug,
            published_at: p.published_at,
        })
        .collect();
    let xml = sitemap_xml(&entries, &tenant_base_url(&state, &tenant));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/xml"),
            (header::CACHE_CONTROL, CRAWLER_CACHE_CONTROL),
        ],
        xml,
    )
        .into_response())
}

/// GET /public/sites/{subdomain}/robots.txt
pub async fn robots(
    State(state): State<AppState>,
    Path(subdomain): Path<String>,
) -> AppResult<Response> {
    let tenant = active_tenant(&state, &subdomain).await?;
    let body = robots_txt(&tenant_base_url(&state, &tenant));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, CRAWLER_CACHE_CONTROL),
        ],
        body,
    )
        .into_response())
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

async fn serve_homepage(state: &AppState, subdomain: &str) -> AppResult<Response> {
    let tenant = active_tenant(state, subdomain).await?;
    let page = resolve_homepage(state, tenant.id).await?;
    Ok(rendered_response(state, &tenant, &page))
}

async fn serve_page(state: &AppState, subdomain: &str, raw_slug: &str) -> AppResult<Response> {
    let tenant = active_tenant(state, subdomain).await?;
    let normalized = slug::normalize(raw_slug);

    // Exact published match first; homepage aliases fall back to homepage
    // resolution.
    let found = PageRepo::find_published_by_slug(&state.pool, tenant.id, &normalized).await?;
    let page = match found {
        Some(page) => page,
        None if slug::is_homepage_alias(&normalized) => resolve_homepage(state, tenant.id).await?,
        None => {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Page",
                key: normalized,
            }))
        }
    };

    Ok(rendered_response(state, &tenant, &page))
}

async fn resolve_homepage(state: &AppState, tenant_id: DbId) -> Result<Page, AppError> {
    let candidates = PageRepo::find_homepage_candidates(&state.pool, tenant_id).await?;
    slug::pick_homepage(&candidates, |p| p.slug.as_str())
        .cloned()
        .ok_or_else(|| AppError::Core(CoreError::not_found("Homepage", tenant_id)))
}

/// Look up a tenant by subdomain, treating non-active tenants as absent.
async fn active_tenant(state: &AppState, subdomain: &str) -> Result<Tenant, AppError> {
    let tenant = TenantRepo::find_by_subdomain(&state.pool, subdomain)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound {
            entity: "Tenant",
            key: subdomain.to_string(),
        }))?;

    if tenant.status != TenantStatus::Active {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Tenant",
            key: subdomain.to_string(),
        }));
    }

    Ok(tenant)
}

// ---------------------------------------------------------------------------
// Response assembly
// ---------------------------------------------------------------------------

fn tenant_base_url(state: &AppState, tenant: &Tenant) -> String {
    render::base_url(&Site {
        subdomain: &tenant.subdomain,
        custom_domain: tenant.settings.custom_domain.as_deref(),
        platform_domain: &state.config.platform_domain,
    })
}

fn rendered_response(state: &AppState, tenant: &Tenant, page: &Page) -> Response {
    let site = Site {
        subdomain: &tenant.subdomain,
        custom_domain: tenant.settings.custom_domain.as_deref(),
        platform_domain: &state.config.platform_domain,
    };
    let html = render::render_page(
        &RenderPage {
            title: &page.title,
            slug: &page.slug,
            meta_description: page.meta_description.as_deref(),
            meta_keywords: page.meta_keywords.as_deref(),
            content: &page.content,
            seo: &page.seo_settings,
        },
        &site,
    );

    let mut response = (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, PAGE_CACHE_CONTROL),
            (header::VARY, "Accept-Encoding"),
        ],
        html,
    )
        .into_response();

    let headers = response.headers_mut();
    headers.insert(HeaderName::from_static("x-page-id"), HeaderValue::from(page.id));
    headers.insert(
        HeaderName::from_static("x-tenant-id"),
        HeaderValue::from(tenant.id),
    );

    response
}

fn not_found_response(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, NOT_FOUND_CACHE_CONTROL),
        ],
        render::render_not_found(message),
    )
        .into_response()
}
