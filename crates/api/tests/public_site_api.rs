//! Integration tests for public site serving: homepage resolution, slug
//! rendering, alias fallback, the rendered 404, sitemap, and robots.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use sqlx::PgPool;
use tower::ServiceExt;

use pagesmith_core::content::{
    BlockType, ContentBlock, ContentSection, PageContent, PageStatus, SectionSettings,
    SectionType,
};
use pagesmith_db::models::page::CreatePage;
use pagesmith_db::models::tenant::{CreateTenant, Tenant, TenantSettings, TenantStatus};
use pagesmith_db::repositories::{PageRepo, TenantRepo};

use common::{body_string, build_test_app};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_tenant(pool: &PgPool, subdomain: &str) -> Tenant {
    TenantRepo::create(
        pool,
        &CreateTenant {
            subdomain: subdomain.to_string(),
            name: "Acme Corporation".to_string(),
            email: format!("owner@{subdomain}.test"),
            settings: TenantSettings::default(),
        },
    )
    .await
    .unwrap()
}

fn hero_page(tenant_id: i64, page_slug: &str) -> CreatePage {
    CreatePage {
        tenant_id,
        slug: page_slug.to_string(),
        title: "Welcome".to_string(),
        meta_description: None,
        meta_keywords: None,
        status: PageStatus::Draft,
        content: PageContent {
            sections: vec![ContentSection {
                id: "s1".into(),
                section_type: SectionType::Hero,
                blocks: vec![ContentBlock {
                    id: "b1".into(),
                    block_type: BlockType::Heading,
                    content: serde_json::json!({"text": "Hi", "level": 1})
                        .as_object()
                        .cloned()
                        .unwrap(),
                    styling: Default::default(),
                }],
                settings: SectionSettings {
                    full_width: true,
                    ..Default::default()
                },
            }],
            design_settings: Default::default(),
        },
        seo_settings: Default::default(),
    }
}

async fn seed_published_hero(pool: &PgPool, tenant_id: i64, page_slug: &str) -> i64 {
    let page = PageRepo::create(pool, &hero_page(tenant_id, page_slug))
        .await
        .unwrap();
    PageRepo::publish(pool, page.id).await.unwrap();
    page.id
}

async fn get(app: &axum::Router, uri: &str) -> axum::http::Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn header<'a>(response: &'a axum::http::Response<Body>, name: &str) -> &'a str {
    response
        .headers()
        .get(name)
        .map(|v| v.to_str().unwrap())
        .unwrap_or("")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn serves_published_page_by_slug(pool: PgPool) {
    let tenant = seed_tenant(&pool, "acme").await;
    let page_id = seed_published_hero(&pool, tenant.id, "home").await;
    let app = build_test_app(pool);

    let response = get(&app, "/public/sites/acme/home").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header(&response, "content-type").starts_with("text/html"));
    assert_eq!(header(&response, "cache-control"), "max-age=900");
    assert_eq!(header(&response, "vary"), "Accept-Encoding");
    assert_eq!(header(&response, "x-page-id"), page_id.to_string());
    assert_eq!(header(&response, "x-tenant-id"), tenant.id.to_string());

    let html = body_string(response).await;
    assert!(html.contains("<section class=\"section hero\">"));
    assert!(html.contains("<h1 class=\"block heading-block\">Hi</h1>"));
    assert!(html.contains("https://acme.example.com/home"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn homepage_and_aliases_resolve_to_same_page(pool: PgPool) {
    let tenant = seed_tenant(&pool, "acme").await;
    seed_published_hero(&pool, tenant.id, "home").await;
    let app = build_test_app(pool);

    // Root, /home, and /index are interchangeable entry points.
    for uri in [
        "/public/sites/acme",
        "/public/sites/acme/home",
        "/public/sites/acme/index",
    ] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "failed for {uri}");
        let html = body_string(response).await;
        assert!(html.contains("<h1 class=\"block heading-block\">Hi</h1>"));
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn draft_pages_are_not_publicly_served(pool: PgPool) {
    let tenant = seed_tenant(&pool, "acme").await;
    PageRepo::create(&pool, &hero_page(tenant.id, "launch"))
        .await
        .unwrap();
    let app = build_test_app(pool);

    let response = get(&app, "/public/sites/acme/launch").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_page_returns_styled_404_html(pool: PgPool) {
    let tenant = seed_tenant(&pool, "acme").await;
    seed_published_hero(&pool, tenant.id, "home").await;
    let app = build_test_app(pool);

    let response = get(&app, "/public/sites/acme/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(header(&response, "content-type").starts_with("text/html"));
    assert_eq!(header(&response, "cache-control"), "max-age=300");

    let html = body_string(response).await;
    assert!(html.contains("<h1>404</h1>"));
    assert!(html.contains("Page not found: nope"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_tenant_returns_404_html(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(&app, "/public/sites/ghost").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_string(response).await;
    assert!(html.contains("<h1>404</h1>"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn suspended_tenant_is_not_served(pool: PgPool) {
    let tenant = seed_tenant(&pool, "acme").await;
    seed_published_hero(&pool, tenant.id, "home").await;
    TenantRepo::set_status(&pool, tenant.id, TenantStatus::Suspended)
        .await
        .unwrap();
    let app = build_test_app(pool);

    let response = get(&app, "/public/sites/acme/home").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sitemap_lists_published_pages_only(pool: PgPool) {
    let tenant = seed_tenant(&pool, "acme").await;
    seed_published_hero(&pool, tenant.id, "home").await;
    seed_published_hero(&pool, tenant.id, "pricing").await;
    PageRepo::create(&pool, &hero_page(tenant.id, "draft-page"))
        .await
        .unwrap();
    let app = build_test_app(pool);

    let response = get(&app, "/public/sites/acme/sitemap.xml").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header(&response, "content-type").starts_with("application/xml"));
    assert_eq!(header(&response, "cache-control"), "max-age=86400");

    let xml = body_string(response).await;
    assert!(xml.contains("<loc>https://acme.example.com/home</loc>"));
    assert!(xml.contains("<loc>https://acme.example.com/pricing</loc>"));
    assert!(xml.contains("<lastmod>"));
    assert!(!xml.contains("draft-page"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn robots_points_crawlers_at_sitemap(pool: PgPool) {
    let tenant = seed_tenant(&pool, "acme").await;
    seed_published_hero(&pool, tenant.id, "home").await;
    let app = build_test_app(pool);

    let response = get(&app, "/public/sites/acme/robots.txt").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header(&response, "content-type").starts_with("text/plain"));

    let body = body_string(response).await;
    assert!(body.contains("User-agent: *"));
    assert!(body.contains("Sitemap: https://acme.example.com/sitemap.xml"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn custom_domain_changes_base_url(pool: PgPool) {
    let tenant = TenantRepo::create(
        &pool,
        &CreateTenant {
            subdomain: "acme".to_string(),
            name: "Acme Corporation".to_string(),
            email: "owner@acme.test".to_string(),
            settings: TenantSettings {
                custom_domain: Some("www.acme.io".to_string()),
                ..Default::default()
            },
        },
    )
    .await
    .unwrap();
    seed_published_hero(&pool, tenant.id, "home").await;
    let app = build_test_app(pool);

    let response = get(&app, "/public/sites/acme/robots.txt").await;
    let body = body_string(response).await;
    assert!(body.contains("Sitemap: https://www.acme.io/sitemap.xml"));
}
