//! Integration tests for tenant registration, lookup, settings update,
//! and subdomain availability.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use common::{body_json, build_test_app};

fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn get(app: &axum::Router, uri: &str, token: Option<&str>) -> axum::http::Response<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn signup_owner(app: &axum::Router, subdomain: &str) -> (String, i64) {
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/auth/signup",
            None,
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": format!("ada@{subdomain}.test"),
                "password": "super-secret-1",
                "subdomain": subdomain,
                "tenantName": "Acme Corporation",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    (
        body["accessToken"].as_str().unwrap().to_string(),
        body["user"]["tenantId"].as_i64().unwrap(),
    )
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_validates_and_conflicts_on_duplicate(pool: PgPool) {
    let app = build_test_app(pool);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/tenants",
            None,
            json!({"subdomain": "Acme Corp", "name": "Acme", "email": "ops@acme.test"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let tenant = body_json(response).await;
    // Subdomain is normalized before storage.
    assert_eq!(tenant["subdomain"], "acme-corp");
    assert_eq!(tenant["status"], "ACTIVE");
    assert_eq!(tenant["settings"]["maxPages"], 10);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/tenants",
            None,
            json!({"subdomain": "acme-corp", "name": "Dup", "email": "dup@acme.test"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Bad email shape is rejected.
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/tenants",
            None,
            json!({"subdomain": "other", "name": "Other", "email": "not-an-email"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn subdomain_lookup_and_availability(pool: PgPool) {
    let app = build_test_app(pool);
    signup_owner(&app, "acme").await;

    let response = get(&app, "/api/v1/tenants/subdomain/acme", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let tenant = body_json(response).await;
    assert_eq!(tenant["subdomain"], "acme");

    let response = get(&app, "/api/v1/tenants/subdomain/ghost", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(&app, "/api/v1/tenants/subdomain/acme/availability", None).await;
    let body = body_json(response).await;
    assert_eq!(body["available"], false);

    let response = get(&app, "/api/v1/tenants/subdomain/fresh-name/availability", None).await;
    let body = body_json(response).await;
    assert_eq!(body["available"], true);

    // Too short to ever be a valid subdomain.
    let response = get(&app, "/api/v1/tenants/subdomain/ab/availability", None).await;
    let body = body_json(response).await;
    assert_eq!(body["available"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_updates_settings_with_domain_validation(pool: PgPool) {
    let app = build_test_app(pool);
    let (token, tenant_id) = signup_owner(&app, "acme").await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/tenants/{tenant_id}"),
            Some(&token),
            json!({"settings": {"customDomain": "www.acme.io", "maxPages": 25}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let tenant = body_json(response).await;
    assert_eq!(tenant["settings"]["customDomain"], "www.acme.io");
    assert_eq!(tenant["settings"]["maxPages"], 25);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/tenants/{tenant_id}"),
            Some(&token),
            json!({"settings": {"customDomain": "not a domain"}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tenant_reads_are_scoped_to_the_principal(pool: PgPool) {
    let app = build_test_app(pool);
    let (token, tenant_id) = signup_owner(&app, "acme").await;
    let (other_token, _) = signup_owner(&app, "globex").await;

    let response = get(&app, &format!("/api/v1/tenants/{tenant_id}"), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        &app,
        &format!("/api/v1/tenants/{tenant_id}"),
        Some(&other_token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
