//! Route definitions for public tenant sites (mounted at `/public`, not
//! under `/api/v1`).

use axum::routing::get;
use axum::Router;

use crate::handlers::public_site;
use crate::state::AppState;

/// Public serving routes.
///
/// ```text
/// GET /sites/{subdomain}              -> homepage
/// GET /sites/{subdomain}/sitemap.xml  -> sitemap
/// GET /sites/{subdomain}/robots.txt   -> robots
/// GET /sites/{subdomain}/{slug}       -> page
/// ```
///
/// Static segments win over the `{slug}` capture, so sitemap.xml and
/// robots.txt never shadow a page slug.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sites/{subdomain}", get(public_site::homepage))
        .route("/sites/{subdomain}/sitemap.xml", get(public_site::sitemap))
        .route("/sites/{subdomain}/robots.txt", get(public_site::robots))
        .route("/sites/{subdomain}/{slug}", get(public_site::page))
}
