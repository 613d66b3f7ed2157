//! Sitemap and robots.txt generation for public tenant sites.

use crate::escape::escape_html;
use crate::types::Timestamp;

/// The per-page data the sitemap needs.
#[derive(Debug, Clone, Copy)]
pub struct SitemapEntry<'a> {
    pub slug: &'a str,
    pub published_at: Option<Timestamp>,
}

/// Generate a sitemap document listing every published page of a tenant.
///
/// The empty (homepage) slug maps to the bare base URL; `<lastmod>` is
/// emitted only when the page carries a publication timestamp.
pub fn sitemap_xml(entries: &[SitemapEntry<'_>], base_url: &str) -> String {
    let mut xml = String::new();

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for entry in entries {
        let loc = if entry.slug.is_empty() {
            base_url.to_string()
        } else {
            format!("{base_url}/{}", entry.slug)
        };

        xml.push_str("    <url>\n");
        xml.push_str(&format!("        <loc>{}</loc>\n", escape_html(&loc)));
        if let Some(published_at) = entry.published_at {
            xml.push_str(&format!(
                "        <lastmod>{}</lastmod>\n",
                published_at.format("%Y-%m-%d")
            ));
        }
        xml.push_str("        <changefreq>weekly</changefreq>\n");
        xml.push_str("        <priority>0.8</priority>\n");
        xml.push_str("    </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Generate the robots.txt for a tenant site: allow everything and point
/// crawlers at the sitemap.
pub fn robots_txt(base_url: &str) -> String {
    format!("User-agent: *\nAllow: /\n\nSitemap: {base_url}/sitemap.xml\n")
}
