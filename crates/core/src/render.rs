//! Server-side HTML rendering for published pages.
//!
//! [`render_page`] turns a page document and its tenant's site identity
//! into a complete, self-contained HTML document: inline stylesheet, SEO
//! and social meta tags, and per-block markup. Pure function of its inputs,
//! so rendering the same page twice yields byte-identical output.
//!
//! Missing or malformed `content` map entries never fail a render; every
//! lookup falls back to a per-block-type default.

use serde_json::Value;

use crate::content::{ContentBlock, ContentSection, PageContent, SeoSettings};
use crate::escape::escape_html;
use crate::style;

/// Borrowed view of the page fields the renderer consumes.
#[derive(Debug, Clone, Copy)]
pub struct RenderPage<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub meta_description: Option<&'a str>,
    pub meta_keywords: Option<&'a str>,
    pub content: &'a PageContent,
    pub seo: &'a SeoSettings,
}

/// Site identity used to compute the page's canonical base URL.
#[derive(Debug, Clone, Copy)]
pub struct Site<'a> {
    pub subdomain: &'a str,
    pub custom_domain: Option<&'a str>,
    /// Apex domain tenant subdomains hang off, e.g. `example.com`.
    pub platform_domain: &'a str,
}

/// Canonical base URL for a tenant site: the custom domain when one is
/// configured, otherwise the platform subdomain.
pub fn base_url(site: &Site<'_>) -> String {
    match site.custom_domain {
        Some(domain) => format!("https://{domain}"),
        None => format!("https://{}.{}", site.subdomain, site.platform_domain),
    }
}

/// Render a complete HTML document for a page.
pub fn render_page(page: &RenderPage<'_>, site: &Site<'_>) -> String {
    let base = base_url(site);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!(
        "    <title>{}</title>\n",
        escape_html(page.title)
    ));

    if let Some(description) = page.meta_description {
        html.push_str(&format!(
            "    <meta name=\"description\" content=\"{}\">\n",
            escape_html(description)
        ));
    }

    if let Some(keywords) = page.meta_keywords {
        html.push_str(&format!(
            "    <meta name=\"keywords\" content=\"{}\">\n",
            escape_html(keywords)
        ));
    }

    render_seo_meta(&mut html, page, &base);

    html.push_str("    <style>\n");
    html.push_str(&style::stylesheet(&page.content.design_settings));
    html.push_str("    </style>\n");

    html.push_str("</head>\n");
    html.push_str("<body>\n");

    for section in &page.content.sections {
        render_section(&mut html, section);
    }

    html.push_str("</body>\n");
    html.push_str("</html>\n");

    html
}

/// Render the styled 404 document served when a tenant or page cannot be
/// resolved. Public requests always get valid HTML back, never a bare
/// status code.
pub fn render_not_found(message: &str) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("    <title>Page Not Found</title>\n");
    html.push_str("    <style>\n");
    html.push_str("        body {\n");
    html.push_str("            font-family: Arial, sans-serif;\n");
    html.push_str("            text-align: center;\n");
    html.push_str("            padding: 50px;\n");
    html.push_str("            background-color: #f8f9fa;\n");
    html.push_str("        }\n");
    html.push_str("        .error-container {\n");
    html.push_str("            max-width: 600px;\n");
    html.push_str("            margin: 0 auto;\n");
    html.push_str("            background: white;\n");
    html.push_str("            padding: 40px;\n");
    html.push_str("            border-radius: 8px;\n");
    html.push_str("            box-shadow: 0 2px 4px rgba(0,0,0,0.1);\n");
    html.push_str("        }\n");
    html.push_str("        h1 {\n");
    html.push_str("            color: #dc3545;\n");
    html.push_str("            font-size: 3em;\n");
    html.push_str("            margin-bottom: 0.5em;\n");
    html.push_str("        }\n");
    html.push_str("        p {\n");
    html.push_str("            color: #6c757d;\n");
    html.push_str("            font-size: 1.1em;\n");
    html.push_str("            line-height: 1.6;\n");
    html.push_str("        }\n");
    html.push_str("    </style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str("    <div class=\"error-container\">\n");
    html.push_str("        <h1>404</h1>\n");
    html.push_str(&format!("        <p>{}</p>\n", escape_html(message)));
    html.push_str(
        "        <p>The page you're looking for might have been moved, deleted, or doesn't exist.</p>\n",
    );
    html.push_str("    </div>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");

    html
}

// ---------------------------------------------------------------------------
// Head: SEO / social meta
// ---------------------------------------------------------------------------

fn render_seo_meta(html: &mut String, page: &RenderPage<'_>, base_url: &str) {
    let seo = page.seo;
    let page_url = escape_html(&format!("{base_url}/{}", page.slug));

    // Open Graph: og:title falls back to the page title, og:description to
    // the meta description, og:image is omitted when unset.
    let og_title = seo.og_title.as_deref().unwrap_or(page.title);
    html.push_str(&format!(
        "    <meta property=\"og:title\" content=\"{}\">\n",
        escape_html(og_title)
    ));

    let og_description = seo
        .og_description
        .as_deref()
        .or(page.meta_description);
    if let Some(description) = og_description {
        html.push_str(&format!(
            "    <meta property=\"og:description\" content=\"{}\">\n",
            escape_html(description)
        ));
    }

    if let Some(image) = &seo.og_image {
        html.push_str(&format!(
            "    <meta property=\"og:image\" content=\"{}\">\n",
            escape_html(image)
        ));
    }

    html.push_str(&format!(
        "    <meta property=\"og:url\" content=\"{page_url}\">\n"
    ));
    html.push_str("    <meta property=\"og:type\" content=\"website\">\n");

    // Twitter Card: the explicit og values only, no page-level fallbacks.
    html.push_str(&format!(
        "    <meta name=\"twitter:card\" content=\"{}\">\n",
        escape_html(&seo.twitter_card)
    ));
    if let Some(title) = &seo.og_title {
        html.push_str(&format!(
            "    <meta name=\"twitter:title\" content=\"{}\">\n",
            escape_html(title)
        ));
    }
    if let Some(description) = &seo.og_description {
        html.push_str(&format!(
            "    <meta name=\"twitter:description\" content=\"{}\">\n",
            escape_html(description)
        ));
    }
    if let Some(image) = &seo.og_image {
        html.push_str(&format!(
            "    <meta name=\"twitter:image\" content=\"{}\">\n",
            escape_html(image)
        ));
    }

    match &seo.canonical_url {
        Some(canonical) => html.push_str(&format!(
            "    <link rel=\"canonical\" href=\"{}\">\n",
            escape_html(canonical)
        )),
        None => html.push_str(&format!(
            "    <link rel=\"canonical\" href=\"{page_url}\">\n"
        )),
    }

    if seo.no_index || seo.no_follow {
        let mut directives = Vec::new();
        if seo.no_index {
            directives.push("noindex");
        }
        if seo.no_follow {
            directives.push("nofollow");
        }
        html.push_str(&format!(
            "    <meta name=\"robots\" content=\"{}\">\n",
            directives.join(", ")
        ));
    }
}

// ---------------------------------------------------------------------------
// Body: sections and blocks
// ---------------------------------------------------------------------------

fn render_section(html: &mut String, section: &ContentSection) {
    let style = style::style_attr(&style::section_style_parts(&section.settings));

    html.push_str(&format!(
        "    <section class=\"section {}\"{style}>\n",
        section.section_type.css_class()
    ));

    if section.settings.full_width {
        for block in &section.blocks {
            html.push_str("        ");
            html.push_str(&render_block(block));
            html.push('\n');
        }
    } else {
        html.push_str("        <div class=\"container\">\n");
        html.push_str("            <div class=\"section-content\">\n");
        for block in &section.blocks {
            html.push_str("                ");
            html.push_str(&render_block(block));
            html.push('\n');
        }
        html.push_str("            </div>\n");
        html.push_str("        </div>\n");
    }

    html.push_str("    </section>\n");
}

fn render_block(block: &ContentBlock) -> String {
    use crate::content::BlockType;

    let style = style::style_attr(&style::block_style_parts(&block.styling));
    let base_class = format!("block {}-block", block.block_type.css_slug());
    let content = &block.content;

    match block.block_type {
        BlockType::Heading => {
            let text = content_str(content, "text").unwrap_or("Heading");
            let level = heading_level(content);
            format!(
                "<h{level} class=\"{base_class}\"{style}>{}</h{level}>",
                escape_html(text)
            )
        }

        BlockType::Paragraph => {
            let text = content_str(content, "text").unwrap_or("");
            format!("<p class=\"{base_class}\"{style}>{}</p>", escape_html(text))
        }

        BlockType::Image => {
            let src = content_str(content, "src").unwrap_or("");
            let alt = content_str(content, "alt").unwrap_or("");
            let mut markup = format!(
                "<div class=\"{base_class}\"{style}><img src=\"{}\" alt=\"{}\" style=\"max-width: 100%; height: auto;\">",
                escape_html(src),
                escape_html(alt)
            );
            if let Some(caption) = content_str(content, "caption") {
                markup.push_str(&format!(
                    "<p class=\"image-caption\" style=\"margin-top: 8px; font-size: 0.9em; color: #666;\">{}</p>",
                    escape_html(caption)
                ));
            }
            markup.push_str("</div>");
            markup
        }

        BlockType::Button => {
            let text = content_str(content, "text").unwrap_or("Button");
            let href = content_str(content, "href").unwrap_or("#");
            let target = if content_bool(content, "newTab") {
                " target=\"_blank\""
            } else {
                ""
            };
            format!(
                "<a href=\"{}\" class=\"{base_class} btn\"{target}{style}>{}</a>",
                escape_html(href),
                escape_html(text)
            )
        }

        BlockType::List => {
            let tag = if content_bool(content, "ordered") {
                "ol"
            } else {
                "ul"
            };
            let mut markup = format!("<{tag} class=\"{base_class}\"{style}>");
            if let Some(Value::Array(items)) = content.get("items") {
                for item in items {
                    let text = match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    markup.push_str(&format!("<li>{}</li>", escape_html(&text)));
                }
            }
            markup.push_str(&format!("</{tag}>"));
            markup
        }

        BlockType::Spacer => {
            let height = content_str(content, "height").unwrap_or("20px");
            format!(
                "<div class=\"{base_class}\" style=\"height: {};\"></div>",
                escape_html(height)
            )
        }

        BlockType::Divider => {
            let color = content_str(content, "color").unwrap_or("#e0e0e0");
            let thickness = content_str(content, "thickness").unwrap_or("1px");
            let mut parts = vec![
                "border: none".to_string(),
                format!(
                    "border-top: {} solid {}",
                    escape_html(thickness),
                    escape_html(color)
                ),
                "margin: 20px 0".to_string(),
            ];
            parts.extend(style::block_style_parts(&block.styling));
            format!(
                "<hr class=\"{base_class}\" style=\"{}\">",
                parts.join("; ")
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Content-map accessors
// ---------------------------------------------------------------------------

fn content_str<'a>(map: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

fn content_bool(map: &serde_json::Map<String, Value>, key: &str) -> bool {
    map.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Heading level from the content map, clamped to the valid `h1`..`h6`
/// range. Non-numeric values fall back to 1.
fn heading_level(map: &serde_json::Map<String, Value>) -> i64 {
    map.get("level")
        .and_then(Value::as_i64)
        .unwrap_or(1)
        .clamp(1, 6)
}
