//! Slug normalization and homepage resolution rules.
//!
//! A slug is the URL path segment identifying a page within a tenant. Every
//! slug is canonicalized through [`normalize`] before the uniqueness check
//! and before storage; callers must not bypass it. The empty slug is legal
//! and means "site root".

/// Homepage alias slugs in fixed priority order: `home` beats `index` beats
/// the empty slug. Requests for any of the three are interchangeable entry
/// points for a tenant's site root.
pub const HOMEPAGE_ALIASES: [&str; 3] = ["home", "index", ""];

/// Canonicalize a candidate slug into its storage form.
///
/// Trims surrounding whitespace, lowercases, replaces every character
/// outside `[a-z0-9-]` with `-`, collapses consecutive `-` into one, and
/// strips leading/trailing `-`. Idempotent: normalizing an already
/// normalized slug is a no-op.
///
/// # Examples
///
/// ```
/// use pagesmith_core::slug::normalize;
///
/// assert_eq!(normalize("  Hello World!  "), "hello-world");
/// assert_eq!(normalize("My--Page__2"), "my-page-2");
/// assert_eq!(normalize("---"), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_hyphen = false;

    for ch in raw.trim().chars() {
        let lowered = ch.to_ascii_lowercase();
        if lowered.is_ascii_lowercase() || lowered.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(lowered);
        } else {
            // '-' and every other non-alphanumeric character collapse into
            // a single separator, dropped at the start and end.
            pending_hyphen = true;
        }
    }

    out
}

/// Whether a normalized slug is one of the interchangeable homepage slugs.
pub fn is_homepage_alias(slug: &str) -> bool {
    HOMEPAGE_ALIASES.contains(&slug)
}

/// Select the homepage from an already-fetched candidate list.
///
/// Candidates are published pages whose slug is a homepage alias. The pick
/// follows [`HOMEPAGE_ALIASES`] priority; if none of the three canonical
/// slugs is present the first candidate wins, so callers that fetch
/// candidates ordered by creation time get a deterministic fallback.
pub fn pick_homepage<T>(candidates: &[T], slug_of: impl Fn(&T) -> &str) -> Option<&T> {
    for alias in HOMEPAGE_ALIASES {
        if let Some(found) = candidates.iter().find(|c| slug_of(c) == alias) {
            return Some(found);
        }
    }
    candidates.first()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_replaces_separators() {
        assert_eq!(normalize("Hello World"), "hello-world");
        assert_eq!(normalize("About Us!"), "about-us");
        assert_eq!(normalize("my_page.html"), "my-page-html");
    }

    #[test]
    fn collapses_and_strips_hyphens() {
        assert_eq!(normalize("--a---b--"), "a-b");
        assert_eq!(normalize("a - - b"), "a-b");
        assert_eq!(normalize("-leading"), "leading");
        assert_eq!(normalize("trailing-"), "trailing");
    }

    #[test]
    fn empty_and_degenerate_inputs() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn non_ascii_becomes_separator() {
        assert_eq!(normalize("héllo"), "h-llo");
        assert_eq!(normalize("日本語page"), "page");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "Hello World!",
            "  --Foo__Bar--  ",
            "already-normal",
            "",
            "ALL CAPS 123",
            "a--b--c",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn output_domain_is_constrained() {
        let samples = ["Weird  ~~ Input ##", "-x-", "çafé", "A_B_C", "0  9"];
        for s in samples {
            let slug = normalize(s);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "bad char in {slug:?}"
            );
            assert!(!slug.starts_with('-'));
            assert!(!slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
    }

    #[test]
    fn homepage_aliases() {
        assert!(is_homepage_alias(""));
        assert!(is_homepage_alias("home"));
        assert!(is_homepage_alias("index"));
        assert!(!is_homepage_alias("about"));
    }

    #[test]
    fn homepage_priority_home_first() {
        let slugs = ["index", "", "home"];
        let picked = pick_homepage(&slugs, |s| s).unwrap();
        assert_eq!(*picked, "home");
    }

    #[test]
    fn homepage_priority_index_over_empty() {
        let slugs = ["", "index"];
        let picked = pick_homepage(&slugs, |s| s).unwrap();
        assert_eq!(*picked, "index");
    }

    #[test]
    fn homepage_falls_back_to_first_candidate() {
        // Degraded case: storage returned candidates none of which carry a
        // canonical alias slug. The first one (earliest created) wins.
        let slugs = ["landing", "welcome"];
        let picked = pick_homepage(&slugs, |s| s).unwrap();
        assert_eq!(*picked, "landing");
        assert_eq!(pick_homepage::<&str>(&[], |s| s), None);
    }
}
