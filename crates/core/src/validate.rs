//! Format checks for tenant-supplied identifiers.
//!
//! These mirror DNS label constraints: a subdomain is 3-63 characters of
//! lowercase alphanumerics and single hyphens, never starting or ending
//! with a hyphen.

/// Whether `subdomain` is a usable tenant subdomain.
pub fn is_valid_subdomain(subdomain: &str) -> bool {
    let len = subdomain.len();
    if !(3..=63).contains(&len) {
        return false;
    }
    let bytes = subdomain.as_bytes();
    if bytes[0] == b'-' || bytes[len - 1] == b'-' {
        return false;
    }
    if subdomain.contains("--") {
        return false;
    }
    subdomain
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Minimal shape check for an email address: `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'))
    {
        return false;
    }
    let Some((name, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Shape check for a custom domain (`example.com`, `shop.example.co`).
pub fn is_valid_domain(domain: &str) -> bool {
    let Some((name, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    let len = name.len();
    if !(2..=63).contains(&len) {
        return false;
    }
    let bytes = name.as_bytes();
    if bytes[0] == b'-' || bytes[len - 1] == b'-' {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}
