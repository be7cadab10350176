//! Link URL sanitization.

/// Schemes a link may use.
const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Returned in place of any URL that is rejected.
pub const FALLBACK_URL: &str = "https://";

/// Returns `url` unchanged if it parses with an allowed scheme, otherwise
/// [`FALLBACK_URL`].
pub fn sanitize_url(url: &str) -> String {
    match ::url::Url::parse(url) {
        Ok(parsed) if ALLOWED_SCHEMES.contains(&parsed.scheme()) => url.to_string(),
        Ok(parsed) => {
            tracing::warn!(scheme = parsed.scheme(), "Rejected link with disallowed scheme");
            FALLBACK_URL.to_string()
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected unparseable link");
            FALLBACK_URL.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_schemes_pass_through() {
        assert_eq!(sanitize_url("https://example.com"), "https://example.com");
        assert_eq!(sanitize_url("http://example.com/a?b=c"), "http://example.com/a?b=c");
        assert_eq!(sanitize_url("mailto:a@b.com"), "mailto:a@b.com");
    }

    #[test]
    fn test_original_text_is_kept() {
        // The parser normalizes, but the caller gets back what it passed in.
        assert_eq!(sanitize_url("HTTPS://Example.COM"), "HTTPS://Example.COM");
    }

    #[test]
    fn test_disallowed_schemes_fall_back() {
        assert_eq!(sanitize_url("javascript:alert(1)"), FALLBACK_URL);
        assert_eq!(sanitize_url("ftp://example.com"), FALLBACK_URL);
        assert_eq!(sanitize_url("data:text/html,hi"), FALLBACK_URL);
    }

    #[test]
    fn test_unparseable_input_falls_back() {
        assert_eq!(sanitize_url("not a url"), "https://");
        assert_eq!(sanitize_url(""), "https://");
        assert_eq!(sanitize_url("/relative/path"), "https://");
    }
}
