//! URL validation
//!
//! Links from the API, addresses from the config and redirect targets from
//! the visitor all pass through here before use.

use std::fmt;

use url::Url;

#[derive(Debug, PartialEq, Eq)]
pub enum UrlValidationError {
    Empty,
    /// Parsed, but the scheme is not http or https (`javascript:`, `ftp:` …)
    UnsupportedScheme(String),
    MissingHost,
    Malformed(String),
}

impl fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("URL is empty"),
            Self::UnsupportedScheme(scheme) => {
                write!(f, "scheme '{}' is not allowed, use http or https", scheme)
            }
            Self::MissingHost => f.write_str("URL has no host"),
            Self::Malformed(msg) => write!(f, "malformed URL: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// Parse an absolute http(s) URL with a host
pub fn validate_url(raw: &str) -> Result<Url, UrlValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(raw).map_err(|e| UrlValidationError::Malformed(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}

/// Link from API data that is safe to put in an `href`, trimmed
pub fn safe_external_link(url: Option<&str>) -> Option<&str> {
    let url = url?.trim();
    validate_url(url).ok().map(|_| url)
}

/// Resolve a `?next=` value to a same-site path, `/` otherwise
///
/// `//host` and backslash forms are rejected because browsers treat them as
/// another origin.
pub fn local_redirect_target(next: Option<&str>) -> &str {
    match next {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => "/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_url("https://siemens-energy.com").is_ok());
        assert!(validate_url("http://localhost:8080").is_ok());
        assert!(validate_url("  HTTPS://abb.com/en  ").is_ok());
    }

    #[test]
    fn test_rejects_script_and_data_schemes() {
        assert_eq!(
            validate_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedScheme("javascript".into()))
        );
        assert_eq!(
            validate_url("data:text/html,<b>x</b>"),
            Err(UrlValidationError::UnsupportedScheme("data".into()))
        );
        assert_eq!(
            validate_url("ftp://files.example"),
            Err(UrlValidationError::UnsupportedScheme("ftp".into()))
        );
    }

    #[test]
    fn test_rejects_empty_and_relative() {
        assert_eq!(validate_url("   "), Err(UrlValidationError::Empty));
        assert!(matches!(
            validate_url("/uploads/logo.png"),
            Err(UrlValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_safe_external_link() {
        assert_eq!(
            safe_external_link(Some(" https://kuka.com ")),
            Some("https://kuka.com")
        );
        assert_eq!(safe_external_link(Some("javascript:void(0)")), None);
        assert_eq!(safe_external_link(None), None);
    }

    #[test]
    fn test_local_redirect_target() {
        assert_eq!(
            local_redirect_target(Some("/gallery?category=Parts")),
            "/gallery?category=Parts"
        );
        assert_eq!(local_redirect_target(Some("//evil.example")), "/");
        assert_eq!(local_redirect_target(Some("https://evil.example")), "/");
        assert_eq!(local_redirect_target(Some("/\\evil.example")), "/");
        assert_eq!(local_redirect_target(None), "/");
    }
}
