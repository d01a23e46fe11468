//! Syntactic URL validation.

use url::Url;

use crate::error::Error;

/// Parse `input` as an absolute URL.
///
/// Surfaces the parse failure as [`Error::ParseUrl`] for callers that need
/// the error kind; [`is_url_valid`] is the suppressing form.
pub fn try_parse_url(input: &str) -> Result<Url, Error> {
    Ok(Url::parse(input)?)
}

/// True when `input` parses as an absolute URL with both a scheme and a
/// non-empty network location.
///
/// Purely syntactic: nothing is resolved and no network access occurs.
/// Relative references, scheme-only URLs (`mailto:`, `data:`) and anything
/// that fails to parse all report false.
pub fn is_url_valid(input: &str) -> bool {
    // A parsed Url always carries a scheme, so only the host needs checking.
    match Url::parse(input) {
        Ok(parsed) => parsed.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_http_url_is_valid() {
        assert!(is_url_valid("https://example.com/path"));
        assert!(is_url_valid("http://localhost:8080"));
        assert!(is_url_valid("ftp://files.example.com/pub/file.txt"));
    }

    #[test]
    fn test_plain_text_is_not_valid() {
        assert!(!is_url_valid("not a url"));
    }

    #[test]
    fn test_relative_path_is_not_valid() {
        assert!(!is_url_valid("/relative/path"));
    }

    #[test]
    fn test_empty_string_is_not_valid() {
        assert!(!is_url_valid(""));
    }

    #[test]
    fn test_scheme_without_network_location_is_not_valid() {
        assert!(!is_url_valid("mailto:someone@example.com"));
        assert!(!is_url_valid("data:text/plain,hello"));
        assert!(!is_url_valid("file:///etc/hosts"));
    }

    #[test]
    fn test_try_parse_url_surfaces_error_kind() {
        let err = try_parse_url("/relative/path").unwrap_err();
        assert!(
            matches!(err, Error::ParseUrl(_)),
            "Expected ParseUrl, got: {err}"
        );

        assert!(try_parse_url("https://example.com").is_ok());
    }
}
