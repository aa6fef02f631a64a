//! Bearer Credential Extraction
//!
//! Pulls the bearer token out of an `Authorization` header.

use http::HeaderMap;
use http::header::AUTHORIZATION;

/// Extract the bearer token from request headers.
///
/// Returns `None` when the header is absent, is not valid UTF-8, or does
/// not use the `Bearer` scheme. The scheme match is case-insensitive, as
/// HTTP auth schemes are.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;

    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extracts_bearer_token() {
        let headers = headers_with("Bearer abc.def");
        assert_eq!(extract_bearer(&headers), Some("abc.def"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let headers = headers_with("bearer abc.def");
        assert_eq!(extract_bearer(&headers), Some("abc.def"));

        let headers = headers_with("BEARER abc.def");
        assert_eq!(extract_bearer(&headers), Some("abc.def"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn test_empty_token() {
        let headers = headers_with("Bearer ");
        assert_eq!(extract_bearer(&headers), None);
    }

    #[test]
    fn test_bare_scheme() {
        let headers = headers_with("Bearer");
        assert_eq!(extract_bearer(&headers), None);
    }
}
