//! `Authorization: ApiKey <key>` extraction.
//!
//! This module only looks at the shape of the header. Whether the key is known
//! or allowed is somebody else's problem; nothing here touches storage.

use std::fmt;

use axum::http::{HeaderMap, header};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// The only scheme we accept. Compared case-sensitively.
pub const SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header: {0}")]
    MalformedHeader(String),
}

impl ApiKeyError {
    fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedHeader(detail.into())
    }

    /// Stable machine-readable code. Callers (and the HTTP error body) should
    /// branch on this or on the variant, never on the message text.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiKeyError::NoAuthHeader => "NO_AUTH_HEADER",
            ApiKeyError::MalformedHeader(_) => "MALFORMED_AUTH_HEADER",
        }
    }
}

/// Credential presented by the client.
///
/// `Debug` is redacted; use [`ApiKey::fingerprint`] when a log line needs to
/// correlate requests made with the same key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase hex SHA-256 of the key.
    pub fn fingerprint(&self) -> String {
        format!("{:x}", Sha256::digest(self.0.as_bytes()))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Extract the API key from the request headers.
///
/// Header name lookup is case-insensitive (`HeaderMap` semantics). With
/// several `Authorization` values only the first one is considered.
pub fn extract_api_key(headers: &HeaderMap) -> Result<ApiKey, ApiKeyError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Err(ApiKeyError::NoAuthHeader);
    };

    if value.is_empty() {
        return Err(ApiKeyError::NoAuthHeader);
    }

    let value = value
        .to_str()
        .map_err(|_| ApiKeyError::malformed("value is not visible ASCII"))?;

    parse_authorization(value)
}

/// Parse a raw `Authorization` value of the form `ApiKey <key>`.
///
/// Splits on the first space only, so `ApiKey a b` yields `a b`.
pub fn parse_authorization(value: &str) -> Result<ApiKey, ApiKeyError> {
    if value.is_empty() {
        return Err(ApiKeyError::NoAuthHeader);
    }

    let Some((scheme, key)) = value.split_once(' ') else {
        return Err(ApiKeyError::malformed(format!(
            "expected `{SCHEME} <key>`"
        )));
    };

    if scheme.is_empty() {
        return Err(ApiKeyError::malformed("missing scheme"));
    }
    if scheme != SCHEME {
        return Err(ApiKeyError::malformed(format!(
            "unsupported scheme `{scheme}`"
        )));
    }
    if key.is_empty() {
        return Err(ApiKeyError::malformed("missing key"));
    }

    Ok(ApiKey(key.to_string()))
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, HeaderValue};

    use super::*;

    fn headers_with(values: &[&'static str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for v in values {
            headers.append(header::AUTHORIZATION, HeaderValue::from_static(*v));
        }
        headers
    }

    #[derive(Debug)]
    enum Want {
        Key(&'static str),
        NoAuthHeader,
        Malformed,
    }

    #[test]
    fn extract_api_key_table() {
        let cases: Vec<(&str, Vec<&'static str>, Want)> = vec![
            (
                "valid ApiKey header",
                vec!["ApiKey my-secret-api-key"],
                Want::Key("my-secret-api-key"),
            ),
            ("no authorization header", vec![], Want::NoAuthHeader),
            (
                "wrong scheme",
                vec!["Bearer my-secret-api-key"],
                Want::Malformed,
            ),
            (
                "no space after scheme",
                vec!["ApiKeymy-secret-api-key"],
                Want::Malformed,
            ),
            ("scheme only", vec!["ApiKey"], Want::Malformed),
            ("empty value", vec![""], Want::NoAuthHeader),
            ("split on first space only", vec!["ApiKey X Y"], Want::Key("X Y")),
            ("scheme with empty key", vec!["ApiKey "], Want::Malformed),
            ("leading space", vec![" ApiKey abc"], Want::Malformed),
            ("lowercase scheme", vec!["apikey abc"], Want::Malformed),
            (
                "first of several values wins",
                vec!["ApiKey first", "ApiKey second"],
                Want::Key("first"),
            ),
        ];

        for (name, values, want) in &cases {
            let got = extract_api_key(&headers_with(values));
            match (want, &got) {
                (Want::Key(k), Ok(key)) => assert_eq!(key.as_str(), *k, "{name}"),
                (Want::NoAuthHeader, Err(ApiKeyError::NoAuthHeader)) => {}
                (Want::Malformed, Err(ApiKeyError::MalformedHeader(_))) => {}
                _ => panic!("{name}: want {want:?}, got {got:?}"),
            }
        }
    }

    #[test]
    fn header_name_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        let name = HeaderName::from_bytes(b"AUTHORIZATION").unwrap();
        headers.insert(name, HeaderValue::from_static("ApiKey abc"));

        let key = extract_api_key(&headers).unwrap();
        assert_eq!(key.as_str(), "abc");
    }

    #[test]
    fn other_headers_do_not_count() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("ApiKey abc"));

        assert_eq!(extract_api_key(&headers), Err(ApiKeyError::NoAuthHeader));
    }

    #[test]
    fn non_ascii_value_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey \xff\xfe").unwrap(),
        );

        let err = extract_api_key(&headers).unwrap_err();
        assert_eq!(err.kind(), "MALFORMED_AUTH_HEADER");
    }

    #[test]
    fn malformed_message_names_the_scheme() {
        let err = parse_authorization("Bearer abc").unwrap_err();
        assert!(err.to_string().contains("Bearer"), "{err}");
    }

    #[test]
    fn no_auth_header_is_a_comparable_sentinel() {
        assert_eq!(parse_authorization(""), Err(ApiKeyError::NoAuthHeader));
        assert_eq!(ApiKeyError::NoAuthHeader.kind(), "NO_AUTH_HEADER");
    }

    #[test]
    fn debug_does_not_leak_the_key() {
        let key = parse_authorization("ApiKey super-secret").unwrap();
        assert!(!format!("{key:?}").contains("super-secret"));
    }

    #[test]
    fn fingerprint_is_sha256_hex() {
        let key = parse_authorization("ApiKey abc").unwrap();
        assert_eq!(
            key.fingerprint(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
