//! Bearer token for API authentication.

use std::fmt;

use http::HeaderValue;
use http::header::InvalidHeaderValue;

/// An API token, stored as a ready-made `Authorization` header value.
///
/// The token never appears in `Debug` output or request dumps.
#[derive(Clone)]
pub struct ApiToken {
    header: HeaderValue,
}

impl ApiToken {
    /// Creates a token from its literal value.
    ///
    /// # Errors
    ///
    /// Returns an error if the token contains characters that are not valid
    /// in an HTTP header (control characters, newlines).
    pub fn new(token: &str) -> Result<Self, InvalidHeaderValue> {
        let mut header = HeaderValue::from_str(&format!("Bearer {token}"))?;
        header.set_sensitive(true);
        Ok(Self { header })
    }

    /// Returns the `Authorization` header value.
    #[must_use]
    pub fn header_value(&self) -> HeaderValue {
        self.header.clone()
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_value_uses_bearer_scheme() {
        let token = ApiToken::new("abc123").unwrap();

        assert_eq!(token.header_value(), "Bearer abc123");
        assert!(token.header_value().is_sensitive());
    }

    #[test]
    fn debug_does_not_leak_token() {
        let token = ApiToken::new("abc123").unwrap();

        assert_eq!(format!("{token:?}"), "ApiToken(<redacted>)");
    }

    #[test]
    fn newline_is_rejected() {
        assert!(ApiToken::new("abc\n123").is_err());
    }
}
