// SPDX-License-Identifier: MPL-2.0
//! Session cookie handling and the CSRF token capability.
//!
//! The booking endpoint expects an `X-CSRFToken` header whose value lives in
//! a cookie named `csrftoken`. The token source is abstracted behind
//! [`CsrfTokenProvider`] so the wizard can be driven in tests with a fixed
//! token instead of a real cookie string.

/// Name of the cookie carrying the CSRF token.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Capability for supplying the CSRF token at submission time.
pub trait CsrfTokenProvider {
    /// Returns the current CSRF token, if one is available.
    fn csrf_token(&self) -> Option<String>;
}

/// Extracts a cookie value from a raw `Cookie` header string.
///
/// Parts are split on `;`, trimmed, and matched on `name=`; the first match
/// wins and its value is percent-decoded.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    for part in cookies.split(';') {
        let part = part.trim();
        if let Some(rest) = part.strip_prefix(name) {
            if let Some(value) = rest.strip_prefix('=') {
                return Some(
                    urlencoding::decode(value)
                        .map(|c| c.into_owned())
                        .unwrap_or_else(|_| value.to_string()),
                );
            }
        }
    }
    None
}

/// The session's cookie jar, held as the raw header value it was issued as.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookies {
    header: String,
}

impl SessionCookies {
    /// Wraps a raw `Cookie` header value.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }

    /// Returns the raw header value, suitable for a `Cookie` request header.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns whether any cookies are present.
    pub fn is_empty(&self) -> bool {
        self.header.trim().is_empty()
    }
}

impl CsrfTokenProvider for SessionCookies {
    fn csrf_token(&self) -> Option<String> {
        cookie_value(&self.header, CSRF_COOKIE_NAME)
    }
}
