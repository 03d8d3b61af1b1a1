//! Bearer token authentication
//!
//! The token is attached once, as a default header of the shared HTTP
//! session, and never varies per request.

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use std::fmt;

/// API access token
///
/// `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True when no token was supplied
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// `Authorization` header value, marked sensitive
    pub fn header_value(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0))
            .map_err(|_| Error::config("token contains characters not allowed in a header"))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

/// Headers sent with every request of a session
pub fn session_headers(token: &BearerToken, user_agent: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, token.header_value()?);
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent)
            .map_err(|_| Error::config(format!("invalid user agent: {user_agent}")))?,
    );
    Ok(headers)
}
