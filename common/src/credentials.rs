//! Bearer credential passed explicitly into every fetch.
//!
//! The token itself is written by the login flow, which lives outside this
//! page. Here it is only parsed out of a `document.cookie` style string and
//! carried as a value.

use std::fmt;

/// A bearer token. Empty when no token was found; requests are still sent and
/// simply fail on the server side.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Extracts the cookie called `name` from a `"a=1; b=2"` cookie string.
    ///
    /// Returns `None` when the cookie is missing or has an empty value.
    pub fn from_cookie_header(cookies: &str, name: &str) -> Option<Self> {
        cookies
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(key, _)| key.trim() == name)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
            .map(Self::new)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value for the `Authorization` header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Keeps tokens out of console output.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("Credential(<none>)")
        } else {
            f.write_str("Credential(<redacted>)")
        }
    }
}
