use std::fmt;

use reqwest::header::{HeaderName, AUTHORIZATION};

/// Username/password pair entered for the current session. Never persisted.
#[derive(Clone, Default)]
pub struct Credentials {
    pub user: String,
    pub pass: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            pass: pass.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("pass", &"***")
            .finish()
    }
}

/// A ready-to-send `Authorization: Basic <token>` header.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeader {
    pub(crate) value: String,
}

impl AuthHeader {
    pub fn name(&self) -> HeaderName {
        AUTHORIZATION
    }

    /// Header value, e.g. `Basic YTpi`.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for AuthHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Authorization: {}", self.value)
    }
}

impl fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthHeader(Basic ***)")
    }
}
