use base64ct::{Base64, Encoding};
use tracing::{debug, warn};

use crate::auth::dto::{AuthHeader, Credentials};
use crate::error::ClientError;

/// Encodes `user:pass` into a Basic-Auth header. Whether the pair is valid is
/// only ever decided by the backend.
pub fn build_auth_header(user: &str, pass: &str) -> Result<AuthHeader, ClientError> {
    if user.is_empty() || pass.is_empty() {
        warn!("credentials missing");
        return Err(ClientError::AuthMissing);
    }
    let token = Base64::encode_string(format!("{}:{}", user, pass).as_bytes());
    debug!(user = %user, "basic auth header built");
    Ok(AuthHeader {
        value: format!("Basic {}", token),
    })
}

/// Same as [`build_auth_header`] but for an optional session pair.
pub fn header_for(creds: Option<&Credentials>) -> Result<AuthHeader, ClientError> {
    match creds {
        Some(c) => build_auth_header(&c.user, &c.pass),
        None => Err(ClientError::AuthMissing),
    }
}

#[cfg(test)]
mod auth_tests {
    use super::*;

    #[test]
    fn encodes_user_and_pass() {
        let header = build_auth_header("a", "b").expect("header");
        assert_eq!(header.value(), "Basic YTpi");
        assert_eq!(header.to_string(), "Authorization: Basic YTpi");
        assert_eq!(header.name(), reqwest::header::AUTHORIZATION);
    }

    #[test]
    fn keeps_colons_in_password() {
        let header = build_auth_header("admin", "p:ss").expect("header");
        assert_eq!(header.value(), "Basic YWRtaW46cDpzcw==");
    }

    #[test]
    fn empty_user_or_pass_is_auth_missing() {
        assert_eq!(build_auth_header("", "b"), Err(ClientError::AuthMissing));
        assert_eq!(build_auth_header("a", ""), Err(ClientError::AuthMissing));
        assert_eq!(build_auth_header("", ""), Err(ClientError::AuthMissing));
    }

    #[test]
    fn absent_credentials_are_auth_missing() {
        assert_eq!(header_for(None), Err(ClientError::AuthMissing));
        let creds = Credentials::new("a", "b");
        assert_eq!(header_for(Some(&creds)).unwrap().value(), "Basic YTpi");
    }

    #[test]
    fn debug_hides_secrets() {
        let creds = Credentials::new("alice", "hunter2");
        let out = format!("{:?}", creds);
        assert!(out.contains("alice"));
        assert!(!out.contains("hunter2"));
        let header = build_auth_header("alice", "hunter2").unwrap();
        assert!(!format!("{:?}", header).contains(header.value()));
    }
}
