use thiserror::Error;

/// Failures detected while collecting input, before any request is sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("Username and password are required")]
    AuthMissing,

    #[error("Profile ID must be a number, got {0:?}")]
    InvalidId(String),

    #[error("Edited profile is not valid JSON: {0}")]
    InvalidPayload(String),

    #[error("Email is required")]
    EmailMissing,
}
