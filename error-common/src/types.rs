use crate::codes::AuthClientErrorCode;
use thiserror::Error;

/// Prefix for failures caused by a server response breaking the client contract.
pub const INTERNAL_ASSERT_PREFIX: &str = "INTERNAL ASSERT FAILED:";

/// Error raised by the auth administration client.
///
/// Carries a categorical [`AuthClientErrorCode`] plus a human-readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct AuthClientError {
    code: AuthClientErrorCode,
    message: String,
}

impl AuthClientError {
    pub fn new(code: AuthClientErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Server response violated the assumed contract.
    pub fn internal_assert(message: impl AsRef<str>) -> Self {
        Self::new(
            AuthClientErrorCode::InternalError,
            format!("{} {}", INTERNAL_ASSERT_PREFIX, message.as_ref()),
        )
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(AuthClientErrorCode::InvalidArgument, message)
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(AuthClientErrorCode::InvalidConfig, message)
    }

    pub fn code(&self) -> AuthClientErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True for server-contract failures, false for user-correctable input errors.
    pub fn is_internal(&self) -> bool {
        self.code == AuthClientErrorCode::InternalError
    }
}

/// Result type alias for auth client operations
pub type Result<T> = std::result::Result<T, AuthClientError>;
