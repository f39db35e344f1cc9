pub use error_common::{AuthClientError, AuthClientErrorCode};

pub type Result<T> = std::result::Result<T, AuthClientError>;

/// Build an internal-assertion error and report it before it is returned.
pub(crate) fn internal_assert(context: &str, message: &str) -> AuthClientError {
    let error = AuthClientError::internal_assert(message);
    error_common::log_error(context, &error);
    error
}
