// Error reporting utilities

use crate::types::AuthClientError;

/// Emit a structured error event for a failure about to be returned to the caller.
pub fn log_error(context: &str, error: &AuthClientError) {
    if error.is_internal() {
        tracing::error!(
            context = context,
            error_code = %error.code(),
            "{}",
            error.message()
        );
    } else {
        tracing::debug!(
            context = context,
            error_code = %error.code(),
            "{}",
            error.message()
        );
    }
}
