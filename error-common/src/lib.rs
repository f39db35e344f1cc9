//! Common error handling for the auth administration client
//!
//! Every failure raised while translating identity-provider configuration is an
//! [`AuthClientError`]: a categorical [`AuthClientErrorCode`] plus a message.
//!
//! # Error Classes
//!
//! - **Internal assertions**: a server response broke the client contract
//!   (missing required fields, malformed resource name). Not user-actionable.
//! - **Invalid argument/config**: malformed client input. Each has a specific
//!   code so callers can tell exactly what to fix.
//!
//! # Example
//!
//! ```rust
//! use error_common::{AuthClientError, AuthClientErrorCode};
//!
//! let err = AuthClientError::new(
//!     AuthClientErrorCode::MissingIssuer,
//!     "\"OIDCAuthProviderConfig.issuer\" must be a valid URL string.",
//! );
//! assert_eq!(err.code().code(), "missing-issuer");
//! assert!(!err.is_internal());
//! ```

pub mod types;
pub mod codes;
pub mod reporting;

pub use types::*;
pub use codes::*;
pub use reporting::*;
