// Error codes implementation
// Codes are part of the client contract and must not change once published.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod auth {
    pub const INVALID_ARGUMENT: &str = "invalid-argument";
    pub const INVALID_CONFIG: &str = "invalid-config";
    pub const INVALID_PROVIDER_ID: &str = "invalid-provider-id";
    pub const MISSING_PROVIDER_ID: &str = "missing-provider-id";
    pub const MISSING_OAUTH_CLIENT_ID: &str = "missing-oauth-client-id";
    pub const INVALID_OAUTH_CLIENT_ID: &str = "invalid-oauth-client-id";
    pub const MISSING_ISSUER: &str = "missing-issuer";
    pub const MISSING_SAML_RELYING_PARTY_CONFIG: &str = "missing-saml-relying-party-config";
    pub const INTERNAL_ERROR: &str = "internal-error";
}

/// Categorical kind carried by every [`crate::AuthClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthClientErrorCode {
    InvalidArgument,
    InvalidConfig,
    InvalidProviderId,
    MissingProviderId,
    MissingOauthClientId,
    InvalidOauthClientId,
    MissingIssuer,
    MissingSamlRelyingPartyConfig,
    /// The server returned something the client contract says it never will.
    InternalError,
}

impl AuthClientErrorCode {
    /// Stable code without the `auth/` namespace.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument => auth::INVALID_ARGUMENT,
            Self::InvalidConfig => auth::INVALID_CONFIG,
            Self::InvalidProviderId => auth::INVALID_PROVIDER_ID,
            Self::MissingProviderId => auth::MISSING_PROVIDER_ID,
            Self::MissingOauthClientId => auth::MISSING_OAUTH_CLIENT_ID,
            Self::InvalidOauthClientId => auth::INVALID_OAUTH_CLIENT_ID,
            Self::MissingIssuer => auth::MISSING_ISSUER,
            Self::MissingSamlRelyingPartyConfig => auth::MISSING_SAML_RELYING_PARTY_CONFIG,
            Self::InternalError => auth::INTERNAL_ERROR,
        }
    }
}

impl fmt::Display for AuthClientErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "auth/{}", self.code())
    }
}
