//! Dispatch between SAML and OIDC for callers that handle both kinds
//! through one code path.

use crate::config::ValidationMode;
use crate::error::{internal_assert, AuthClientError, AuthClientErrorCode, Result};
use crate::models::{OidcConfigServerRequest, SamlConfigServerRequest};
use crate::oidc::OidcProviderConfig;
use crate::provider::{FederatedConfig, ProviderKind, ServerConfig};
use crate::saml::SamlProviderConfig;
use crate::validator;
use serde::Serialize;
use serde_json::Value;

const NOT_AN_OBJECT: &str = "The provider configuration must be a non-null object.";
const UNKNOWN_PROVIDER_ID: &str =
    "The providerId must be a valid non-empty string prefixed with \"saml.\" or \"oidc.\".";

/// A federated provider config of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FederatedProviderConfig {
    Saml(SamlProviderConfig),
    Oidc(OidcProviderConfig),
}

impl FederatedProviderConfig {
    /// Build from a raw server response, picking the kind from its resource name.
    ///
    /// # Errors
    ///
    /// Returns an `internal-error` when the resource name belongs to neither
    /// kind or the response is invalid for its kind.
    pub fn from_response_value(response: Value) -> Result<Self> {
        let kind = response
            .get("name")
            .and_then(Value::as_str)
            .and_then(ProviderKind::from_resource_name);

        match kind {
            Some(ProviderKind::Saml) => SamlProviderConfig::from_response_value(response).map(Self::Saml),
            Some(ProviderKind::Oidc) => OidcProviderConfig::from_response_value(response).map(Self::Oidc),
            None => Err(internal_assert(
                "federated provider configuration",
                "Invalid provider configuration response",
            )),
        }
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Saml(_) => ProviderKind::Saml,
            Self::Oidc(_) => ProviderKind::Oidc,
        }
    }

    pub fn provider_id(&self) -> &str {
        match self {
            Self::Saml(config) => config.provider_id(),
            Self::Oidc(config) => config.provider_id(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Saml(config) => config.to_json(),
            Self::Oidc(config) => config.to_json(),
        }
    }
}

/// A backend request body of either kind. Serializes as the bare body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FederatedServerRequest {
    Saml(SamlConfigServerRequest),
    Oidc(OidcConfigServerRequest),
}

impl FederatedServerRequest {
    /// Build a create request. The kind is chosen by the `providerId` in `options`
    /// and every required field must be present.
    ///
    /// # Errors
    ///
    /// Fails with `invalid-config` for a non-object, `invalid-provider-id` when
    /// the id matches neither kind, or the kind's validation error.
    pub fn build_create_request(options: &Value) -> Result<Self> {
        let map = validator::as_object(Some(options))
            .ok_or_else(|| AuthClientError::invalid_config(NOT_AN_OBJECT))?;
        let provider_id = map.get("providerId").and_then(Value::as_str).unwrap_or_default();
        Self::build(provider_id, options, ValidationMode::Strict)
    }

    /// Build an update request for an existing provider. Only the supplied
    /// fields are validated and sent.
    ///
    /// # Errors
    ///
    /// Same as [`FederatedServerRequest::build_create_request`], with missing
    /// fields tolerated.
    pub fn build_update_request(provider_id: &str, options: &Value) -> Result<Self> {
        if !validator::is_non_null_object(Some(options)) {
            return Err(AuthClientError::invalid_config(NOT_AN_OBJECT));
        }
        Self::build(provider_id, options, ValidationMode::Partial)
    }

    fn build(provider_id: &str, options: &Value, mode: ValidationMode) -> Result<Self> {
        let kind = ProviderKind::from_provider_id(provider_id).ok_or_else(|| {
            AuthClientError::new(AuthClientErrorCode::InvalidProviderId, UNKNOWN_PROVIDER_ID)
        })?;
        tracing::debug!(provider_id = %provider_id, provider_kind = %kind, mode = ?mode, "dispatching provider request");

        let request = match kind {
            ProviderKind::Saml => {
                SamlProviderConfig::build_server_request(options, mode)?.map(Self::Saml)
            }
            ProviderKind::Oidc => {
                OidcProviderConfig::build_server_request(options, mode)?.map(Self::Oidc)
            }
        };
        request.ok_or_else(|| AuthClientError::invalid_config(NOT_AN_OBJECT))
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Saml(_) => ProviderKind::Saml,
            Self::Oidc(_) => ProviderKind::Oidc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_dispatch_by_resource_name() {
        let oidc = FederatedProviderConfig::from_response_value(json!({
            "name": "projects/p/oauthIdpConfigs/oidc.a",
            "clientId": "c",
            "issuer": "https://issuer.example.com"
        }))
        .unwrap();
        assert_eq!(oidc.kind(), ProviderKind::Oidc);
        assert_eq!(oidc.provider_id(), "oidc.a");

        let saml = FederatedProviderConfig::from_response_value(json!({
            "name": "projects/p/inboundSamlConfigs/saml.b",
            "idpConfig": { "idpEntityId": "e", "ssoUrl": "https://sso" },
            "spConfig": { "spEntityId": "sp" }
        }))
        .unwrap();
        assert_eq!(saml.kind(), ProviderKind::Saml);
        assert_eq!(saml.to_json()["providerId"], json!("saml.b"));
    }

    #[test]
    fn test_response_with_unknown_resource_name_is_internal() {
        let err = FederatedProviderConfig::from_response_value(json!({
            "name": "projects/p/defaultSupportedIdpConfigs/google.com"
        }))
        .unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn test_create_request_dispatch() {
        let request = FederatedServerRequest::build_create_request(&json!({
            "providerId": "oidc.provider",
            "clientId": "CLIENT_ID",
            "issuer": "https://oidc.com/issuer"
        }))
        .unwrap();
        assert_eq!(request.kind(), ProviderKind::Oidc);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "clientId": "CLIENT_ID", "issuer": "https://oidc.com/issuer" })
        );
    }

    #[test]
    fn test_create_request_unknown_provider() {
        let err = FederatedServerRequest::build_create_request(&json!({ "providerId": "google.com" }))
            .unwrap_err();
        assert_eq!(err.code(), AuthClientErrorCode::InvalidProviderId);

        let err = FederatedServerRequest::build_create_request(&json!({})).unwrap_err();
        assert_eq!(err.code(), AuthClientErrorCode::InvalidProviderId);

        let err = FederatedServerRequest::build_create_request(&json!(null)).unwrap_err();
        assert_eq!(err.code(), AuthClientErrorCode::InvalidConfig);
    }

    #[test]
    fn test_update_request_is_partial() {
        let request = FederatedServerRequest::build_update_request(
            "saml.provider",
            &json!({ "enabled": false }),
        )
        .unwrap();
        assert_eq!(request.kind(), ProviderKind::Saml);
        assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "enabled": false }));
    }

    #[test]
    fn test_update_request_still_validates_present_fields() {
        let err = FederatedServerRequest::build_update_request(
            "oidc.provider",
            &json!({ "issuer": "not-a-url" }),
        )
        .unwrap_err();
        assert_eq!(err.code(), AuthClientErrorCode::InvalidConfig);
    }
}
