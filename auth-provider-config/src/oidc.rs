//! OIDC federation provider config.

use crate::config::ValidationMode;
use crate::error::{internal_assert, AuthClientError, AuthClientErrorCode, Result};
use crate::models::{OidcConfigResponse, OidcConfigServerRequest, OidcProviderOptions};
use crate::provider::{
    decode_options, insert_optional, is_request_for, must_check, provider_id_from_resource_name,
    reject_unknown_keys, require_object, validate_enabled_and_display_name, validate_provider_id,
    FederatedConfig, ProviderKind, ServerConfig,
};
use crate::validator;
use serde_json::{json, Value};

const CONFIG_NAME: &str = "OIDC config";
const VALID_KEYS: &[&str] = &["enabled", "displayName", "providerId", "clientId", "issuer"];

/// An OAuth IdP (OIDC) provider as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OidcProviderConfig {
    provider_id: String,
    client_id: String,
    issuer: String,
    enabled: bool,
    display_name: Option<String>,
}

impl OidcProviderConfig {
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

impl ServerConfig for OidcProviderConfig {
    type Response = OidcConfigResponse;

    const CONTEXT: &'static str = "OIDC configuration";

    fn from_response(response: &OidcConfigResponse) -> Result<Self> {
        let invalid = || internal_assert(Self::CONTEXT, "Invalid OIDC configuration response");

        let issuer = response.issuer.as_deref().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        let client_id = response
            .client_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(invalid)?;
        let provider_id = response
            .name
            .as_deref()
            .and_then(|name| provider_id_from_resource_name(Self::KIND, name))
            .ok_or_else(invalid)?;

        Ok(Self {
            provider_id,
            client_id: client_id.to_string(),
            issuer: issuer.to_string(),
            enabled: response.enabled.unwrap_or(false),
            display_name: response.display_name.clone(),
        })
    }

    fn to_json(&self) -> Value {
        let mut plain = json!({
            "enabled": self.enabled,
            "providerId": self.provider_id,
            "issuer": self.issuer,
            "clientId": self.client_id,
        });
        if let Some(map) = plain.as_object_mut() {
            insert_optional(map, "displayName", self.display_name.as_deref());
        }
        plain
    }
}

impl FederatedConfig for OidcProviderConfig {
    type ServerRequest = OidcConfigServerRequest;

    const KIND: ProviderKind = ProviderKind::Oidc;

    fn provider_id(&self) -> &str {
        &self.provider_id
    }

    fn validate(options: &Value, mode: ValidationMode) -> Result<()> {
        let config_type = Self::KIND.config_type();
        let map = require_object(
            options,
            AuthClientErrorCode::InvalidConfig,
            &format!("\"{}\" must be a valid non-null object.", config_type),
        )?;
        reject_unknown_keys(map, VALID_KEYS, AuthClientErrorCode::InvalidConfig, CONFIG_NAME)?;

        validate_provider_id(Self::KIND, map, mode)?;

        if must_check(map, "clientId", mode) && !validator::is_non_empty_string(map.get("clientId")) {
            let code = if validator::is_truthy(map.get("clientId")) {
                AuthClientErrorCode::InvalidOauthClientId
            } else {
                AuthClientErrorCode::MissingOauthClientId
            };
            return Err(AuthClientError::new(
                code,
                format!("\"{}.clientId\" must be a valid non-empty string.", config_type),
            ));
        }
        if must_check(map, "issuer", mode) && !validator::is_url(map.get("issuer")) {
            let code = if validator::is_truthy(map.get("issuer")) {
                AuthClientErrorCode::InvalidConfig
            } else {
                AuthClientErrorCode::MissingIssuer
            };
            return Err(AuthClientError::new(
                code,
                format!("\"{}.issuer\" must be a valid URL string.", config_type),
            ));
        }
        validate_enabled_and_display_name(Self::KIND, map)
    }

    fn build_server_request(
        options: &Value,
        mode: ValidationMode,
    ) -> Result<Option<OidcConfigServerRequest>> {
        if !is_request_for(Self::KIND, options, mode) {
            return Ok(None);
        }
        Self::validate(options, mode)?;
        let options: OidcProviderOptions =
            decode_options(options, AuthClientErrorCode::InvalidConfig, CONFIG_NAME)?;

        tracing::debug!(mode = ?mode, "built OIDC server request");

        Ok(Some(OidcConfigServerRequest {
            enabled: options.enabled,
            display_name: options.display_name,
            issuer: options.issuer,
            client_id: options.client_id,
        }))
    }
}
