//! Shared shape of the provider configuration types.
//!
//! Every config type parses a server response, validates client options,
//! builds a server request and projects itself back to a plain object. The
//! federated kinds (SAML, OIDC) additionally share provider-id handling, which
//! lives here parameterized by [`ProviderKind`].

use crate::config::ValidationMode;
use crate::error::{internal_assert, AuthClientError, AuthClientErrorCode, Result};
use crate::validator;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

lazy_static! {
    static ref SAML_RESOURCE_NAME: Regex = Regex::new(&ProviderKind::Saml.resource_name_source())
        .expect("valid SAML resource pattern");
    static ref OIDC_RESOURCE_NAME: Regex = Regex::new(&ProviderKind::Oidc.resource_name_source())
        .expect("valid OIDC resource pattern");
}

/// Federated identity provider kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Saml,
    Oidc,
}

impl ProviderKind {
    /// Required provider id prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            ProviderKind::Saml => "saml.",
            ProviderKind::Oidc => "oidc.",
        }
    }

    /// Backend resource collection the provider configs live under.
    pub fn collection(self) -> &'static str {
        match self {
            ProviderKind::Saml => "inboundSamlConfigs",
            ProviderKind::Oidc => "oauthIdpConfigs",
        }
    }

    /// Client-facing config type name used in error messages.
    pub fn config_type(self) -> &'static str {
        match self {
            ProviderKind::Saml => "SAMLAuthProviderConfig",
            ProviderKind::Oidc => "OIDCAuthProviderConfig",
        }
    }

    /// `/<collection>/(<prefix>...)` anchored at the end of the resource name.
    fn resource_name_source(self) -> String {
        format!(
            "/{}/({}.*)$",
            regex::escape(self.collection()),
            regex::escape(self.prefix())
        )
    }

    fn resource_name_pattern(self) -> &'static Regex {
        match self {
            ProviderKind::Saml => &*SAML_RESOURCE_NAME,
            ProviderKind::Oidc => &*OIDC_RESOURCE_NAME,
        }
    }

    /// True iff `provider_id` is non-empty and carries this kind's prefix.
    pub fn is_provider_id(self, provider_id: &str) -> bool {
        !provider_id.is_empty() && provider_id.starts_with(self.prefix())
    }

    pub fn from_provider_id(provider_id: &str) -> Option<ProviderKind> {
        [ProviderKind::Saml, ProviderKind::Oidc]
            .into_iter()
            .find(|kind| kind.is_provider_id(provider_id))
    }

    pub fn from_resource_name(resource_name: &str) -> Option<ProviderKind> {
        [ProviderKind::Saml, ProviderKind::Oidc]
            .into_iter()
            .find(|kind| provider_id_from_resource_name(*kind, resource_name).is_some())
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Saml => write!(f, "SAML"),
            ProviderKind::Oidc => write!(f, "OIDC"),
        }
    }
}

/// Extract the provider id from a backend resource name.
///
/// `projects/p1/inboundSamlConfigs/saml.idp` yields `saml.idp` for
/// [`ProviderKind::Saml`]; names from the other collection, or whose trailing
/// segment lacks the kind's prefix, yield `None`.
pub fn provider_id_from_resource_name(kind: ProviderKind, resource_name: &str) -> Option<String> {
    kind.resource_name_pattern()
        .captures(resource_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Operations common to every provider configuration type.
pub trait ServerConfig: Sized {
    /// Typed backend response this config is built from.
    type Response: DeserializeOwned;

    /// Name used when reporting malformed responses.
    const CONTEXT: &'static str;

    /// Build from an already decoded server response.
    ///
    /// # Errors
    ///
    /// Returns an `internal-error` when the response breaks the backend contract.
    fn from_response(response: &Self::Response) -> Result<Self>;

    /// Plain client-facing object. Owned, so callers cannot reach internal state.
    fn to_json(&self) -> Value;

    /// Build from a raw JSON server response.
    ///
    /// # Errors
    ///
    /// Returns an `internal-error` when the response cannot be decoded or
    /// breaks the backend contract.
    fn from_response_value(response: Value) -> Result<Self> {
        let response: Self::Response = serde_json::from_value(response).map_err(|e| {
            internal_assert(
                Self::CONTEXT,
                &format!("Invalid {} response: {}", Self::CONTEXT, e),
            )
        })?;
        Self::from_response(&response)
    }
}

/// Operations shared by SAML and OIDC provider configs.
pub trait FederatedConfig: ServerConfig {
    /// Backend request body produced from client options.
    type ServerRequest: Serialize;

    const KIND: ProviderKind;

    fn provider_id(&self) -> &str;

    /// Validate a client options object.
    ///
    /// # Errors
    ///
    /// Returns a user-correctable error naming the first offending field.
    fn validate(options: &Value, mode: ValidationMode) -> Result<()>;

    /// Convert client options into a backend request body.
    ///
    /// Returns `Ok(None)` when the options are not a request for this kind at
    /// all: not an object, or in strict mode lacking a provider id.
    ///
    /// # Errors
    ///
    /// Returns the validation error when the options are a request for this
    /// kind but are malformed.
    fn build_server_request(
        options: &Value,
        mode: ValidationMode,
    ) -> Result<Option<Self::ServerRequest>>;

    fn is_provider_id(provider_id: &str) -> bool {
        Self::KIND.is_provider_id(provider_id)
    }
}

/// Whether `options` should be turned into a request for a federated kind.
pub(crate) fn is_request_for(kind: ProviderKind, options: &Value, mode: ValidationMode) -> bool {
    let Some(map) = options.as_object() else {
        tracing::debug!(provider_kind = %kind, "options are not an object, not a provider request");
        return false;
    };
    if validator::is_truthy(map.get("providerId")) || mode.ignores_missing_fields() {
        return true;
    }
    tracing::debug!(provider_kind = %kind, "no providerId in strict mode, not a provider request");
    false
}

/// Require a non-null object, failing with `code` otherwise.
pub(crate) fn require_object<'a>(
    options: &'a Value,
    code: AuthClientErrorCode,
    message: &str,
) -> Result<&'a Map<String, Value>> {
    validator::as_object(Some(options)).ok_or_else(|| AuthClientError::new(code, message))
}

/// Reject any key that is not in `allowed`.
pub(crate) fn reject_unknown_keys(
    options: &Map<String, Value>,
    allowed: &[&str],
    code: AuthClientErrorCode,
    config_name: &str,
) -> Result<()> {
    match options.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(AuthClientError::new(
            code,
            format!("\"{}\" is not a valid {} parameter.", key, config_name),
        )),
        None => Ok(()),
    }
}

/// True when a normally required field must be checked: it is present, or
/// the mode does not tolerate its absence.
pub(crate) fn must_check(options: &Map<String, Value>, key: &str, mode: ValidationMode) -> bool {
    !(mode.ignores_missing_fields() && !options.contains_key(key))
}

pub(crate) fn validate_provider_id(
    kind: ProviderKind,
    options: &Map<String, Value>,
    mode: ValidationMode,
) -> Result<()> {
    let provider_id = options.get("providerId");
    let message = format!(
        "\"{}.providerId\" must be a valid non-empty string prefixed with \"{}\".",
        kind.config_type(),
        kind.prefix()
    );

    match provider_id {
        Some(Value::String(id)) if !id.is_empty() => {
            if kind.is_provider_id(id) {
                Ok(())
            } else {
                Err(AuthClientError::new(AuthClientErrorCode::InvalidProviderId, message))
            }
        }
        _ if mode.ignores_missing_fields() => Ok(()),
        _ => {
            let code = if validator::is_truthy(provider_id) {
                AuthClientErrorCode::InvalidProviderId
            } else {
                AuthClientErrorCode::MissingProviderId
            };
            Err(AuthClientError::new(code, message))
        }
    }
}

/// Checks for `enabled` and `displayName`, present on both federated kinds.
pub(crate) fn validate_enabled_and_display_name(
    kind: ProviderKind,
    options: &Map<String, Value>,
) -> Result<()> {
    if options.contains_key("enabled") && !validator::is_boolean(options.get("enabled")) {
        return Err(AuthClientError::invalid_config(format!(
            "\"{}.enabled\" must be a boolean.",
            kind.config_type()
        )));
    }
    if options.contains_key("displayName") && !validator::is_string(options.get("displayName")) {
        return Err(AuthClientError::invalid_config(format!(
            "\"{}.displayName\" must be a valid string.",
            kind.config_type()
        )));
    }
    Ok(())
}

/// Decode already validated options into their typed form.
pub(crate) fn decode_options<T: DeserializeOwned>(
    options: &Value,
    code: AuthClientErrorCode,
    config_name: &str,
) -> Result<T> {
    serde_json::from_value(options.clone()).map_err(|e| {
        AuthClientError::new(code, format!("Invalid {} options: {}", config_name, e))
    })
}

/// Insert `value` under `key` only when it is set.
pub(crate) fn insert_optional(map: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
}
