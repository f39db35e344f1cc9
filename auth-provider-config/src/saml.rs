//! SAML federation provider config.

use crate::config::ValidationMode;
use crate::error::{internal_assert, AuthClientError, AuthClientErrorCode, Result};
use crate::models::{
    IdpCertificate, SamlConfigResponse, SamlConfigServerRequest, SamlIdpConfig,
    SamlProviderOptions, SamlSpConfig,
};
use crate::provider::{
    decode_options, insert_optional, is_request_for, must_check, provider_id_from_resource_name,
    reject_unknown_keys, require_object, validate_enabled_and_display_name, validate_provider_id,
    FederatedConfig, ProviderKind, ServerConfig,
};
use crate::validator;
use serde_json::{json, Value};

const CONFIG_NAME: &str = "SAML config";
const INVALID_RESPONSE: &str = "Invalid SAML configuration response";
const VALID_KEYS: &[&str] = &[
    "enabled",
    "displayName",
    "providerId",
    "idpEntityId",
    "ssoURL",
    "x509Certificates",
    "rpEntityId",
    "callbackURL",
    "enableRequestSigning",
];

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// An inbound SAML identity provider as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamlProviderConfig {
    provider_id: String,
    rp_entity_id: String,
    callback_url: Option<String>,
    idp_entity_id: String,
    sso_url: String,
    enable_request_signing: bool,
    x509_certificates: Vec<String>,
    enabled: bool,
    display_name: Option<String>,
}

impl SamlProviderConfig {
    pub fn rp_entity_id(&self) -> &str {
        &self.rp_entity_id
    }

    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }

    pub fn idp_entity_id(&self) -> &str {
        &self.idp_entity_id
    }

    pub fn sso_url(&self) -> &str {
        &self.sso_url
    }

    pub fn enable_request_signing(&self) -> bool {
        self.enable_request_signing
    }

    /// IdP signing certificates in response order.
    pub fn x509_certificates(&self) -> &[String] {
        &self.x509_certificates
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

impl ServerConfig for SamlProviderConfig {
    type Response = SamlConfigResponse;

    const CONTEXT: &'static str = "SAML configuration";

    fn from_response(response: &SamlConfigResponse) -> Result<Self> {
        let invalid = || internal_assert(Self::CONTEXT, INVALID_RESPONSE);

        let idp = response.idp_config.as_ref().ok_or_else(invalid)?;
        let idp_entity_id = non_empty(&idp.idp_entity_id).ok_or_else(invalid)?;
        let sso_url = non_empty(&idp.sso_url).ok_or_else(invalid)?;
        let sp = response.sp_config.as_ref().ok_or_else(invalid)?;
        let rp_entity_id = non_empty(&sp.sp_entity_id).ok_or_else(invalid)?;
        let provider_id = non_empty(&response.name)
            .and_then(|name| provider_id_from_resource_name(Self::KIND, name))
            .ok_or_else(invalid)?;

        // Entries without a certificate are skipped rather than rejected.
        let x509_certificates = idp
            .idp_certificates
            .iter()
            .flatten()
            .filter_map(|cert| match non_empty(&cert.x509_certificate) {
                Some(pem) => Some(pem.to_string()),
                None => {
                    tracing::warn!(
                        provider_id = %provider_id,
                        "skipping IdP certificate entry without x509Certificate"
                    );
                    None
                }
            })
            .collect();

        Ok(Self {
            rp_entity_id: rp_entity_id.to_string(),
            callback_url: sp.callback_uri.clone(),
            idp_entity_id: idp_entity_id.to_string(),
            sso_url: sso_url.to_string(),
            enable_request_signing: idp.sign_request.unwrap_or(false),
            x509_certificates,
            enabled: response.enabled.unwrap_or(false),
            display_name: response.display_name.clone(),
            provider_id,
        })
    }

    fn to_json(&self) -> Value {
        let mut plain = json!({
            "enabled": self.enabled,
            "providerId": self.provider_id,
            "idpEntityId": self.idp_entity_id,
            "ssoURL": self.sso_url,
            "x509Certificates": self.x509_certificates.clone(),
            "rpEntityId": self.rp_entity_id,
            "enableRequestSigning": self.enable_request_signing,
        });
        if let Some(map) = plain.as_object_mut() {
            insert_optional(map, "displayName", self.display_name.as_deref());
            insert_optional(map, "callbackURL", self.callback_url.as_deref());
        }
        plain
    }
}

impl FederatedConfig for SamlProviderConfig {
    type ServerRequest = SamlConfigServerRequest;

    const KIND: ProviderKind = ProviderKind::Saml;

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

        if must_check(map, "idpEntityId", mode)
            && !validator::is_non_empty_string(map.get("idpEntityId"))
        {
            return Err(AuthClientError::invalid_config(format!(
                "\"{}.idpEntityId\" must be a valid non-empty string.",
                config_type
            )));
        }
        if must_check(map, "ssoURL", mode) && !validator::is_url(map.get("ssoURL")) {
            return Err(AuthClientError::invalid_config(format!(
                "\"{}.ssoURL\" must be a valid URL string.",
                config_type
            )));
        }
        if must_check(map, "rpEntityId", mode)
            && !validator::is_non_empty_string(map.get("rpEntityId"))
        {
            let code = if validator::is_truthy(map.get("rpEntityId")) {
                AuthClientErrorCode::InvalidConfig
            } else {
                AuthClientErrorCode::MissingSamlRelyingPartyConfig
            };
            return Err(AuthClientError::new(
                code,
                format!("\"{}.rpEntityId\" must be a valid non-empty string.", config_type),
            ));
        }
        if must_check(map, "callbackURL", mode) && !validator::is_url(map.get("callbackURL")) {
            return Err(AuthClientError::invalid_config(format!(
                "\"{}.callbackURL\" must be a valid URL string.",
                config_type
            )));
        }

        let invalid_certificates = || {
            AuthClientError::invalid_config(format!(
                "\"{}.x509Certificates\" must be a valid array of X509 certificate strings.",
                config_type
            ))
        };
        if must_check(map, "x509Certificates", mode)
            && !validator::is_array(map.get("x509Certificates"))
        {
            return Err(invalid_certificates());
        }
        if let Some(Value::Array(certificates)) = map.get("x509Certificates") {
            if !certificates.iter().all(|cert| validator::is_non_empty_string(Some(cert))) {
                return Err(invalid_certificates());
            }
        }

        if map.contains_key("enableRequestSigning")
            && !validator::is_boolean(map.get("enableRequestSigning"))
        {
            return Err(AuthClientError::invalid_config(format!(
                "\"{}.enableRequestSigning\" must be a boolean.",
                config_type
            )));
        }
        validate_enabled_and_display_name(Self::KIND, map)
    }

    fn build_server_request(
        options: &Value,
        mode: ValidationMode,
    ) -> Result<Option<SamlConfigServerRequest>> {
        if !is_request_for(Self::KIND, options, mode) {
            return Ok(None);
        }
        Self::validate(options, mode)?;
        let options: SamlProviderOptions =
            decode_options(options, AuthClientErrorCode::InvalidConfig, CONFIG_NAME)?;

        // Validation guarantees present strings are non-empty, so presence is
        // enough to decide which sub-objects to send.
        let idp_config = if options.idp_entity_id.is_some()
            || options.sso_url.is_some()
            || options.x509_certificates.is_some()
        {
            Some(SamlIdpConfig {
                idp_entity_id: options.idp_entity_id,
                sso_url: options.sso_url,
                sign_request: options.enable_request_signing,
                idp_certificates: options
                    .x509_certificates
                    .map(|certs| certs.into_iter().map(IdpCertificate::new).collect()),
            })
        } else {
            None
        };

        let sp_config = if options.rp_entity_id.is_some() || options.callback_url.is_some() {
            Some(SamlSpConfig {
                sp_entity_id: options.rp_entity_id,
                callback_uri: options.callback_url,
            })
        } else {
            None
        };

        tracing::debug!(
            mode = ?mode,
            has_idp_config = idp_config.is_some(),
            has_sp_config = sp_config.is_some(),
            "built SAML server request"
        );

        Ok(Some(SamlConfigServerRequest {
            enabled: options.enabled,
            display_name: options.display_name,
            idp_config,
            sp_config,
        }))
    }
}
