//! Wire shapes exchanged with the auth management backend.
//!
//! Field names are part of the backend contract. Response types make every
//! field optional and leave presence checks to the config constructors;
//! request types omit unset fields so partial updates only touch what changed.

use serde::{Deserialize, Serialize};

/// Server response describing password sign-in settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordSignInConfigResponse {
    pub allow_password_signup: Option<bool>,
    pub enable_email_link_signin: Option<bool>,
}

/// Password sign-in update sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordSignInConfigServerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_password_signup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_email_link_signin: Option<bool>,
}

/// One IdP signing certificate record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdpCertificate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x509_certificate: Option<String>,
}

impl IdpCertificate {
    pub fn new(certificate: impl Into<String>) -> Self {
        Self {
            x509_certificate: Some(certificate.into()),
        }
    }
}

/// Identity-provider half of a SAML config, in both responses and requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlIdpConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sso_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_request: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_certificates: Option<Vec<IdpCertificate>>,
}

/// Relying-party (service provider) half of a SAML config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlSpConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sp_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_uri: Option<String>,
}

/// Server response for an inbound SAML config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlConfigResponse {
    /// Resource name, `projects/<project>/inboundSamlConfigs/<providerId>`.
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub display_name: Option<String>,
    pub idp_config: Option<SamlIdpConfig>,
    pub sp_config: Option<SamlSpConfig>,
}

/// SAML create/update body sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlConfigServerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_config: Option<SamlIdpConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sp_config: Option<SamlSpConfig>,
}

/// Server response for an OAuth IdP (OIDC) config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OidcConfigResponse {
    /// Resource name, `projects/<project>/oauthIdpConfigs/<providerId>`.
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub display_name: Option<String>,
    pub issuer: Option<String>,
    pub client_id: Option<String>,
}

/// OIDC create/update body sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OidcConfigServerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

// Client option values decoded after validation. `providerId` is not carried:
// it only selects the provider and is never part of a request body.

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PasswordSignInOptions {
    pub enabled: Option<bool>,
    pub password_required: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SamlProviderOptions {
    pub idp_entity_id: Option<String>,
    #[serde(rename = "ssoURL")]
    pub sso_url: Option<String>,
    pub x509_certificates: Option<Vec<String>>,
    pub rp_entity_id: Option<String>,
    #[serde(rename = "callbackURL")]
    pub callback_url: Option<String>,
    pub enable_request_signing: Option<bool>,
    pub enabled: Option<bool>,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OidcProviderOptions {
    pub client_id: Option<String>,
    pub issuer: Option<String>,
    pub enabled: Option<bool>,
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_saml_response_field_names() {
        let response: SamlConfigResponse = serde_json::from_value(json!({
            "name": "projects/p/inboundSamlConfigs/saml.a",
            "idpConfig": {
                "idpEntityId": "idp",
                "ssoUrl": "https://sso",
                "signRequest": true,
                "idpCertificates": [{ "x509Certificate": "CERT" }]
            },
            "spConfig": { "spEntityId": "sp", "callbackUri": "https://cb" }
        }))
        .unwrap();

        let idp = response.idp_config.unwrap();
        assert_eq!(idp.sso_url.as_deref(), Some("https://sso"));
        assert_eq!(idp.idp_certificates.unwrap()[0].x509_certificate.as_deref(), Some("CERT"));
        assert_eq!(response.sp_config.unwrap().callback_uri.as_deref(), Some("https://cb"));
    }

    #[test]
    fn test_empty_request_serializes_to_empty_object() {
        assert_eq!(serde_json::to_value(SamlConfigServerRequest::default()).unwrap(), json!({}));
        assert_eq!(serde_json::to_value(OidcConfigServerRequest::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_saml_options_use_client_field_names() {
        let options: SamlProviderOptions = serde_json::from_value(json!({
            "providerId": "saml.a",
            "ssoURL": "https://sso",
            "callbackURL": "https://cb",
            "x509Certificates": ["A"]
        }))
        .unwrap();

        assert_eq!(options.sso_url.as_deref(), Some("https://sso"));
        assert_eq!(options.callback_url.as_deref(), Some("https://cb"));
        assert_eq!(options.x509_certificates, Some(vec!["A".to_string()]));
    }
}
