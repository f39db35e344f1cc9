//! Property tests for the provider config invariants.

use auth_provider_config::{
    AuthClientErrorCode, FederatedConfig, OidcProviderConfig, PasswordSignInConfig,
    SamlProviderConfig, ServerConfig, ValidationMode,
};
use proptest::prelude::*;
use serde_json::{json, Value};

const SAML_KEYS: &[&str] = &[
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
const OIDC_KEYS: &[&str] = &["enabled", "displayName", "providerId", "clientId", "issuer"];
const PASSWORD_KEYS: &[&str] = &["enabled", "passwordRequired"];

fn json_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z.:/]{0,12}".prop_map(Value::String),
    ]
}

fn unknown_key(known: &'static [&'static str]) -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,16}".prop_filter("must not be a recognized key", move |key| {
        !known.contains(&key.as_str())
    })
}

fn certificates() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z0-9+/=]{1,24}", 0..5)
}

proptest! {
    #[test]
    fn unknown_keys_are_always_rejected(
        saml_key in unknown_key(SAML_KEYS),
        oidc_key in unknown_key(OIDC_KEYS),
        password_key in unknown_key(PASSWORD_KEYS),
        value in json_scalar(),
        partial in any::<bool>(),
    ) {
        let mode = ValidationMode::from(partial);

        let mut saml = json!({ "providerId": "saml.provider", "enabled": true });
        saml[saml_key.as_str()] = value.clone();
        let err = SamlProviderConfig::validate(&saml, mode).unwrap_err();
        prop_assert_eq!(err.code(), AuthClientErrorCode::InvalidConfig);

        let mut oidc = json!({ "providerId": "oidc.provider" });
        oidc[oidc_key.as_str()] = value.clone();
        let err = OidcProviderConfig::validate(&oidc, mode).unwrap_err();
        prop_assert_eq!(err.code(), AuthClientErrorCode::InvalidConfig);

        let mut password = json!({ "enabled": true });
        password[password_key.as_str()] = value;
        let err = PasswordSignInConfig::validate(&password).unwrap_err();
        prop_assert_eq!(err.code(), AuthClientErrorCode::InvalidArgument);
    }

    #[test]
    fn is_provider_id_matches_prefix(suffix in "[a-zA-Z0-9._-]{0,16}", other in "[a-z]{1,8}") {
        let saml_id = format!("saml.{}", suffix);
        let oidc_id = format!("oidc.{}", suffix);
        prop_assert!(SamlProviderConfig::is_provider_id(&saml_id));
        prop_assert!(OidcProviderConfig::is_provider_id(&oidc_id));
        prop_assert!(!SamlProviderConfig::is_provider_id(&oidc_id));
        prop_assert!(!OidcProviderConfig::is_provider_id(&saml_id));

        let plain = format!("{}{}", other, suffix);
        prop_assert_eq!(SamlProviderConfig::is_provider_id(&plain), plain.starts_with("saml."));
        prop_assert_eq!(OidcProviderConfig::is_provider_id(&plain), plain.starts_with("oidc."));
    }

    #[test]
    fn password_response_round_trips(allow in any::<bool>(), link in proptest::option::of(any::<bool>())) {
        let mut response = json!({ "allowPasswordSignup": allow });
        if let Some(link) = link {
            response["enableEmailLinkSignin"] = json!(link);
        }

        let config = PasswordSignInConfig::from_response_value(response).unwrap();
        prop_assert_eq!(config.enabled(), allow);
        prop_assert_eq!(config.password_required(), !link.unwrap_or(false));

        // The plain object is a valid update that reproduces the response flags.
        let request = PasswordSignInConfig::build_server_request(&config.to_json()).unwrap();
        prop_assert_eq!(request.allow_password_signup, Some(allow));
        prop_assert_eq!(request.enable_email_link_signin, Some(link.unwrap_or(false)));
    }

    #[test]
    fn saml_response_round_trips(
        id in "[a-z0-9-]{1,12}",
        certs in certificates(),
        enabled in proptest::option::of(any::<bool>()),
        signing in proptest::option::of(any::<bool>()),
    ) {
        let cert_entries: Vec<Value> =
            certs.iter().map(|c| json!({ "x509Certificate": c })).collect();
        let mut response = json!({
            "name": format!("projects/p/inboundSamlConfigs/saml.{}", id),
            "idpConfig": {
                "idpEntityId": "IDP",
                "ssoUrl": "https://sso.example.com/login",
                "idpCertificates": cert_entries
            },
            "spConfig": { "spEntityId": "RP" }
        });
        if let Some(enabled) = enabled {
            response["enabled"] = json!(enabled);
        }
        if let Some(signing) = signing {
            response["idpConfig"]["signRequest"] = json!(signing);
        }

        let config = SamlProviderConfig::from_response_value(response).unwrap();
        let plain = config.to_json();
        prop_assert_eq!(plain["providerId"].clone(), json!(format!("saml.{}", id)));
        prop_assert_eq!(plain["x509Certificates"].clone(), json!(certs));
        prop_assert_eq!(plain["enabled"].clone(), json!(enabled.unwrap_or(false)));
        prop_assert_eq!(plain["enableRequestSigning"].clone(), json!(signing.unwrap_or(false)));
    }

    #[test]
    fn non_objects_are_never_requests(value in json_scalar(), partial in any::<bool>()) {
        let mode = ValidationMode::from(partial);
        prop_assert!(SamlProviderConfig::build_server_request(&value, mode).unwrap().is_none());
        prop_assert!(OidcProviderConfig::build_server_request(&value, mode).unwrap().is_none());
    }
}
