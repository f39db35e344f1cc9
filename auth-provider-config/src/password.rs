//! Password sign-in settings.

use crate::error::{internal_assert, AuthClientError, AuthClientErrorCode, Result};
use crate::models::{
    PasswordSignInConfigResponse, PasswordSignInConfigServerRequest, PasswordSignInOptions,
};
use crate::provider::{decode_options, reject_unknown_keys, require_object, ServerConfig};
use crate::validator;
use serde_json::{json, Value};

const CONFIG_NAME: &str = "PasswordSignInConfig";
const VALID_KEYS: &[&str] = &["enabled", "passwordRequired"];

/// Whether password sign-in is active and whether it needs a password
/// (as opposed to an email link).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordSignInConfig {
    enabled: bool,
    password_required: bool,
}

impl PasswordSignInConfig {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn password_required(&self) -> bool {
        self.password_required
    }

    /// Validate a client options object.
    ///
    /// # Errors
    ///
    /// Fails with `invalid-argument` when `options` is not an object, carries
    /// an unknown key, or a known key is not a boolean.
    pub fn validate(options: &Value) -> Result<()> {
        let map = require_object(
            options,
            AuthClientErrorCode::InvalidArgument,
            &format!("\"{}\" must be a non-null object.", CONFIG_NAME),
        )?;
        reject_unknown_keys(map, VALID_KEYS, AuthClientErrorCode::InvalidArgument, CONFIG_NAME)?;

        for key in VALID_KEYS {
            if map.contains_key(*key) && !validator::is_boolean(map.get(*key)) {
                return Err(AuthClientError::invalid_argument(format!(
                    "\"{}.{}\" must be a boolean.",
                    CONFIG_NAME, key
                )));
            }
        }
        Ok(())
    }

    /// Convert client options into a backend update. Absent options stay absent.
    ///
    /// # Errors
    ///
    /// Returns the [`PasswordSignInConfig::validate`] error for malformed options.
    pub fn build_server_request(options: &Value) -> Result<PasswordSignInConfigServerRequest> {
        Self::validate(options)?;
        let options: PasswordSignInOptions =
            decode_options(options, AuthClientErrorCode::InvalidArgument, CONFIG_NAME)?;

        Ok(PasswordSignInConfigServerRequest {
            allow_password_signup: options.enabled,
            enable_email_link_signin: options.password_required.map(|required| !required),
        })
    }
}

impl ServerConfig for PasswordSignInConfig {
    type Response = PasswordSignInConfigResponse;

    const CONTEXT: &'static str = "password sign-in configuration";

    fn from_response(response: &PasswordSignInConfigResponse) -> Result<Self> {
        let enabled = response.allow_password_signup.ok_or_else(|| {
            internal_assert(
                Self::CONTEXT,
                "Invalid password sign-in configuration response",
            )
        })?;

        Ok(Self {
            enabled,
            password_required: !response.enable_email_link_signin.unwrap_or(false),
        })
    }

    fn to_json(&self) -> Value {
        json!({
            "enabled": self.enabled,
            "passwordRequired": self.password_required,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response() {
        let config = PasswordSignInConfig::from_response(&PasswordSignInConfigResponse {
            allow_password_signup: Some(true),
            enable_email_link_signin: Some(false),
        })
        .unwrap();

        assert!(config.enabled());
        assert!(config.password_required());
        assert_eq!(config.to_json(), json!({ "enabled": true, "passwordRequired": true }));
    }

    #[test]
    fn test_missing_link_signin_means_password_required() {
        let config = PasswordSignInConfig::from_response_value(json!({
            "allowPasswordSignup": false
        }))
        .unwrap();

        assert!(!config.enabled());
        assert!(config.password_required());
    }

    #[test]
    fn test_missing_allow_password_signup_is_internal() {
        let err = PasswordSignInConfig::from_response_value(json!({
            "enableEmailLinkSignin": true
        }))
        .unwrap_err();

        assert!(err.is_internal());
        assert!(err.message().starts_with("INTERNAL ASSERT FAILED:"));
    }

    #[test]
    fn test_build_server_request_inverts_password_required() {
        let request = PasswordSignInConfig::build_server_request(&json!({
            "enabled": true,
            "passwordRequired": false
        }))
        .unwrap();

        assert_eq!(request.allow_password_signup, Some(true));
        assert_eq!(request.enable_email_link_signin, Some(true));
    }

    #[test]
    fn test_build_server_request_is_partial() {
        let request =
            PasswordSignInConfig::build_server_request(&json!({ "passwordRequired": true }))
                .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "enableEmailLinkSignin": false })
        );
        assert_eq!(
            serde_json::to_value(PasswordSignInConfig::build_server_request(&json!({})).unwrap())
                .unwrap(),
            json!({})
        );
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        for options in [
            json!(null),
            json!("enabled"),
            json!([true]),
            json!({ "enabled": "yes" }),
            json!({ "passwordRequired": null }),
            json!({ "enabled": true, "unknown": true }),
        ] {
            let err = PasswordSignInConfig::validate(&options).unwrap_err();
            assert_eq!(err.code(), AuthClientErrorCode::InvalidArgument, "{}", options);
        }
    }
}
