//! Identity provider configuration translation for the auth administration client
//!
//! Sits between the client-facing provider configuration objects and the wire
//! format of the auth management backend. For each provider kind it:
//! - parses a server response into an immutable, fully populated config
//! - validates client options against a strict schema (unknown keys rejected)
//! - converts validated options into the exact backend request body
//! - projects a config back to a plain client-facing object
//!
//! # Provider Kinds
//!
//! - **Password sign-in**: enabled / password-required toggles
//! - **SAML**: relying-party and IdP settings plus signing certificates,
//!   ids prefixed `saml.`
//! - **OIDC**: issuer and client id, ids prefixed `oidc.`
//!
//! Nothing here performs I/O. Transport, retries and persistence belong to the
//! callers.
//!
//! # Example
//!
//! ```rust
//! use auth_provider_config::{FederatedConfig, SamlProviderConfig, ValidationMode};
//! use serde_json::json;
//!
//! let options = json!({
//!     "providerId": "saml.my-provider",
//!     "idpEntityId": "IDP_ENTITY_ID",
//!     "ssoURL": "https://idp.example.com/login",
//!     "x509Certificates": ["CERT"],
//!     "rpEntityId": "RP_ENTITY_ID",
//!     "callbackURL": "https://app.example.com/__/auth/handler",
//! });
//!
//! let request = SamlProviderConfig::build_server_request(&options, ValidationMode::Strict)?
//!     .expect("options carry a providerId");
//! assert!(request.idp_config.is_some());
//! # Ok::<(), auth_provider_config::AuthClientError>(())
//! ```

pub mod config;
pub mod error;
pub mod federated;
pub mod models;
pub mod oidc;
pub mod password;
pub mod provider;
pub mod saml;
pub mod validator;

pub use config::*;
pub use error::*;
pub use federated::*;
pub use models::*;
pub use oidc::*;
pub use password::*;
pub use provider::{provider_id_from_resource_name, FederatedConfig, ProviderKind, ServerConfig};
pub use saml::*;
