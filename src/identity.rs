//! Third-party Identity Sign-in
//!
//! The page hosts the identity provider's widget and exposes a single
//! hook returning the credential JWT. The client decodes the payload
//! locally (signature verification is the service's job) and runs the
//! check-existence-then-branch protocol: validate the email, then either
//! self-register a first-time user or log in an existing one.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::api::{self, ApiClient, ApiResult};

#[wasm_bindgen]
extern "C" {
    /// Page-provided hook that resolves with the provider credential JWT.
    #[wasm_bindgen(js_namespace = ["window", "__identity"], js_name = requestCredential, catch)]
    async fn request_credential() -> Result<JsValue, JsValue>;
}

/// Claims we need from the credential payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdentityProfile {
    pub email: String,
    #[serde(default)]
    pub name: String,
    /// Provider's stable subject id, sent to the service as `google_id`
    pub sub: String,
}

/// Ask the page for a fresh credential.
pub async fn request_provider_credential() -> Result<String, String> {
    let value = request_credential()
        .await
        .map_err(|err| format!("identity provider rejected the request: {err:?}"))?;
    value
        .as_string()
        .ok_or_else(|| "identity provider returned no credential".to_string())
}

/// Decode the payload segment of the credential JWT.
pub fn decode_credential(credential: &str) -> Result<IdentityProfile, String> {
    let payload = credential
        .split('.')
        .nth(1)
        .ok_or_else(|| "credential is not a JWT".to_string())?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|err| format!("bad credential encoding: {err}"))?;
    serde_json::from_slice(&bytes).map_err(|err| format!("bad credential payload: {err}"))
}

/// Sequential two-request sign-in. Returns the bearer token.
pub async fn sign_in(api: &ApiClient, profile: &IdentityProfile) -> ApiResult<String> {
    if api::user::email_exists(api, &profile.email).await? {
        api::user::login_with_identity(api, &profile.email, &profile.sub).await
    } else {
        api::user::register_with_identity(api, &profile.name, &profile.email, &profile.sub).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn decodes_profile_claims() {
        let jwt = jwt_with_payload(r#"{"email":"a@b.com","name":"Ada","sub":"prov-123","iat":1}"#);
        let profile = decode_credential(&jwt).unwrap();
        assert_eq!(profile.email, "a@b.com");
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.sub, "prov-123");
    }

    #[test]
    fn missing_name_defaults_to_empty() {
        let jwt = jwt_with_payload(r#"{"email":"a@b.com","sub":"prov-123"}"#);
        let profile = decode_credential(&jwt).unwrap();
        assert_eq!(profile.name, "");
    }

    #[test]
    fn rejects_non_jwt_credentials() {
        assert!(decode_credential("not-a-jwt").is_err());
        assert!(decode_credential("a.!!!.c").is_err());
    }
}
