//! User & Auth Endpoints

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

use super::{expect_result, read_envelope, read_ok, ApiClient, ApiResult};
use crate::models::UserDetail;

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct IdentityLoginBody<'a> {
    email: &'a str,
    google_id: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct IdentityRegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    google_id: &'a str,
}

#[derive(Serialize)]
struct ForgotPasswordBody<'a> {
    email: &'a str,
    origin: &'a str,
}

#[derive(Serialize)]
struct ResetPasswordBody<'a> {
    token: &'a str,
    #[serde(rename = "newPassword")]
    new_password: &'a str,
}

// ========================
// Endpoints
// ========================

/// Exchange credentials for a bearer token.
pub async fn login(api: &ApiClient, email: &str, password: &str) -> ApiResult<String> {
    let response = api
        .post("/user/login")
        .json(&LoginBody { email, password })
        .map_err(|err| super::ApiError::Decode(err.to_string()))?
        .send()
        .await?;
    expect_result::<String>(response).await
}

/// Token for an identity-provider user that already has an account.
pub async fn login_with_identity(api: &ApiClient, email: &str, google_id: &str) -> ApiResult<String> {
    let response = api
        .post("/user/login")
        .json(&IdentityLoginBody { email, google_id })
        .map_err(|err| super::ApiError::Decode(err.to_string()))?
        .send()
        .await?;
    expect_result::<String>(response).await
}

pub async fn register(api: &ApiClient, name: &str, email: &str, password: &str) -> ApiResult<()> {
    let response = api
        .post("/user/register")
        .json(&RegisterBody { name, email, password })
        .map_err(|err| super::ApiError::Decode(err.to_string()))?
        .send()
        .await?;
    read_ok(response).await
}

/// Self-registration for a first-time identity-provider user; returns the
/// bearer token directly.
pub async fn register_with_identity(
    api: &ApiClient,
    name: &str,
    email: &str,
    google_id: &str,
) -> ApiResult<String> {
    let response = api
        .post("/user/register")
        .json(&IdentityRegisterBody { name, email, google_id })
        .map_err(|err| super::ApiError::Decode(err.to_string()))?
        .send()
        .await?;
    expect_result::<String>(response).await
}

/// True when the service already has a user record for `email`.
pub async fn email_exists(api: &ApiClient, email: &str) -> ApiResult<bool> {
    let encoded = utf8_percent_encode(email, NON_ALPHANUMERIC).to_string();
    let response = api
        .get(&format!("/user/validate-email?email={encoded}"))
        .send()
        .await?;
    let envelope = read_envelope::<serde_json::Value>(response).await?;
    Ok(!is_empty_result(envelope.result.as_ref()))
}

pub async fn forgot_password(api: &ApiClient, email: &str, origin: &str) -> ApiResult<()> {
    let response = api
        .post("/user/forgot-password")
        .json(&ForgotPasswordBody { email, origin })
        .map_err(|err| super::ApiError::Decode(err.to_string()))?
        .send()
        .await?;
    read_ok(response).await
}

pub async fn reset_password(api: &ApiClient, token: &str, new_password: &str) -> ApiResult<()> {
    let response = api
        .put("/user/reset-password")
        .json(&ResetPasswordBody { token, new_password })
        .map_err(|err| super::ApiError::Decode(err.to_string()))?
        .send()
        .await?;
    read_ok(response).await
}

/// The service returns a list; the caller takes the first entry's username.
pub async fn user_detail(api: &ApiClient) -> ApiResult<Vec<UserDetail>> {
    let response = api.get("/user/user-detail").send().await?;
    expect_result::<Vec<UserDetail>>(response).await
}

/// The validate-email endpoint signals "no such user" with an absent or
/// empty `result` rather than an error status.
fn is_empty_result(value: Option<&serde_json::Value>) -> bool {
    match value {
        None | Some(serde_json::Value::Null) => true,
        Some(serde_json::Value::Array(items)) => items.is_empty(),
        Some(serde_json::Value::Object(fields)) => fields.is_empty(),
        Some(serde_json::Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_results_mean_unknown_email() {
        assert!(is_empty_result(None));
        assert!(is_empty_result(Some(&json!(null))));
        assert!(is_empty_result(Some(&json!([]))));
        assert!(is_empty_result(Some(&json!({}))));
        assert!(is_empty_result(Some(&json!(""))));
    }

    #[test]
    fn existing_user_record_is_not_empty() {
        assert!(!is_empty_result(Some(&json!([{ "email": "a@b.com" }]))));
        assert!(!is_empty_result(Some(&json!({ "email": "a@b.com" }))));
    }

    #[test]
    fn reset_body_uses_camel_case_new_password() {
        let body = serde_json::to_value(ResetPasswordBody {
            token: "tok",
            new_password: "secret",
        })
        .unwrap();
        assert_eq!(body, json!({ "token": "tok", "newPassword": "secret" }));
    }
}
