//! Remote API Client
//!
//! Request plumbing shared by every endpoint: bearer-token attachment,
//! the `result`/`message` envelope, and the error taxonomy. Endpoint
//! bindings are organized by domain.

pub mod feed;
pub mod task;
pub mod user;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::API_BASE_URL;
use crate::models::ApiEnvelope;
use crate::session::Session;

/// What went wrong with a request. No retries and no 4xx/5xx distinction;
/// the server's `message` is surfaced verbatim when it sent one.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    Network(String),
    /// A body could not be serialized or a response could not be decoded
    Decode(String),
    /// Non-2xx response, with the server-reported message when present
    Server { status: u16, message: Option<String> },
}

impl ApiError {
    /// Server-reported message, verbatim, when there is one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(err) => write!(f, "Network error: {err}"),
            ApiError::Decode(err) => write!(f, "Parse error: {err}"),
            ApiError::Server {
                status,
                message: Some(message),
            } => write!(f, "{message} (HTTP {status})"),
            ApiError::Server { status, message: None } => write!(f, "HTTP {status}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Stateless HTTP client carrying the session for bearer attachment.
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    fn url(&self, path: &str) -> String {
        format!("{API_BASE_URL}{path}")
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::get(&self.url(path)))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::post(&self.url(path)))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::put(&self.url(path)))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.authorize(Request::delete(&self.url(path)))
    }
}

/// Read the envelope from a 2xx response; a non-2xx becomes
/// `ApiError::Server` carrying the body's `message` when it decodes.
pub(crate) async fn read_envelope<T: DeserializeOwned>(response: Response) -> ApiResult<ApiEnvelope<T>> {
    if response.ok() {
        response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    } else {
        Err(server_error(response).await)
    }
}

/// Read the envelope and require its `result` field.
pub(crate) async fn expect_result<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let envelope = read_envelope::<T>(response).await?;
    envelope
        .result
        .ok_or_else(|| ApiError::Decode("response envelope has no result".to_string()))
}

/// For endpoints whose success carries no payload.
pub(crate) async fn read_ok(response: Response) -> ApiResult<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(server_error(response).await)
    }
}

async fn server_error(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ApiEnvelope<serde_json::Value>>()
        .await
        .ok()
        .and_then(|envelope| envelope.message);
    ApiError::Server { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_server_message_verbatim() {
        let err = ApiError::Server {
            status: 401,
            message: Some("Invalid email or password".to_string()),
        };
        assert_eq!(err.server_message(), Some("Invalid email or password"));
        assert_eq!(err.to_string(), "Invalid email or password (HTTP 401)");
    }

    #[test]
    fn display_falls_back_to_status() {
        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), "HTTP 500");
    }
}
