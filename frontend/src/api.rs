//! Thin HTTP wrapper around `gloo-net`.
//!
//! Every request built through [`ApiClient`] carries the session's bearer
//! token (when there is one) and the abort signal of the component that
//! issued it. Failure handling is left to the call sites.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, AbortSignal, FormData};
use yew::prelude::*;

use crate::config;
use crate::error::ApiError;
use crate::models::{Ack, Envelope};
use crate::session::{Session, SessionContext};

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    signal: Option<AbortSignal>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        ApiClient {
            base_url: base_url.into(),
            token,
            signal: None,
        }
    }

    pub fn for_session(session: &Session) -> Self {
        ApiClient::new(config::api_base_url(), session.token().map(str::to_string))
    }

    /// Ties every request from this client to `scope`, so they are aborted
    /// when the owning component unmounts.
    pub fn scoped(mut self, scope: &RequestScope) -> Self {
        self.signal = scope.signal();
        self
    }

    pub fn url(&self, path: &str) -> String {
        config::join_url(&self.base_url, path)
    }

    /// Value for the `Authorization` header, if we have a token.
    pub fn bearer(&self) -> Option<String> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(|t| format!("Bearer {}", t))
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = match self.bearer() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        };
        builder.abort_signal(self.signal.as_ref())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let response = self.prepare(Request::get(&url)).send().await?;
        read_json(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("POST {}", url);
        let request = self.prepare(Request::post(&url)).json(body)?;
        let response = request.send().await?;
        read_json(response).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("DELETE {}", url);
        let response = self.prepare(Request::delete(&url)).send().await?;
        read_json(response).await
    }

    /// Multipart upload. The browser fills in the boundary, so no
    /// `Content-Type` is set here.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("POST {} (multipart)", url);
        let request = self.prepare(Request::post(&url)).body(form)?;
        let response = request.send().await?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = server_message(&body);
        log::warn!("{} returned {}: {}", response.url(), status, message);
        return Err(ApiError::Server { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pulls a human readable message out of an error body. The server sends
/// `{"message": "..."}`; anything else is passed through as-is.
pub fn server_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

pub fn open_envelope<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
    if !envelope.success {
        return Err(ApiError::Rejected(envelope.message.unwrap_or_default()));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("response is missing `data`".to_string()))
}

pub fn check_ack(ack: Ack) -> Result<(), ApiError> {
    if ack.success {
        Ok(())
    } else {
        Err(ApiError::Rejected(ack.message.unwrap_or_default()))
    }
}

/// Abort handle bound to a component's lifetime.
#[derive(Clone, Debug, Default)]
pub struct RequestScope {
    controller: Option<AbortController>,
}

impl RequestScope {
    pub fn new() -> Self {
        RequestScope {
            controller: AbortController::new().ok(),
        }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(|c| c.signal())
    }

    pub fn cancel(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

/// A [`RequestScope`] that is cancelled when the calling component
/// unmounts.
#[hook]
pub fn use_request_scope() -> RequestScope {
    let scope = use_memo(|_| RequestScope::new(), ());

    {
        let scope = scope.clone();
        use_effect_with_deps(move |_| move || scope.cancel(), ());
    }

    (*scope).clone()
}

/// Client for the signed-in user whose requests die with the calling
/// component.
#[hook]
pub fn use_api_client() -> ApiClient {
    let session = use_context::<SessionContext>();
    let scope = use_request_scope();

    let client = match &session {
        Some(session) => ApiClient::for_session(session),
        None => ApiClient::new(config::api_base_url(), None),
    };
    client.scoped(&scope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_only_with_token() {
        let client = ApiClient::new("http://localhost:5000/api", Some("abc".to_string()));
        assert_eq!(client.bearer().as_deref(), Some("Bearer abc"));

        assert_eq!(ApiClient::new("http://x", None).bearer(), None);
        assert_eq!(ApiClient::new("http://x", Some(String::new())).bearer(), None);
    }

    #[test]
    fn urls_are_joined_onto_base() {
        let client = ApiClient::new("http://localhost:5000/api/", None);
        assert_eq!(client.url("/income/get"), "http://localhost:5000/api/income/get");
    }

    #[test]
    fn server_message_prefers_json_message() {
        assert_eq!(server_message(r#"{"message":"Invalid credentials"}"#), "Invalid credentials");
        assert_eq!(server_message("  Bad Gateway \n"), "Bad Gateway");
        assert_eq!(server_message(r#"{"error":"x"}"#), r#"{"error":"x"}"#);
    }

    #[test]
    fn envelope_failures_become_rejections() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": false, "message": "Not allowed"}"#).unwrap();
        assert_eq!(open_envelope(env), Err(ApiError::Rejected("Not allowed".to_string())));

        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": true, "data": [1, 2]}"#).unwrap();
        assert_eq!(open_envelope(env), Ok(vec![1, 2]));

        let env: Envelope<Vec<u32>> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(open_envelope(env), Err(ApiError::Decode(_))));
    }

    #[test]
    fn ack_without_success_field_is_ok() {
        let ack: Ack = serde_json::from_str(r#"{"message": "Deleted"}"#).unwrap();
        assert_eq!(check_ack(ack), Ok(()));
    }
}
