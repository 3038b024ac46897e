//! Authenticated request gateway: the only path for authorized API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every call resolves its endpoint against [`ApiConfig`], gets the bearer
//! credential and JSON content type attached, and is sent over the injected
//! [`Transport`]. This module alone owns the 401 policy: invalidate the
//! session, navigate to `/login`, and hand the caller a synthetic
//! unauthorized response.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures propagate as `Err`. HTTP statuses never do; they come
//! back as [`ApiResponse`] variants for the caller to match on.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::rc::Rc;

use serde::de::DeserializeOwned;

use super::transport::{FormPart, HttpRequest, Method, RequestBody, Transport};
use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::session::Session;
use crate::session::navigator::{LOGIN_ROUTE, Navigator};

pub const UNAUTHORIZED_STATUS: u16 = 401;

/// Body handed to callers when a request was rejected with 401.
pub fn unauthorized_body() -> serde_json::Value {
    serde_json::json!({ "message": "Unauthorized" })
}

/// Outcome of a request that reached the server.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    Success { status: u16, body: serde_json::Value },
    /// The session has already been invalidated and a login redirect issued.
    Unauthorized { body: serde_json::Value },
    ErrorStatus { status: u16, body: serde_json::Value },
}

impl ApiResponse {
    pub fn status(&self) -> u16 {
        match self {
            Self::Success { status, .. } | Self::ErrorStatus { status, .. } => *status,
            Self::Unauthorized { .. } => UNAUTHORIZED_STATUS,
        }
    }

    pub fn body(&self) -> &serde_json::Value {
        match self {
            Self::Success { body, .. } | Self::Unauthorized { body } | Self::ErrorStatus { body, .. } => body,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Deserialize the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(self.body())
    }

    /// The server's `message` field, if the body carries one.
    pub fn message(&self) -> Option<&str> {
        self.body().get("message").and_then(serde_json::Value::as_str)
    }
}

/// Per-call options. Caller headers replace gateway defaults of the same name.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: RequestBody,
    pub headers: Vec<(String, String)>,
    /// Credential to send instead of the stored one (used to verify a fresh
    /// login before it is persisted).
    pub credential: Option<String>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self { method, ..Self::default() }
    }

    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn with_credential(mut self, credential: &str) -> Self {
        self.credential = Some(credential.to_owned());
        self
    }
}

#[derive(Clone)]
pub struct Gateway {
    config: ApiConfig,
    transport: Rc<dyn Transport>,
    session: Session,
    navigator: Rc<dyn Navigator>,
}

impl Gateway {
    pub fn new(
        config: ApiConfig,
        transport: Rc<dyn Transport>,
        session: Session,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self { config, transport, session, navigator }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Resolve the URL and merge headers for `endpoint`.
    pub fn build_request(&self, endpoint: &str, options: RequestOptions) -> HttpRequest {
        let mut headers: Vec<(String, String)> = Vec::new();
        if !options.body.is_form() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        if let Some(token) = options.credential.or_else(|| self.session.credential()) {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        for (name, value) in options.headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
            headers.push((name, value));
        }
        HttpRequest {
            method: options.method,
            url: self.config.resolve(endpoint),
            headers,
            body: options.body,
        }
    }

    /// Send a request through the 401 interception path.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no HTTP response was received.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<ApiResponse, TransportError> {
        let request = self.build_request(endpoint, options);
        let method = request.method;
        let url = request.url.clone();

        let resp = self.transport.send(request).await.inspect_err(|e| {
            leptos::logging::warn!("{} {url} failed: {e}", method.as_str());
        })?;

        if resp.status == UNAUTHORIZED_STATUS {
            self.on_unauthorized(method, &url);
            return Ok(ApiResponse::Unauthorized { body: unauthorized_body() });
        }

        let body = parse_body(&resp.body);
        if (200..300).contains(&resp.status) {
            Ok(ApiResponse::Success { status: resp.status, body })
        } else {
            Ok(ApiResponse::ErrorStatus { status: resp.status, body })
        }
    }

    fn on_unauthorized(&self, method: Method, url: &str) {
        leptos::logging::warn!("{} {url} returned 401; session cleared", method.as_str());
        if self.session.invalidate() {
            self.navigator.navigate(LOGIN_ROUTE);
        }
    }

    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn get(&self, endpoint: &str) -> Result<ApiResponse, TransportError> {
        self.request(endpoint, RequestOptions::new(Method::Get)).await
    }

    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn post(&self, endpoint: &str, body: serde_json::Value) -> Result<ApiResponse, TransportError> {
        self.request(endpoint, RequestOptions::new(Method::Post).with_body(RequestBody::Json(body)))
            .await
    }

    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn put(&self, endpoint: &str, body: serde_json::Value) -> Result<ApiResponse, TransportError> {
        self.request(endpoint, RequestOptions::new(Method::Put).with_body(RequestBody::Json(body)))
            .await
    }

    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn delete(&self, endpoint: &str) -> Result<ApiResponse, TransportError> {
        self.request(endpoint, RequestOptions::new(Method::Delete)).await
    }

    /// Multipart POST; the browser sets the boundary content type.
    ///
    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn post_form(&self, endpoint: &str, parts: Vec<FormPart>) -> Result<ApiResponse, TransportError> {
        self.request(endpoint, RequestOptions::new(Method::Post).with_body(RequestBody::Form(parts)))
            .await
    }

    /// # Errors
    ///
    /// See [`Gateway::request`].
    pub async fn put_form(&self, endpoint: &str, parts: Vec<FormPart>) -> Result<ApiResponse, TransportError> {
        self.request(endpoint, RequestOptions::new(Method::Put).with_body(RequestBody::Form(parts)))
            .await
    }
}

/// Empty bodies become `null`; non-JSON text is kept as a JSON string.
fn parse_body(raw: &str) -> serde_json::Value {
    if raw.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_owned()))
}
