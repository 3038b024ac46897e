//! Auth endpoints, all issued through the [`Gateway`].
//!
//! ERROR HANDLING
//! ==============
//! Gateway outcomes are folded into [`AuthError`] so the controller and the
//! login page can branch on a single type.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::gateway::{ApiResponse, Gateway, RequestOptions};
use super::transport::Method;
use super::types::{Identity, IdentityEnvelope, LoginRequest, LoginResponse};
use crate::error::AuthError;

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const IDENTITY_ENDPOINT: &str = "/auth/me";

/// Exchange email + password for a bearer credential via `POST /auth/login`.
///
/// # Errors
///
/// Returns an [`AuthError`] on transport failure, rejection, or a response
/// without a token.
pub async fn request_credential(gateway: &Gateway, email: &str, password: &str) -> Result<String, AuthError> {
    let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    let body = serde_json::to_value(&payload).map_err(|e| AuthError::Parse(e.to_string()))?;
    let resp = gateway.post(LOGIN_ENDPOINT, body).await?;
    credential_from_response(&resp)
}

/// Resolve the identity behind `credential` (or the stored one when `None`)
/// via `GET /auth/me`.
///
/// # Errors
///
/// Returns an [`AuthError`] if verification fails for any reason.
pub async fn fetch_identity(gateway: &Gateway, credential: Option<&str>) -> Result<Identity, AuthError> {
    let mut options = RequestOptions::new(Method::Get);
    if let Some(credential) = credential {
        options = options.with_credential(credential);
    }
    let resp = gateway.request(IDENTITY_ENDPOINT, options).await?;
    identity_from_response(&resp)
}

fn ensure_success(resp: &ApiResponse) -> Result<(), AuthError> {
    match resp {
        ApiResponse::Success { .. } => Ok(()),
        ApiResponse::Unauthorized { .. } => Err(AuthError::Unauthorized),
        ApiResponse::ErrorStatus { status, .. } => Err(AuthError::Status { status: *status }),
    }
}

fn credential_from_response(resp: &ApiResponse) -> Result<String, AuthError> {
    ensure_success(resp)?;
    let login: LoginResponse = resp.json().map_err(|e| AuthError::Parse(e.to_string()))?;
    if login.token.is_empty() {
        return Err(AuthError::Parse("empty token".to_owned()));
    }
    Ok(login.token)
}

fn identity_from_response(resp: &ApiResponse) -> Result<Identity, AuthError> {
    ensure_success(resp)?;
    resp.json::<IdentityEnvelope>()
        .map(IdentityEnvelope::into_identity)
        .map_err(|e| AuthError::Parse(e.to_string()))
}
