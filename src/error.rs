//! Error taxonomy for the session subsystem.
//!
//! ERROR HANDLING
//! ==============
//! Only transport-level failures and explicit login/verification rejections
//! surface as errors. An intercepted 401 is not an error for API callers; the
//! gateway turns it into `ApiResponse::Unauthorized`. Role denial is never an
//! error; guards express it as a redirect.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failures raised before an HTTP status was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (offline, DNS, CORS, aborted).
    #[error("network request failed: {0}")]
    Network(String),

    /// The request body could not be encoded for sending.
    #[error("request body encode failed: {0}")]
    Encode(String),

    /// No HTTP transport exists in this execution context (SSR, native tests).
    #[error("http transport not available outside the browser")]
    Unavailable,
}

/// Failures from `login` and identity verification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API rejected the credential with 401.
    #[error("credential rejected")]
    Unauthorized,

    /// The API answered with a non-success status other than 401.
    #[error("auth request failed: status {status}")]
    Status { status: u16 },

    /// The API answered successfully but the payload was not usable.
    #[error("auth response parse failed: {0}")]
    Parse(String),

    /// The session changed while the request was in flight.
    #[error("session changed before verification completed")]
    Superseded,
}

/// Invalid client configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL: {0:?} (expected http:// or https://)")]
    InvalidBaseUrl(String),
}
