//! Wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! `Identity` is both the `/auth/me` payload and the record cached in the
//! token store, so it must round-trip through serde without loss.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access level attached to an identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// Regular user. Unrecognized role strings also land here so that an
    /// unexpected value can never grant admin access.
    #[default]
    #[serde(other)]
    User,
}

/// User profile resolved from a credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// `POST /auth/login` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` response body. Some deployments name the field
/// `access_token`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
}

/// `GET /auth/me` response body, either a bare identity or `{ "user": ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdentityEnvelope {
    Wrapped { user: Identity },
    Bare(Identity),
}

impl IdentityEnvelope {
    pub fn into_identity(self) -> Identity {
        match self {
            Self::Wrapped { user } | Self::Bare(user) => user,
        }
    }
}
