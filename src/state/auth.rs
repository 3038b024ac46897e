//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and role-dependent rendering. [`AuthController`] drives the
//! session through initialize/login/logout; the UI only ever sees
//! [`AuthState`] snapshots.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use crate::config::ApiConfig;
use crate::error::AuthError;
use crate::net::api;
use crate::net::gateway::Gateway;
use crate::net::transport::BrowserTransport;
use crate::net::types::Identity;
use crate::session::Session;
use crate::session::navigator::BrowserNavigator;
use crate::session::store::TokenStore;

/// Authentication state tracking the current user and loading status.
///
/// `is_authenticated`/`is_admin` are meaningless while `loading` is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Initializing: nothing verified yet.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn authenticated(user: Identity) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn unauthenticated() -> Self {
        Self { user: None, loading: false }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(Identity::is_admin)
    }
}

/// Drives the session lifecycle.
#[derive(Clone)]
pub struct AuthController {
    session: Session,
    gateway: Gateway,
}

impl AuthController {
    pub fn new(gateway: Gateway) -> Self {
        Self { session: gateway.session().clone(), gateway }
    }

    /// Controller backed by `localStorage`, `fetch`, and `window.location`.
    pub fn browser(config: ApiConfig) -> Self {
        let session = Session::new(TokenStore::browser());
        let gateway = Gateway::new(config, Rc::new(BrowserTransport), session, Rc::new(BrowserNavigator));
        Self::new(gateway)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn state(&self) -> AuthState {
        self.session.snapshot()
    }

    /// Rehydrate the stored credential and re-verify it. Always leaves the
    /// session settled (authenticated or not) unless a newer mutation won.
    pub async fn initialize(&self) {
        let epoch = self.session.begin_verification();
        let Some(credential) = self.session.credential() else {
            self.session.settle_unauthenticated(epoch);
            return;
        };

        match api::fetch_identity(&self.gateway, None).await {
            Ok(identity) => {
                if !self.session.establish(epoch, &credential, identity) {
                    leptos::logging::log!("discarding stale session verification");
                }
            }
            Err(e) => {
                leptos::logging::warn!("stored session verification failed: {e}");
                self.session.settle_unauthenticated(epoch);
            }
        }
    }

    /// Verify `credential` and, on success, persist it with its identity.
    ///
    /// # Errors
    ///
    /// Returns the verification failure, or [`AuthError::Superseded`] if a
    /// logout or 401 landed while verification was in flight.
    pub async fn login(&self, credential: &str) -> Result<Identity, AuthError> {
        let epoch = self.session.begin_verification();
        match api::fetch_identity(&self.gateway, Some(credential)).await {
            Ok(identity) => {
                if self.session.establish(epoch, credential, identity.clone()) {
                    Ok(identity)
                } else {
                    Err(AuthError::Superseded)
                }
            }
            Err(e) => {
                self.session.settle_unauthenticated(epoch);
                Err(e)
            }
        }
    }

    /// Drop the session locally; no network call.
    pub fn logout(&self) {
        self.session.logout();
    }
}
