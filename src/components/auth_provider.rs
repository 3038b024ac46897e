//! Auth context provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the whole app. Owns the [`AuthController`], exposes its session
//! signal read-only, and kicks off startup verification in the browser.
//! Pages reach auth only through [`use_auth`].

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::config::ApiConfig;
use crate::error::AuthError;
use crate::net::gateway::Gateway;
use crate::net::types::Identity;
use crate::state::auth::{AuthController, AuthState};

/// Handle to auth state and actions, available via context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: ReadSignal<AuthState>,
    controller: StoredValue<AuthController, LocalStorage>,
}

impl AuthContext {
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state
    }

    pub fn user(&self) -> Option<Identity> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(AuthState::is_admin)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(AuthState::is_loading)
    }

    pub fn controller(&self) -> AuthController {
        self.controller.get_value()
    }

    /// Gateway for page-level API calls.
    pub fn gateway(&self) -> Gateway {
        self.controller.with_value(|c| c.gateway().clone())
    }

    /// # Errors
    ///
    /// See [`AuthController::login`].
    pub async fn login(self, credential: String) -> Result<Identity, AuthError> {
        let controller = self.controller();
        controller.login(&credential).await
    }

    pub fn logout(&self) {
        self.controller.with_value(AuthController::logout);
    }
}

/// Provide `controller` and a read-only view of its session signal as context.
pub fn provide_auth(controller: AuthController) -> AuthContext {
    let state = RwSignal::from(controller.session().state()).read_only();
    let auth = AuthContext { state, controller: StoredValue::new_local(controller) };
    provide_context(auth);
    auth
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Provides [`AuthContext`] to `children` and verifies any stored session.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let config = ApiConfig::from_env().unwrap_or_else(|e| {
        leptos::logging::warn!("{e}; falling back to default API base URL");
        ApiConfig::default()
    });
    let auth = provide_auth(AuthController::browser(config));

    #[cfg(feature = "hydrate")]
    {
        let controller = auth.controller();
        leptos::task::spawn_local(async move {
            controller.initialize().await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }

    children()
}
