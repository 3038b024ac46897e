//! Shared route-guard policies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded routes apply identical redirect behavior. Policies are pure
//! functions of [`AuthState`] so they can be checked without a router; the
//! redirect effect re-runs them whenever the state signal changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::session::navigator::{ADMIN_ROUTE, DASHBOARD_ROUTE, LOGIN_ROUTE};
use crate::state::auth::AuthState;

/// What a guard does for a given auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Verification still running: show the loading affordance, never redirect.
    Loading,
    Redirect(&'static str),
    Render,
}

pub type GuardPolicy = fn(&AuthState) -> GuardDecision;

/// Policy for the signed-in user area.
pub fn user_guard(state: &AuthState) -> GuardDecision {
    if state.is_loading() {
        GuardDecision::Loading
    } else if !state.is_authenticated() {
        GuardDecision::Redirect(LOGIN_ROUTE)
    } else {
        GuardDecision::Render
    }
}

/// Policy for the admin area. Non-admins go to the regular dashboard.
pub fn admin_guard(state: &AuthState) -> GuardDecision {
    match user_guard(state) {
        GuardDecision::Render if !state.is_admin() => GuardDecision::Redirect(DASHBOARD_ROUTE),
        other => other,
    }
}

/// Where a freshly signed-in user should land.
pub fn landing_route(state: &AuthState) -> &'static str {
    if state.is_admin() {
        ADMIN_ROUTE
    } else {
        DASHBOARD_ROUTE
    }
}

/// Navigate whenever `policy` yields a redirect for the current auth state.
pub fn install_guard_redirect<F>(auth: ReadSignal<AuthState>, policy: GuardPolicy, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = policy(&auth.get()) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
