use futures::executor::block_on;

use super::*;
use crate::error::TransportError;
use crate::net::types::Role;
use crate::test_support::{Harness, identity};
use crate::util::auth::{GuardDecision, user_guard};

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_initializing() {
    let state = AuthState::default();
    assert!(state.is_loading());
    assert!(state.user.is_none());
}

#[test]
fn auth_state_flags_follow_identity_role() {
    assert!(!AuthState::unauthenticated().is_authenticated());
    assert!(!AuthState::unauthenticated().is_admin());

    let user = AuthState::authenticated(identity(1, Role::User));
    assert!(user.is_authenticated());
    assert!(!user.is_admin());

    let admin = AuthState::authenticated(identity(2, Role::Admin));
    assert!(admin.is_authenticated());
    assert!(admin.is_admin());
}

// =============================================================
// AuthController::initialize
// =============================================================

#[test]
fn initialize_without_credential_settles_unauthenticated_without_network() {
    let h = Harness::new();
    let auth = AuthController::new(h.gateway.clone());

    block_on(auth.initialize());

    assert_eq!(auth.state(), AuthState::unauthenticated());
    assert!(h.transport.requests().is_empty());
}

#[test]
fn initialize_reverifies_stored_credential() {
    let cached = identity(1, Role::User);
    let h = Harness::signed_in("abc", &cached);
    h.transport.respond_json(200, &serde_json::json!({ "id": 1, "name": "Ada", "role": "admin" }));
    let auth = AuthController::new(h.gateway.clone());

    block_on(auth.initialize());

    let state = auth.state();
    assert!(!state.loading);
    assert!(state.is_admin());
    assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Ada"));
    assert_eq!(h.session.stored().identity, state.user);
    assert_eq!(h.transport.requests()[0].header("Authorization"), Some("Bearer abc"));
}

#[test]
fn initialize_with_rejected_credential_clears_and_redirects() {
    let h = Harness::signed_in("expired", &identity(1, Role::Admin));
    h.transport.respond(401, "");
    let auth = AuthController::new(h.gateway.clone());

    block_on(auth.initialize());

    assert_eq!(auth.state(), AuthState::unauthenticated());
    assert!(h.storage.is_empty());
    assert_eq!(h.navigator.visits(), vec!["/login".to_owned()]);
}

#[test]
fn initialize_network_failure_settles_unauthenticated() {
    let h = Harness::signed_in("abc", &identity(1, Role::User));
    h.transport.fail(TransportError::Network("offline".to_owned()));
    let auth = AuthController::new(h.gateway.clone());

    block_on(auth.initialize());

    assert_eq!(auth.state(), AuthState::unauthenticated());
    assert!(h.navigator.visits().is_empty());
}

#[test]
fn initialize_accepts_identity_without_name() {
    let h = Harness::signed_in("abc", &identity(1, Role::User));
    h.transport.respond_json(200, &serde_json::json!({ "id": 1, "role": "user" }));
    let auth = AuthController::new(h.gateway.clone());

    block_on(auth.initialize());

    let state = auth.state();
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
    assert_eq!(user_guard(&state), GuardDecision::Render);
}

// =============================================================
// AuthController::login / logout
// =============================================================

#[test]
fn login_success_persists_credential_and_identity() {
    let h = Harness::new();
    h.transport.respond_json(200, &serde_json::json!({ "id": 4, "name": "Bo", "role": "user" }));
    let auth = AuthController::new(h.gateway.clone());

    let identity = block_on(auth.login("fresh")).unwrap();

    assert_eq!(identity.id, 4);
    assert_eq!(auth.state(), AuthState::authenticated(identity.clone()));
    assert_eq!(h.session.credential().as_deref(), Some("fresh"));
    assert_eq!(h.session.stored().identity, Some(identity));
}

#[test]
fn login_failure_surfaces_error_and_stays_unauthenticated() {
    let h = Harness::new();
    h.transport.respond_json(500, &serde_json::json!({ "message": "boom" }));
    let auth = AuthController::new(h.gateway.clone());

    let err = block_on(auth.login("fresh")).unwrap_err();

    assert_eq!(err, AuthError::Status { status: 500 });
    assert_eq!(auth.state(), AuthState::unauthenticated());
    assert_eq!(h.session.credential(), None);
}

#[test]
fn login_rejected_credential_is_unauthorized() {
    let h = Harness::new();
    h.transport.respond(401, "");
    let auth = AuthController::new(h.gateway.clone());

    assert_eq!(block_on(auth.login("bad")), Err(AuthError::Unauthorized));
    assert_eq!(auth.state(), AuthState::unauthenticated());
}

#[test]
fn logout_clears_everything_without_network() {
    let h = Harness::signed_in("abc", &identity(1, Role::User));
    h.transport.respond_json(200, &serde_json::json!({ "id": 1, "name": "Ada" }));
    let auth = AuthController::new(h.gateway.clone());
    block_on(auth.initialize());

    auth.logout();

    assert_eq!(auth.state(), AuthState::unauthenticated());
    assert!(h.storage.is_empty());
    assert_eq!(h.transport.requests().len(), 1);
}

#[test]
fn logout_during_verification_wins() {
    let h = Harness::signed_in("abc", &identity(1, Role::User));
    h.transport.respond_json(200, &serde_json::json!({ "id": 1, "name": "Ada" }));
    let auth = AuthController::new(h.gateway.clone());
    let racing = auth.clone();
    h.transport.before_send(move || racing.logout());

    block_on(auth.initialize());

    assert_eq!(auth.state(), AuthState::unauthenticated());
    assert!(h.storage.is_empty());
}
