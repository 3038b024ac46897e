//! Shared session cell: the single owner of credential + auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway invalidates it on 401, the auth controller establishes and
//! settles it around verification, and the UI reads the same signal through
//! [`Session::state`]. Nothing else mutates it.
//!
//! DESIGN
//! ======
//! Auth state lives in one `ArcRwSignal`. Every mutation writes storage
//! first and then the signal in one synchronous step, so anything reacting
//! to the signal already sees the committed storage. Each discarding
//! mutation bumps an epoch; verification results carry the epoch they
//! started under and are dropped when it is no longer current.

pub mod navigator;
pub mod store;


use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::net::types::Identity;
use crate::state::auth::AuthState;

use self::store::{StoredSession, TokenStore};

struct SessionInner {
    store: TokenStore,
    state: ArcRwSignal<AuthState>,
    epoch: Cell<u64>,
    login_redirect_issued: Cell<bool>,
}

/// Cheaply cloneable handle to the one session of this client.
#[derive(Clone)]
pub struct Session {
    inner: Rc<SessionInner>,
}

impl Session {
    /// New session in the initializing state.
    pub fn new(store: TokenStore) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                store,
                state: ArcRwSignal::new(AuthState::default()),
                epoch: Cell::new(0),
                login_redirect_issued: Cell::new(false),
            }),
        }
    }

    /// The reactive auth state. Read-only by convention; only the methods
    /// below write it.
    pub fn state(&self) -> ArcRwSignal<AuthState> {
        self.inner.state.clone()
    }

    pub fn snapshot(&self) -> AuthState {
        self.inner.state.get_untracked()
    }

    /// The stored bearer credential, if any.
    pub fn credential(&self) -> Option<String> {
        self.inner.store.credential()
    }

    pub fn stored(&self) -> StoredSession {
        self.inner.store.load()
    }

    pub fn epoch(&self) -> u64 {
        self.inner.epoch.get()
    }

    /// Enter the loading state and return the epoch a verification must
    /// settle under. Supersedes any verification already in flight.
    pub fn begin_verification(&self) -> u64 {
        let epoch = self.bump_epoch();
        self.inner.state.update(|state| state.loading = true);
        epoch
    }

    /// Persist and publish a verified session. Returns `false` (and changes
    /// nothing) when `epoch` is stale.
    pub fn establish(&self, epoch: u64, credential: &str, identity: Identity) -> bool {
        if epoch != self.epoch() {
            return false;
        }
        self.inner.store.save(credential, &identity);
        self.inner.login_redirect_issued.set(false);
        self.inner.state.set(AuthState::authenticated(identity));
        true
    }

    /// Settle a failed verification as unauthenticated. Stored entries are
    /// left in place. Returns `false` when `epoch` is stale.
    pub fn settle_unauthenticated(&self, epoch: u64) -> bool {
        if epoch != self.epoch() {
            return false;
        }
        self.inner.state.set(AuthState::unauthenticated());
        true
    }

    /// Explicit sign-out.
    pub fn logout(&self) {
        self.inner.login_redirect_issued.set(false);
        self.discard();
    }

    /// Tear down after a 401. Returns `true` only for the first invalidation
    /// since the last established session or logout, so concurrent failures
    /// yield a single login redirect.
    pub fn invalidate(&self) -> bool {
        let first = !self.inner.login_redirect_issued.replace(true);
        self.discard();
        first
    }

    fn discard(&self) {
        self.bump_epoch();
        self.inner.store.clear();
        self.inner.state.set(AuthState::unauthenticated());
    }

    fn bump_epoch(&self) -> u64 {
        let next = self.inner.epoch.get().wrapping_add(1);
        self.inner.epoch.set(next);
        next
    }
}
