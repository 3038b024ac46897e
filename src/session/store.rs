//! Durable credential + identity persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the session module reads or writes these entries. Pages consume the
//! auth context instead of touching storage.
//!
//! The browser backend is hydrate-only; during SSR every operation is a no-op
//! and `load` reports an empty session.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::rc::Rc;

use crate::net::types::Identity;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// String key-value storage.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`, or nothing at all outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Log a failed `localStorage` mutation. Returns whether it succeeded.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn storage_write_ok<E: std::fmt::Debug>(result: Result<(), E>, action: &str, key: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            leptos::logging::warn!("localStorage {action} failed for {key}: {e:?}");
            false
        }
    }
}

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                storage_write_ok(storage.set_item(key, value), "write", key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                storage_write_ok(storage.remove_item(key), "remove", key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// What `TokenStore::load` found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub credential: Option<String>,
    pub identity: Option<Identity>,
}

/// Credential and identity stored under [`TOKEN_KEY`] and [`USER_KEY`].
#[derive(Clone)]
pub struct TokenStore {
    backend: Rc<dyn StorageBackend>,
}

impl TokenStore {
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    /// Overwrite both entries.
    pub fn save(&self, credential: &str, identity: &Identity) {
        let Ok(raw) = serde_json::to_string(identity) else {
            return;
        };
        self.backend.set(TOKEN_KEY, credential);
        self.backend.set(USER_KEY, &raw);
    }

    pub fn load(&self) -> StoredSession {
        let credential = self.credential();
        let identity = self.backend.get(USER_KEY).and_then(|raw| match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                leptos::logging::warn!("discarding unreadable stored identity: {e}");
                None
            }
        });
        StoredSession { credential, identity }
    }

    pub fn credential(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Remove both entries. Safe to call repeatedly.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}
