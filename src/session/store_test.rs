use super::*;
use crate::net::types::Role;
use crate::test_support::MemoryStorage;

fn ada() -> Identity {
    Identity {
        id: 1,
        name: "Ada".to_owned(),
        role: Role::User,
        email: Some("ada@example.test".to_owned()),
        profile_image: Some("https://cdn.example.test/ada.png".to_owned()),
    }
}

fn memory_store() -> (MemoryStorage, TokenStore) {
    let backend = MemoryStorage::default();
    let store = TokenStore::new(Rc::new(backend.clone()));
    (backend, store)
}

#[test]
fn load_is_empty_when_never_saved() {
    let (_, store) = memory_store();
    assert_eq!(store.load(), StoredSession::default());
}

#[test]
fn save_then_load_returns_same_values() {
    let (_, store) = memory_store();
    store.save("abc", &ada());
    let loaded = store.load();
    assert_eq!(loaded.credential.as_deref(), Some("abc"));
    assert_eq!(loaded.identity, Some(ada()));
}

#[test]
fn save_overwrites_previous_entry() {
    let (_, store) = memory_store();
    store.save("first", &ada());
    let admin = Identity { id: 9, name: "Root".to_owned(), role: Role::Admin, email: None, profile_image: None };
    store.save("second", &admin);
    let loaded = store.load();
    assert_eq!(loaded.credential.as_deref(), Some("second"));
    assert_eq!(loaded.identity, Some(admin));
}

#[test]
fn clear_empties_storage_and_is_idempotent() {
    let (backend, store) = memory_store();
    store.save("abc", &ada());
    store.clear();
    assert_eq!(store.load(), StoredSession::default());
    assert!(backend.is_empty());
    store.clear();
    assert!(backend.is_empty());
}

#[test]
fn unreadable_identity_loads_as_absent() {
    let (backend, store) = memory_store();
    backend.set(TOKEN_KEY, "abc");
    backend.set(USER_KEY, "{not json");
    let loaded = store.load();
    assert_eq!(loaded.credential.as_deref(), Some("abc"));
    assert_eq!(loaded.identity, None);
}

#[test]
fn empty_token_counts_as_absent() {
    let (backend, store) = memory_store();
    backend.set(TOKEN_KEY, "");
    assert_eq!(store.credential(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_noop_outside_client() {
    let store = TokenStore::browser();
    store.save("abc", &ada());
    assert_eq!(store.load(), StoredSession::default());
    store.clear();
}

#[test]
fn failed_storage_mutation_is_reported() {
    assert!(storage_write_ok::<&str>(Ok(()), "remove", TOKEN_KEY));
    assert!(!storage_write_ok(Err("SecurityError"), "remove", TOKEN_KEY));
}
