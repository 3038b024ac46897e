//! In-memory fakes shared by unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::net::gateway::Gateway;
use crate::net::transport::{HttpRequest, HttpResponse, Transport};
use crate::net::types::{Identity, Role};
use crate::session::Session;
use crate::session::navigator::Navigator;
use crate::session::store::{StorageBackend, TokenStore};

pub const TEST_BASE_URL: &str = "https://api.example.test";

/// Process-local storage standing in for `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Records requested paths instead of navigating.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_owned());
    }
}

/// Replays queued outcomes in order and records every request it sees.
/// Runs dry with a network error.
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
    before_send: RefCell<Option<Box<dyn Fn()>>>,
}

impl ScriptedTransport {
    pub fn respond(&self, status: u16, body: &str) {
        self.outcomes.borrow_mut().push_back(Ok(HttpResponse { status, body: body.to_owned() }));
    }

    pub fn respond_json(&self, status: u16, body: &serde_json::Value) {
        self.respond(status, &body.to_string());
    }

    pub fn fail(&self, err: TransportError) {
        self.outcomes.borrow_mut().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// Run `hook` while each request is in flight, before its outcome is
    /// returned.
    pub fn before_send(&self, hook: impl Fn() + 'static) {
        *self.before_send.borrow_mut() = Some(Box::new(hook));
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        if let Some(hook) = self.before_send.borrow().as_ref() {
            hook();
        }
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_owned())))
    }
}

/// A gateway wired to fakes, with handles to inspect each of them.
pub struct Harness {
    pub storage: MemoryStorage,
    pub transport: Rc<ScriptedTransport>,
    pub navigator: Rc<RecordingNavigator>,
    pub session: Session,
    pub gateway: Gateway,
}

impl Harness {
    pub fn new() -> Self {
        let storage = MemoryStorage::default();
        let transport = Rc::new(ScriptedTransport::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let session = Session::new(TokenStore::new(Rc::new(storage.clone())));
        let config = ApiConfig::parse(Some(TEST_BASE_URL)).unwrap();
        let gateway = Gateway::new(config, transport.clone(), session.clone(), navigator.clone());
        Self { storage, transport, navigator, session, gateway }
    }

    /// Harness whose storage already holds `credential` and `identity`.
    pub fn signed_in(credential: &str, identity: &Identity) -> Self {
        let harness = Self::new();
        TokenStore::new(Rc::new(harness.storage.clone())).save(credential, identity);
        harness
    }
}

pub fn identity(id: i64, role: Role) -> Identity {
    Identity { id, name: format!("user-{id}"), role, email: None, profile_image: None }
}
