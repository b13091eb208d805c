//! Test helpers: scripted transport and ready-made clients.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::api::ApiClient;
use crate::fetcher::{FetchState, RequestExecutor};
use crate::http::{PreparedRequest, RawResponse, Transport, TransportError};
use crate::models::{Role, SessionRecord, SessionUser};
use crate::session::MemorySessionStore;

pub const BASE_URL: &str = "http://localhost:3003/api";

/// Transport answering from a queue and recording what it was sent
#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
    requests: RefCell<Vec<PreparedRequest>>,
    probe: RefCell<Option<Rc<RefCell<FetchState>>>>,
    loading_seen: RefCell<Vec<bool>>,
    hang: Cell<bool>,
    cancel_on_send: RefCell<Option<CancellationToken>>,
}

impl FakeTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.respond_text(status, &body.to_string());
    }

    pub fn respond_text(&self, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(RawResponse::new(status, body)));
    }

    pub fn fail(&self, err: TransportError) {
        self.responses.borrow_mut().push_back(Err(err));
    }

    /// Never answer
    pub fn hang(&self) {
        self.hang.set(true);
    }

    /// Cancel `token` while the request is in flight, then still answer
    pub fn cancel_on_send(&self, token: CancellationToken) {
        *self.cancel_on_send.borrow_mut() = Some(token);
    }

    /// Record the in-flight flag of `state` whenever a request goes out
    pub fn watch(&self, state: Rc<RefCell<FetchState>>) {
        *self.probe.borrow_mut() = Some(state);
    }

    pub fn loading_seen(&self) -> Vec<bool> {
        self.loading_seen.borrow().clone()
    }

    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> PreparedRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        if let Some(state) = self.probe.borrow().as_ref() {
            self.loading_seen.borrow_mut().push(state.borrow().loading);
        }
        self.requests.borrow_mut().push(request);
        if let Some(token) = self.cancel_on_send.borrow().as_ref() {
            token.cancel();
        }
        if self.hang.get() {
            return std::future::pending().await;
        }
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_string())))
    }
}

pub fn session_for(role: Role) -> SessionRecord {
    SessionRecord::new(
        "tok-123",
        SessionUser {
            id: "u1".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            role,
        },
    )
}

/// Client wired to a fake transport and an in-memory session
pub struct TestClient {
    pub api: ApiClient,
    pub transport: Rc<FakeTransport>,
    pub session: Rc<MemorySessionStore>,
    pub state: Rc<RefCell<FetchState>>,
}

impl TestClient {
    pub fn anonymous() -> Self {
        Self::with_session(MemorySessionStore::new())
    }

    pub fn logged_in(role: Role) -> Self {
        Self::with_session(MemorySessionStore::with_session(&session_for(role)))
    }

    pub fn with_session(session: MemorySessionStore) -> Self {
        let transport = FakeTransport::new();
        let session = Rc::new(session);
        let state = Rc::new(RefCell::new(FetchState::default()));
        transport.watch(state.clone());
        let executor = RequestExecutor::new(transport.clone(), state.clone());
        Self {
            api: ApiClient::new(BASE_URL, session.clone(), executor),
            transport,
            session,
            state,
        }
    }
}
