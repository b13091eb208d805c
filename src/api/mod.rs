//! REST API Client
//!
//! Typed operations over the backend, organized by domain. Base URL,
//! bearer token and response unwrapping live here so screens never build
//! URLs or headers themselves.

mod auth;
mod tasks;
mod users;

pub use tasks::DeleteReceipt;

use std::rc::Rc;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::fetcher::{FetchError, FetchResponse, RequestExecutor};
use crate::http::{RequestDescriptor, AUTHORIZATION};
use crate::session::SessionStore;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Payload either wrapped as `{ "data": ... }` or bare
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } | Envelope::Bare(data) => data,
        }
    }
}

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: Rc<dyn SessionStore>,
    executor: RequestExecutor,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        session: Rc<dyn SessionStore>,
        executor: RequestExecutor,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            executor,
        }
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    /// Base URL joined with encoded path segments
    fn endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&encode_segment(segment));
        }
        url
    }

    /// Attach the bearer token when there is one
    fn authorized(&self, descriptor: RequestDescriptor) -> RequestDescriptor {
        match self.session.token() {
            Some(token) => descriptor.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => descriptor,
        }
    }

    fn encode<B: Serialize>(body: &B) -> Result<Value, FetchError> {
        serde_json::to_value(body).map_err(|e| FetchError::Encode(e.to_string()))
    }

    async fn send(
        &self,
        descriptor: RequestDescriptor,
        cancel: &CancellationToken,
    ) -> Result<FetchResponse, FetchError> {
        self.executor.send(self.authorized(descriptor), cancel).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
        cancel: &CancellationToken,
    ) -> Result<T, FetchError> {
        let response = self.send(descriptor, cancel).await?;
        self.decode(response.data)
    }

    fn decode<T: DeserializeOwned>(&self, data: Value) -> Result<T, FetchError> {
        serde_json::from_value::<Envelope<T>>(data)
            .map(Envelope::into_inner)
            .map_err(|e| self.reject(format!("Unexpected response from server: {}", e)))
    }

    /// Publish a payload problem in the same error slot as request failures
    fn reject(&self, message: String) -> FetchError {
        let err = FetchError::Decode(message);
        self.executor.report(&err);
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, Task};
    use crate::session::MemorySessionStore;
    use crate::test_support::TestClient;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_envelope_accepts_wrapped_and_bare() {
        let wrapped: Envelope<Vec<Task>> =
            serde_json::from_value(json!({"data": [{"_id": "t1", "title": "a"}]})).unwrap();
        let bare: Envelope<Vec<Task>> =
            serde_json::from_value(json!([{"_id": "t1", "title": "a"}])).unwrap();
        assert_eq!(wrapped.into_inner(), bare.into_inner());
    }

    #[test]
    fn test_segments_are_encoded() {
        assert_eq!(encode_segment("abc123"), "abc123");
        assert_eq!(encode_segment("a/b c?"), "a%2Fb%20c%3F");
    }

    #[test]
    fn test_endpoint_joins_base() {
        let client = TestClient::anonymous();
        assert_eq!(
            client.api.endpoint(&["users", "u 1", "tasks"]),
            "http://localhost:3003/api/users/u%201/tasks"
        );
    }

    #[tokio::test]
    async fn test_bearer_header_only_with_token() {
        let client = TestClient::logged_in(Role::User);
        client.transport.respond(200, json!({"data": []}));
        client.api.list_tasks(&CancellationToken::new()).await.unwrap();
        assert_eq!(
            client.transport.last_request().header("Authorization"),
            Some("Bearer tok-123")
        );

        let anonymous = TestClient::with_session(MemorySessionStore::with_raw(r#"{"isLoggedIn":true}"#));
        anonymous.transport.respond(200, json!({"data": []}));
        anonymous.api.list_tasks(&CancellationToken::new()).await.unwrap();
        assert_eq!(anonymous.transport.last_request().header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_reported() {
        let client = TestClient::logged_in(Role::User);
        client.transport.respond(200, json!({"data": {"nope": 1}}));

        let err = client.api.list_tasks(&CancellationToken::new()).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
        let message = client.state.borrow().error.clone().unwrap().message;
        assert!(message.starts_with("Unexpected response from server"));
    }
}
