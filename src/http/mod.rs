//! HTTP Plumbing
//!
//! Request descriptors, the prepared wire request and the transport seam
//! the request executor sends through.

mod reqwest_transport;

use async_trait::async_trait;
use serde_json::Value;

pub use reqwest_transport::ReqwestTransport;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_MIME: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Everything needed to issue one request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: Method,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Resolve headers and body into what goes on the wire.
    ///
    /// Caller headers override the JSON content type on a case-insensitive
    /// name match. GET requests never carry a body.
    pub fn prepare(&self) -> Result<PreparedRequest, serde_json::Error> {
        let mut headers = vec![(CONTENT_TYPE.to_string(), JSON_MIME.to_string())];
        for (name, value) in &self.headers {
            match headers.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
                Some(existing) => existing.1 = value.clone(),
                None => headers.push((name.clone(), value.clone())),
            }
        }

        let body = match (&self.method, &self.body) {
            (Method::Get, _) | (_, None) => None,
            (_, Some(body)) => Some(serde_json::to_string(body)?),
        };

        Ok(PreparedRequest {
            method: self.method,
            url: self.url.clone(),
            headers,
            body,
        })
    }
}

/// Request as handed to a transport
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and unparsed body of a completed exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// No response at all (offline, refused, CORS)
    #[error("{0}")]
    Network(String),
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Sends prepared requests. Browser futures are not `Send`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, TransportError>;
}
