//! Request Executor
//!
//! Runs one request at a time per call site and mirrors its lifecycle into
//! observable state: in-flight flag, last error, last payload. Failures of
//! every kind are normalized into an [`ErrorRecord`].

use std::cell::RefCell;
use std::pin::pin;
use std::rc::Rc;

use futures::future::{select, Either};
use leptos::prelude::*;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::http::{RawResponse, RequestDescriptor, Transport, TransportError};
use crate::models::ErrorRecord;

pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";
pub const CANCELLED_MESSAGE: &str = "Request was cancelled";

/// What a screen renders from a request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchState {
    pub loading: bool,
    pub error: Option<ErrorRecord>,
    pub data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    Started,
    Succeeded(Value),
    Failed(ErrorRecord),
    Finished,
}

impl FetchState {
    pub fn apply(&mut self, change: StateChange) {
        match change {
            StateChange::Started => {
                self.loading = true;
                self.error = None;
                self.data = None;
            }
            StateChange::Succeeded(data) => self.data = Some(data),
            StateChange::Failed(error) => self.error = Some(error),
            StateChange::Finished => self.loading = false,
        }
    }
}

/// Where fetch state lives: a signal in the UI, a cell in tests
pub trait FetchStateSink {
    fn apply(&self, change: StateChange);
}

impl FetchStateSink for RwSignal<FetchState> {
    fn apply(&self, change: StateChange) {
        // The owning screen may already be gone
        let _ = self.try_update(|state| state.apply(change));
    }
}

impl FetchStateSink for RefCell<FetchState> {
    fn apply(&self, change: StateChange) {
        self.borrow_mut().apply(change);
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed with status {status}: {}", .record.message)]
    Status { status: u16, record: ErrorRecord },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("request was cancelled")]
    Cancelled,
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("{0}")]
    Decode(String),
}

impl FetchError {
    /// Shape shown to the user
    pub fn to_record(&self) -> ErrorRecord {
        match self {
            FetchError::Status { record, .. } => record.clone(),
            FetchError::Transport(err) => {
                let text = err.to_string();
                if text.trim().is_empty() {
                    ErrorRecord::message(UNKNOWN_ERROR_MESSAGE)
                } else {
                    ErrorRecord::message(text)
                }
            }
            FetchError::Cancelled => ErrorRecord::message(CANCELLED_MESSAGE),
            FetchError::Encode(_) | FetchError::Decode(_) => ErrorRecord::message(self.to_string()),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Turn a failure body into an error record.
///
/// A body matching the record shape is used as is, anything else becomes
/// the message verbatim.
pub fn normalize_failure(status: u16, body: &str) -> ErrorRecord {
    if let Ok(record) = serde_json::from_str::<ErrorRecord>(body) {
        return record;
    }
    if body.trim().is_empty() {
        ErrorRecord::message(format!("Request failed with status {}", status))
    } else {
        ErrorRecord::message(body)
    }
}

fn parse_success(raw: &RawResponse) -> Result<Value, FetchError> {
    if raw.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&raw.body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Successful exchange: status plus parsed JSON (null for an empty body)
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: u16,
    pub data: Value,
}

/// Clears the in-flight flag however `send` exits
struct LoadingGuard<'a> {
    sink: &'a dyn FetchStateSink,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.sink.apply(StateChange::Finished);
    }
}

#[derive(Clone)]
pub struct RequestExecutor {
    transport: Rc<dyn Transport>,
    state: Rc<dyn FetchStateSink>,
}

impl RequestExecutor {
    pub fn new(transport: Rc<dyn Transport>, state: Rc<dyn FetchStateSink>) -> Self {
        Self { transport, state }
    }

    /// Issue one request and publish its outcome.
    ///
    /// Cancellation leaves error and data untouched.
    pub async fn send(
        &self,
        descriptor: RequestDescriptor,
        cancel: &CancellationToken,
    ) -> Result<FetchResponse, FetchError> {
        self.state.apply(StateChange::Started);
        let _loading = LoadingGuard {
            sink: self.state.as_ref(),
        };

        log::debug!("[FETCH] {} {}", descriptor.method.as_str(), descriptor.url);
        match self.execute(&descriptor, cancel).await {
            Ok(response) => {
                self.state.apply(StateChange::Succeeded(response.data.clone()));
                Ok(response)
            }
            Err(FetchError::Cancelled) => {
                log::debug!("[FETCH] {} {} cancelled", descriptor.method.as_str(), descriptor.url);
                Err(FetchError::Cancelled)
            }
            Err(err) => {
                log::warn!("[FETCH] {} {} failed: {}", descriptor.method.as_str(), descriptor.url, err);
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Publish a failure found after the exchange, e.g. an unexpected payload
    pub fn report(&self, err: &FetchError) {
        if !matches!(err, FetchError::Cancelled) {
            self.state.apply(StateChange::Failed(err.to_record()));
        }
    }

    async fn execute(
        &self,
        descriptor: &RequestDescriptor,
        cancel: &CancellationToken,
    ) -> Result<FetchResponse, FetchError> {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }
        let request = descriptor
            .prepare()
            .map_err(|e| FetchError::Encode(e.to_string()))?;

        let sending = self.transport.send(request);
        let cancelled = pin!(cancel.cancelled());
        let raw = match select(sending, cancelled).await {
            Either::Left((result, _)) => result?,
            Either::Right(_) => return Err(FetchError::Cancelled),
        };
        // The screen may have gone away while the answer was arriving
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        if !raw.is_success() {
            return Err(FetchError::Status {
                status: raw.status,
                record: normalize_failure(raw.status, &raw.body),
            });
        }
        Ok(FetchResponse {
            status: raw.status,
            data: parse_success(&raw)?,
        })
    }
}
