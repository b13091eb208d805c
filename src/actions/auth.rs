//! Signup, login and logout flows.

use tokio_util::sync::CancellationToken;

use crate::api::ApiClient;
use crate::fetcher::FetchError;
use crate::models::{ErrorRecord, SessionRecord, SignupResponse};
use crate::session::{SessionError, SessionStore};
use crate::validation::{validate_login, validate_signup, FieldErrors, LoginForm, SignupForm};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// Rejected before any request was made
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),
    #[error(transparent)]
    Request(#[from] FetchError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl SubmitError {
    /// Banner content, if this failure gets one
    pub fn banner(&self) -> Option<ErrorRecord> {
        match self {
            SubmitError::Invalid(_) | SubmitError::Request(FetchError::Cancelled) => None,
            SubmitError::Request(err) => Some(err.to_record()),
            SubmitError::Session(err) => Some(ErrorRecord::message(err.to_string())),
        }
    }
}

/// Validate and create an account. Stores a session when the backend
/// hands one out with the new account.
pub async fn submit_signup(
    api: &ApiClient,
    form: &SignupForm,
    cancel: &CancellationToken,
) -> Result<SignupResponse, SubmitError> {
    let request = validate_signup(form).map_err(SubmitError::Invalid)?;
    let account = api.signup(&request, cancel).await?;
    if let Some(session) = account.session() {
        api.session().write(&session)?;
    }
    Ok(account)
}

/// Validate, log in and persist the session record
pub async fn submit_login(
    api: &ApiClient,
    form: &LoginForm,
    cancel: &CancellationToken,
) -> Result<SessionRecord, SubmitError> {
    let request = validate_login(form).map_err(SubmitError::Invalid)?;
    let session = api.login(&request, cancel).await?;
    api.session().write(&session)?;
    Ok(session)
}

pub fn logout(session: &dyn SessionStore) {
    session.clear();
    log::info!("[SESSION] Logged out");
}
