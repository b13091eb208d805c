//! Auth Endpoints

use tokio_util::sync::CancellationToken;

use super::ApiClient;
use crate::fetcher::FetchError;
use crate::http::RequestDescriptor;
use crate::models::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};

impl ApiClient {
    /// `POST /auth/signup`
    pub async fn signup(
        &self,
        request: &SignupRequest,
        cancel: &CancellationToken,
    ) -> Result<SignupResponse, FetchError> {
        let descriptor = RequestDescriptor::post(self.endpoint(&["auth", "signup"]))
            .json(Self::encode(request)?);
        let account: SignupResponse = self.fetch(descriptor, cancel).await?;
        log::info!("[API] Created account {}", account.id);
        Ok(account)
    }

    /// `POST /auth/login`. A response without a usable token is rejected.
    pub async fn login(
        &self,
        request: &LoginRequest,
        cancel: &CancellationToken,
    ) -> Result<LoginResponse, FetchError> {
        let descriptor = RequestDescriptor::post(self.endpoint(&["auth", "login"]))
            .json(Self::encode(request)?);
        let session: LoginResponse = self.fetch(descriptor, cancel).await?;
        if !session.is_authenticated() {
            return Err(self.reject("Login response did not include a session token".to_string()));
        }
        log::info!("[API] Logged in");
        Ok(session)
    }
}
