//! User Endpoints

use tokio_util::sync::CancellationToken;

use super::ApiClient;
use crate::fetcher::FetchError;
use crate::http::RequestDescriptor;
use crate::models::User;

impl ApiClient {
    /// `GET /users`
    pub async fn list_users(&self, cancel: &CancellationToken) -> Result<Vec<User>, FetchError> {
        let users: Vec<User> = self
            .fetch(RequestDescriptor::get(self.endpoint(&["users"])), cancel)
            .await?;
        log::info!("[API] Loaded {} users", users.len());
        Ok(users)
    }
}
