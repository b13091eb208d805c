//! Task Endpoints

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::ApiClient;
use crate::fetcher::FetchError;
use crate::http::RequestDescriptor;
use crate::models::Task;

#[derive(Serialize)]
struct TitleBody<'a> {
    title: &'a str,
}

/// Body of a delete answer. The backend echoes a `status` field that
/// decides whether the task is gone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteReceipt {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Per-user task lists come back nested or flat depending on the backend
#[derive(Deserialize)]
#[serde(untagged)]
enum UserTasksPayload {
    Nested { tasks: Vec<Task> },
    Flat(Vec<Task>),
}

impl ApiClient {
    /// `GET /tasks` for the logged-in user
    pub async fn list_tasks(&self, cancel: &CancellationToken) -> Result<Vec<Task>, FetchError> {
        let tasks: Vec<Task> = self
            .fetch(RequestDescriptor::get(self.endpoint(&["tasks"])), cancel)
            .await?;
        log::info!("[API] Loaded {} tasks", tasks.len());
        Ok(tasks)
    }

    /// `GET /users/{userId}/tasks` (admin view)
    pub async fn list_user_tasks(
        &self,
        user_id: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<Task>, FetchError> {
        let payload: UserTasksPayload = self
            .fetch(
                RequestDescriptor::get(self.endpoint(&["users", user_id, "tasks"])),
                cancel,
            )
            .await?;
        let tasks = match payload {
            UserTasksPayload::Nested { tasks } | UserTasksPayload::Flat(tasks) => tasks,
        };
        log::info!("[API] Loaded {} tasks for user {}", tasks.len(), user_id);
        Ok(tasks)
    }

    /// `POST /tasks`
    pub async fn create_task(&self, title: &str, cancel: &CancellationToken) -> Result<Task, FetchError> {
        let descriptor = RequestDescriptor::post(self.endpoint(&["tasks"]))
            .json(Self::encode(&TitleBody { title })?);
        self.fetch(descriptor, cancel).await
    }

    /// `PUT /tasks/{id}`
    pub async fn update_task(
        &self,
        id: &str,
        title: &str,
        cancel: &CancellationToken,
    ) -> Result<Task, FetchError> {
        let descriptor = RequestDescriptor::put(self.endpoint(&["tasks", id]))
            .json(Self::encode(&TitleBody { title })?);
        self.fetch(descriptor, cancel).await
    }

    /// `DELETE /tasks/{id}`. Empty or unfamiliar bodies yield an empty receipt.
    pub async fn delete_task(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<DeleteReceipt, FetchError> {
        let response = self
            .send(RequestDescriptor::delete(self.endpoint(&["tasks", id])), cancel)
            .await?;
        Ok(serde_json::from_value(response.data).unwrap_or_default())
    }
}
