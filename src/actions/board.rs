//! Dashboard and user list flows.

use tokio_util::sync::CancellationToken;

use crate::api::ApiClient;
use crate::fetcher::FetchError;
use crate::models::User;
use crate::task_list::ListChange;

/// `status` a delete answer must carry in its body before the task
/// leaves the list
pub const DELETE_OK: u16 = 200;

/// Own tasks, or another user's when `user_id` is set (admin view)
pub async fn load_board(
    api: &ApiClient,
    user_id: Option<&str>,
    cancel: &CancellationToken,
) -> Result<ListChange, FetchError> {
    let tasks = match user_id {
        Some(id) => api.list_user_tasks(id, cancel).await?,
        None => api.list_tasks(cancel).await?,
    };
    Ok(ListChange::Reset(tasks))
}

/// Create a task, or update the one being edited. Blank input does nothing.
///
/// While another user's board is shown (`viewed_user`), only edits are
/// sent: a new task would belong to the signed-in account, not to them.
pub async fn save_task(
    api: &ApiClient,
    viewed_user: Option<&str>,
    editing_id: Option<&str>,
    input: &str,
    cancel: &CancellationToken,
) -> Result<ListChange, FetchError> {
    let title = input.trim();
    if title.is_empty() {
        return Ok(ListChange::Unchanged);
    }
    match editing_id {
        None if viewed_user.is_some() => {
            log::warn!("[BOARD] Not creating a task on another user's board");
            Ok(ListChange::Unchanged)
        }
        Some(id) => {
            let task = api.update_task(id, title, cancel).await?;
            log::info!("[BOARD] Updated task {}", id);
            Ok(ListChange::Replace {
                id: id.to_string(),
                task,
            })
        }
        None => {
            let task = api.create_task(title, cancel).await?;
            log::info!("[BOARD] Created task {}", task.id);
            Ok(ListChange::Append(task))
        }
    }
}

pub async fn remove_task(
    api: &ApiClient,
    id: &str,
    cancel: &CancellationToken,
) -> Result<ListChange, FetchError> {
    let receipt = api.delete_task(id, cancel).await?;
    if receipt.status == Some(DELETE_OK) {
        log::info!("[BOARD] Deleted task {}", id);
        Ok(ListChange::Remove(id.to_string()))
    } else {
        log::warn!("[BOARD] Delete of {} answered {:?}, keeping it", id, receipt.status);
        Ok(ListChange::Unchanged)
    }
}

pub async fn load_users(api: &ApiClient, cancel: &CancellationToken) -> Result<Vec<User>, FetchError> {
    api.list_users(cancel).await
}
