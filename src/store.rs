//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;
use crate::task_list::{find_task, ListChange};

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Tasks currently shown
    pub tasks: Vec<Task>,
    /// Task being edited in the input (None = adding)
    pub editing_id: Option<String>,
    /// Text of the add/update input
    pub draft: String,
    /// Owner of the shown tasks when it isn't the signed-in user
    pub viewed_user: Option<String>,
}

pub type BoardStore = Store<BoardState>;

// ========================
// Store Helper Functions
// ========================

/// Apply a request outcome to the task list
pub fn store_apply(store: &BoardStore, change: ListChange) {
    if change.is_unchanged() {
        return;
    }
    change.apply(&mut store.tasks().write());
}

/// Switch to another user's board (or back to our own with `None`)
pub fn store_view_user(store: &BoardStore, user_id: Option<String>) {
    store_finish_editing(store);
    store.viewed_user().set(user_id);
}

/// Load a task's title into the input and remember its id
pub fn store_begin_edit(store: &BoardStore, id: &str) {
    let title = find_task(&store.tasks().read(), id).map(|t| t.title.clone());
    if let Some(title) = title {
        store.draft().set(title);
        store.editing_id().set(Some(id.to_string()));
    }
}

/// Back to "add" mode with an empty input
pub fn store_finish_editing(store: &BoardStore) {
    store.editing_id().set(None);
    store.draft().set(String::new());
}
