//! Task Row Component
//!
//! One task in the dashboard list.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::Task;

#[component]
pub fn TaskRow(
    task: Task,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let done = task.is_done();
    let edit_id = task.id.clone();
    let delete_id = task.id.clone();

    view! {
        <li class=if done { "task-row completed" } else { "task-row" }>
            <span class="task-title">{task.title}</span>
            {task.completed.map(|completed| view! {
                <span class=if completed { "task-status done" } else { "task-status pending" }>
                    {if completed { "(Done)" } else { "(Pending)" }}
                </span>
            })}
            <div class="task-actions">
                <button class="edit-btn" on:click=move |_| on_edit.run(edit_id.clone())>
                    "Edit"
                </button>
                <DeleteConfirmButton on_confirm=Callback::new(move |_| on_delete.run(delete_id.clone())) />
            </div>
        </li>
    }
}
