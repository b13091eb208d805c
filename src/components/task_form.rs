//! Task Form Component
//!
//! Single input used both to add a task and to rename the one being edited.

use leptos::prelude::*;

use crate::store::{BoardStateStoreFields, BoardStore};

#[component]
pub fn TaskForm(
    store: BoardStore,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing = move || store.editing_id().with(|id| id.is_some());
    // On another user's board the input only renames their tasks
    let read_only = move || store.viewed_user().with(Option::is_some) && !editing();

    view! {
        <form
            class="task-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <input
                type="text"
                placeholder=move || {
                    if read_only() { "Pick a task to edit" } else { "Enter a new task..." }
                }
                disabled=read_only
                prop:value=move || store.draft().get()
                on:input=move |ev| store.draft().set(event_target_value(&ev))
            />
            <button
                type="submit"
                class=move || if editing() { "save-btn update" } else { "save-btn" }
                disabled=move || busy.get() || read_only()
            >
                {move || if editing() { "Update Task" } else { "Add Task" }}
            </button>
            <Show when=editing>
                <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
