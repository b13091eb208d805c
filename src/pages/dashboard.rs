//! Dashboard Page
//!
//! The signed-in user's tasks, or another user's when opened from the
//! user list with `?userId=`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use reactive_stores::Store;

use crate::actions;
use crate::components::{ErrorBanner, TaskForm, TaskRow};
use crate::context::{screen_cancellation, use_app_context};
use crate::fetcher::{FetchError, FetchState};
use crate::store::{
    store_apply, store_begin_edit, store_finish_editing, store_view_user, BoardState,
    BoardStateStoreFields,
};

pub const ADMIN_ONLY_NOTICE: &str = "Only admins can access user list";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let query = use_query_map();
    let fetch_state = RwSignal::new(FetchState::default());
    let cancel = screen_cancellation();
    let store = Store::new(BoardState::default());

    let is_admin = ctx.session().read().is_some_and(|record| record.is_admin());
    let viewed_user = Memo::new(move |_| query.with(|q| q.get("userId")));

    // Reload whenever the viewed user changes
    Effect::new(move |_| {
        let user_id = viewed_user.get();
        store_view_user(&store, user_id.clone());
        let api = ctx.api(fetch_state);
        let token = cancel.get_value();
        spawn_local(async move {
            match actions::load_board(&api, user_id.as_deref(), &token).await {
                Ok(change) => store_apply(&store, change),
                Err(FetchError::Cancelled) => {}
                Err(err) => log::warn!("[BOARD] Loading tasks failed: {}", err),
            }
        });
    });

    let on_save = Callback::new(move |_: ()| {
        let viewing = store.viewed_user().get_untracked();
        let editing = store.editing_id().get_untracked();
        let draft = store.draft().get_untracked();
        let api = ctx.api(fetch_state);
        let token = cancel.get_value();
        spawn_local(async move {
            let saved =
                actions::save_task(&api, viewing.as_deref(), editing.as_deref(), &draft, &token).await;
            match saved {
                Ok(change) if change.is_unchanged() => {}
                Ok(change) => {
                    store_apply(&store, change);
                    store_finish_editing(&store);
                }
                Err(FetchError::Cancelled) => {}
                Err(err) => log::warn!("[BOARD] Saving task failed: {}", err),
            }
        });
    });

    let on_cancel = Callback::new(move |_: ()| store_finish_editing(&store));

    let on_edit = Callback::new(move |id: String| store_begin_edit(&store, &id));

    let on_delete = Callback::new(move |id: String| {
        let api = ctx.api(fetch_state);
        let token = cancel.get_value();
        spawn_local(async move {
            match actions::remove_task(&api, &id, &token).await {
                Ok(change) => {
                    let removed = !change.is_unchanged();
                    store_apply(&store, change);
                    if removed && store.editing_id().get_untracked().as_deref() == Some(id.as_str()) {
                        store_finish_editing(&store);
                    }
                }
                Err(FetchError::Cancelled) => {}
                Err(err) => log::warn!("[BOARD] Deleting task failed: {}", err),
            }
        });
    });

    let go_users = {
        let navigate = navigate.clone();
        move |_| {
            if is_admin {
                navigate("/users", Default::default());
            }
        }
    };

    let log_out = move |_| {
        actions::logout(ctx.session().as_ref());
        navigate("/", Default::default());
    };

    let loading = Signal::derive(move || fetch_state.with(|s| s.loading));
    let error = Signal::derive(move || fetch_state.with(|s| s.error.clone()));

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>
                    {move || if viewed_user.with(Option::is_some) { "User Tasks" } else { "My Tasks" }}
                </h1>
                <div class="header-actions">
                    <button
                        class="users-btn"
                        disabled=!is_admin
                        title=if is_admin { "" } else { ADMIN_ONLY_NOTICE }
                        on:click=go_users
                    >
                        "All Users"
                    </button>
                    <button class="logout-btn" on:click=log_out>
                        "Log out"
                    </button>
                </div>
            </header>
            {(!is_admin).then(|| view! { <p class="notice">{ADMIN_ONLY_NOTICE}</p> })}

            <TaskForm store=store busy=loading on_submit=on_save on_cancel=on_cancel />

            <ErrorBanner error=error />
            {move || loading.get().then(|| view! { <p class="loading">"Loading..."</p> })}

            <Show
                when=move || store.tasks().with(|tasks| !tasks.is_empty())
                fallback=|| view! { <p class="empty-state">"No tasks yet. Add one above!"</p> }
            >
                <ul class="task-list">
                    <For
                        each=move || store.tasks().get()
                        key=|task| (task.id.clone(), task.title.clone(), task.completed)
                        children=move |task| {
                            view! { <TaskRow task=task on_edit=on_edit on_delete=on_delete /> }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
