//! User List Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::actions;
use crate::api::encode_segment;
use crate::components::ErrorBanner;
use crate::context::{screen_cancellation, use_app_context};
use crate::fetcher::{FetchError, FetchState};
use crate::models::User;

/// Dashboard link scoped to one user
pub fn user_tasks_href(user_id: &str) -> String {
    format!("/dashboard?userId={}", encode_segment(user_id))
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctx = use_app_context();
    let fetch_state = RwSignal::new(FetchState::default());
    let cancel = screen_cancellation();
    let users = RwSignal::new(Vec::<User>::new());

    // Loaded once per mount; anonymous viewers are being redirected anyway
    if ctx.session().is_logged_in() {
        let api = ctx.api(fetch_state);
        let token = cancel.get_value();
        spawn_local(async move {
            match actions::load_users(&api, &token).await {
                Ok(loaded) => {
                    log::info!("[USERS] Loaded {} users", loaded.len());
                    users.set(loaded);
                }
                Err(FetchError::Cancelled) => {}
                Err(err) => log::warn!("[USERS] Loading users failed: {}", err),
            }
        });
    }

    let loading = move || fetch_state.with(|s| s.loading);
    let error = Signal::derive(move || fetch_state.with(|s| s.error.clone()));

    view! {
        <div class="users-page">
            <header class="dashboard-header">
                <h1>"All Users"</h1>
                <A href="/dashboard">"Back to my tasks"</A>
            </header>

            <ErrorBanner error=error />

            <Show when=move || !loading() fallback=|| view! { <p class="loading">"Loading users..."</p> }>
                <Show
                    when=move || users.with(|u| !u.is_empty())
                    fallback=|| view! { <p class="empty-state">"No users found."</p> }
                >
                    <table class="users-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || users.get()
                                key=|user| user.id.clone()
                                children=move |user| {
                                    let href = user_tasks_href(&user.id);
                                    view! {
                                        <tr>
                                            <td>{user.name}</td>
                                            <td>{user.email}</td>
                                            <td>
                                                <A href=href>"View Tasks"</A>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
