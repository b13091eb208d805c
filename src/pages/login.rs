//! Login Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::actions::{self, SubmitError};
use crate::components::{ErrorBanner, FieldError};
use crate::context::{screen_cancellation, use_app_context};
use crate::fetcher::FetchState;
use crate::models::ErrorRecord;
use crate::validation::{FieldErrors, LoginForm, FIELD_EMAIL, FIELD_PASSWORD};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let fetch_state = RwSignal::new(FetchState::default());
    let cancel = screen_cancellation();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::default());
    let (banner, set_banner) = signal::<Option<ErrorRecord>>(None);
    let loading = move || fetch_state.with(|s| s.loading);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            email: email.get(),
            password: password.get(),
        };
        let api = ctx.api(fetch_state);
        let token = cancel.get_value();
        let navigate = navigate.clone();
        set_banner.set(None);
        spawn_local(async move {
            match actions::submit_login(&api, &form, &token).await {
                Ok(_) => navigate("/dashboard", Default::default()),
                Err(SubmitError::Invalid(errors)) => set_field_errors.set(errors),
                Err(err) => set_banner.set(err.banner()),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Sign in to your account"</h2>
                <p class="auth-subtitle">
                    "Or " <A href="/signup">"create a new account"</A>
                </p>

                <form class="auth-form" on:submit=on_submit>
                    <div class="field">
                        <input
                            type="email"
                            id="email"
                            placeholder="Email address"
                            autocomplete="email"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            on:focus=move |_| set_field_errors.update(|e| e.clear(FIELD_EMAIL))
                        />
                        <FieldError errors=field_errors field=FIELD_EMAIL />
                    </div>

                    <div class="field">
                        <input
                            type="password"
                            id="password"
                            placeholder="Password"
                            autocomplete="current-password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            on:focus=move |_| set_field_errors.update(|e| e.clear(FIELD_PASSWORD))
                        />
                        <FieldError errors=field_errors field=FIELD_PASSWORD />
                    </div>

                    <ErrorBanner error=banner />

                    <div class="auth-row">
                        <label class="remember">
                            <input type="checkbox" />
                            <span>"Remember me"</span>
                        </label>
                        <A href="/forgot-password">"Forgot password?"</A>
                    </div>

                    <button type="submit" class="primary-btn" disabled=loading>
                        {move || if loading() { "Logging in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
