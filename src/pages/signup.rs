//! Signup Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::actions::{self, SubmitError};
use crate::components::{ErrorBanner, FieldError};
use crate::context::{screen_cancellation, use_app_context};
use crate::fetcher::FetchState;
use crate::models::{ErrorRecord, Role};
use crate::validation::{
    FieldErrors, SignupForm, FIELD_CONFIRM, FIELD_EMAIL, FIELD_NAME, FIELD_PASSWORD, FIELD_ROLE,
    FIELD_TERMS,
};

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let fetch_state = RwSignal::new(FetchState::default());
    let cancel = screen_cancellation();

    let form = RwSignal::new(SignupForm::default());
    let (field_errors, set_field_errors) = signal(FieldErrors::default());
    let (banner, set_banner) = signal::<Option<ErrorRecord>>(None);
    let loading = move || fetch_state.with(|s| s.loading);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let values = form.get();
        let api = ctx.api(fetch_state);
        let token = cancel.get_value();
        let navigate = navigate.clone();
        set_banner.set(None);
        set_field_errors.set(FieldErrors::default());
        spawn_local(async move {
            match actions::submit_signup(&api, &values, &token).await {
                Ok(account) => {
                    let next = if api.session().is_logged_in() { "/dashboard" } else { "/" };
                    log::info!("[SIGNUP] Account {} created, going to {}", account.id, next);
                    navigate(next, Default::default());
                }
                Err(SubmitError::Invalid(errors)) => set_field_errors.set(errors),
                Err(err) => set_banner.set(err.banner()),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Create an Account"</h2>
                <p class="auth-subtitle">
                    "Already have an account? " <A href="/">"Sign In"</A>
                </p>

                <form class="auth-form" on:submit=on_submit>
                    <ErrorBanner error=banner />

                    <div class="field">
                        <label for="username">"Full Name"</label>
                        <input
                            id="username"
                            type="text"
                            placeholder="John Doe"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <FieldError errors=field_errors field=FIELD_NAME />
                    </div>

                    <div class="field">
                        <label for="email">"Email Address"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <FieldError errors=field_errors field=FIELD_EMAIL />
                    </div>

                    <div class="field">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <FieldError errors=field_errors field=FIELD_PASSWORD />
                    </div>

                    <div class="field">
                        <label for="confirmPassword">"Confirm Password"</label>
                        <input
                            id="confirmPassword"
                            type="password"
                            placeholder="Repeat password"
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=move |ev| {
                                form.update(|f| f.confirm_password = event_target_value(&ev))
                            }
                        />
                        <FieldError errors=field_errors field=FIELD_CONFIRM />
                    </div>

                    <div class="field">
                        <label for="role">"Select Role"</label>
                        <select
                            id="role"
                            prop:value=move || form.with(|f| f.role.clone())
                            on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                        >
                            <option value=Role::User.as_str().to_string()>"Regular User"</option>
                            <option value=Role::Admin.as_str().to_string()>"Admin"</option>
                        </select>
                        <FieldError errors=field_errors field=FIELD_ROLE />
                    </div>

                    <div class="field terms">
                        <input
                            id="acceptTerms"
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.accept_terms)
                            on:change=move |ev| form.update(|f| f.accept_terms = event_target_checked(&ev))
                        />
                        <label for="acceptTerms">
                            "I agree to the " <A href="/terms">"Terms of Service"</A>
                            " and " <A href="/privacy">"Privacy Policy"</A>
                        </label>
                    </div>
                    <FieldError errors=field_errors field=FIELD_TERMS />

                    <button type="submit" class="primary-btn" disabled=loading>
                        {move || if loading() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
