use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Forgot your password?"</h2>
                <p>"Password reset is not available yet. Please contact an administrator."</p>
                <A href="/">"Back to Sign In"</A>
            </div>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Not Found"</h2>
                <A href="/">"Go to Sign In"</A>
            </div>
        </div>
    }
}
