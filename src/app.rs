//! Taskboard App
//!
//! Wires the browser services into context and declares the routes.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::gate::ProtectedRoute;
use crate::http::ReqwestTransport;
use crate::pages::{
    DashboardPage, ForgotPasswordPage, LegalDocument, LegalPage, LoginPage, NotFoundPage,
    SignupPage, UsersPage,
};
use crate::session::LocalStorageSessionStore;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!("[APP] Using API at {}", config.api_base_url);
    let session = Rc::new(LocalStorageSessionStore::new(config.session_key.clone()));
    provide_context(AppContext::new(config, session, Rc::new(ReqwestTransport::new())));

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=LoginPage />
                    <Route path=path!("/signup") view=SignupPage />
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                    <Route
                        path=path!("/terms")
                        view=|| view! { <LegalPage document=LegalDocument::Terms /> }
                    />
                    <Route
                        path=path!("/privacy")
                        view=|| view! { <LegalPage document=LegalDocument::Privacy /> }
                    />
                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/users")
                        view=|| view! { <ProtectedRoute><UsersPage /></ProtectedRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
