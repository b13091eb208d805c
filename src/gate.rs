//! Access Gate
//!
//! Sends anonymous viewers of protected screens back to the login route.
//! The check runs once per mount against the stored `isLoggedIn` flag.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::context::use_app_context;
use crate::session::SessionStore;

pub const ENTRY_ROUTE: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(&'static str),
}

/// Fails closed: a missing or unreadable session redirects
pub fn gate_decision(session: &dyn SessionStore) -> GateDecision {
    if session.is_logged_in() {
        GateDecision::Allow
    } else {
        GateDecision::Redirect(ENTRY_ROUTE)
    }
}

/// Wraps a protected screen.
///
/// The children still mount; a redirect is only scheduled.
#[component]
pub fn ProtectedRoute(children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let decision = gate_decision(ctx.session().as_ref());
    let navigate = use_navigate();

    Effect::new(move |_| {
        if let GateDecision::Redirect(route) = decision {
            log::info!("[GATE] No session, redirecting to {}", route);
            navigate(
                route,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    children()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::session::MemorySessionStore;
    use crate::test_support::session_for;

    #[test]
    fn test_absent_or_malformed_session_redirects() {
        let stores = [
            MemorySessionStore::new(),
            MemorySessionStore::with_raw("{oops"),
            MemorySessionStore::with_raw("{}"),
            MemorySessionStore::with_raw(r#"{"isLoggedIn":false,"token":"t"}"#),
        ];
        for store in &stores {
            assert_eq!(gate_decision(store), GateDecision::Redirect(ENTRY_ROUTE));
        }
    }

    #[test]
    fn test_logged_in_flag_allows() {
        let full = MemorySessionStore::with_session(&session_for(Role::User));
        let flag_only = MemorySessionStore::with_raw(r#"{"isLoggedIn":true}"#);
        assert_eq!(gate_decision(&full), GateDecision::Allow);
        assert_eq!(gate_decision(&flag_only), GateDecision::Allow);
    }

    #[test]
    fn test_unfamiliar_user_shapes_still_allow() {
        let stores = [
            MemorySessionStore::with_raw(
                r#"{"token":"t","isLoggedIn":true,"user":{"id":"u1","username":"ada","email":"a@b.c","role":"manager"}}"#,
            ),
            MemorySessionStore::with_raw(r#"{"isLoggedIn":true,"user":{"id":"u1"}}"#),
            MemorySessionStore::with_raw(r#"{"isLoggedIn":true,"user":{"_id":"u1","name":"Ada"}}"#),
        ];
        for store in &stores {
            assert_eq!(gate_decision(store), GateDecision::Allow);
        }
    }
}
