//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use tokio_util::sync::CancellationToken;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::fetcher::{FetchState, RequestExecutor};
use crate::http::Transport;
use crate::session::SessionStore;

struct Services {
    session: Rc<dyn SessionStore>,
    transport: Rc<dyn Transport>,
}

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Browser-bound handles, kept on the local arena
    services: StoredValue<Services, LocalStorage>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        session: Rc<dyn SessionStore>,
        transport: Rc<dyn Transport>,
    ) -> Self {
        Self {
            config: StoredValue::new(config),
            services: StoredValue::new_local(Services { session, transport }),
        }
    }

    pub fn session(&self) -> Rc<dyn SessionStore> {
        self.services.with_value(|s| s.session.clone())
    }

    /// API client publishing into a screen's fetch state
    pub fn api(&self, state: RwSignal<FetchState>) -> ApiClient {
        let (session, transport) = self
            .services
            .with_value(|s| (s.session.clone(), s.transport.clone()));
        let base_url = self.config.with_value(|c| c.api_base_url.clone());
        ApiClient::new(base_url, session, RequestExecutor::new(transport, Rc::new(state)))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Token cancelled when the current screen is torn down
pub fn screen_cancellation() -> StoredValue<CancellationToken> {
    let token = CancellationToken::new();
    let on_teardown = token.clone();
    on_cleanup(move || on_teardown.cancel());
    StoredValue::new(token)
}
