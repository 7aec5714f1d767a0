//! Application context shared by every page.

use api::ApiClient;
use dioxus::prelude::*;
use navigation::Navigator;
use store::{ClientConfig, Session, SessionSnapshot};

/// Session backend of the current platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Everything a page needs to talk to the backend and navigate.
#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient<PlatformStore>,
    pub navigator: Navigator,
    pub config: ClientConfig,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        let session = Session::new(PlatformStore::default());
        Self {
            api: ApiClient::new(config.api.base_url.clone(), session),
            navigator: Navigator::new(),
            config,
        }
    }

    pub fn session(&self) -> &Session<PlatformStore> {
        self.api.session()
    }

    /// Current session state, read fresh from storage.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.api.session().snapshot()
    }
}

/// Get the application context provided by [`AppProvider`].
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// Provides an [`AppContext`] built from `config` to its children.
#[component]
pub fn AppProvider(config: ClientConfig, children: Element) -> Element {
    use_context_provider(|| {
        tracing::info!(base_url = %config.api.base_url, "api client ready");
        AppContext::new(config.clone())
    });

    rsx! {
        {children}
    }
}
