use dioxus::prelude::*;
use futures_util::StreamExt;
use navigation::{resolve, Action, NavTicket, Resolution, Route};
use store::ClientConfig;
use ui::{browser, use_app, AppProvider, Navbar, RoutePage};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CLIENT_TOML: &str = include_str!("../client.toml");

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("failed to initialise logging: {e}");
    }
    dioxus::launch(App);
}

/// Embedded `client.toml`, with the API base URL optionally overridden at
/// build time.
fn load_config() -> ClientConfig {
    let config = ClientConfig::from_toml(CLIENT_TOML).unwrap_or_else(|e| {
        tracing::error!("{e}; falling back to defaults");
        ClientConfig::default()
    });
    match option_env!("SHELFMARK_API_BASE_URL") {
        Some(url) => config.with_api_base_url(url),
        None => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProvider {
            config,
            Shell {}
        }
    }
}

/// Resolves the location fragment on every change and mounts the page it
/// names.
#[component]
fn Shell() -> Element {
    let app = use_app();
    let mut fragment = use_signal(browser::current_fragment);

    let changes = use_coroutine(move |mut rx: UnboundedReceiver<String>| async move {
        while let Some(next) = rx.next().await {
            fragment.set(next);
        }
    });
    use_hook(move || listen_for_hash_changes(changes.tx()));

    let navigator = app.navigator.clone();
    let navigation = use_memo(move || {
        let resolution: Resolution = resolve(&fragment(), &app.snapshot());
        let ticket = resolution.route().map(|_| navigator.begin());
        (resolution, ticket)
    });

    use_effect(move || {
        if let Action::Redirect(route) = &navigation.read().0.action {
            tracing::info!(to = %route.to_fragment(), "redirecting");
            browser::navigate_to(route);
        }
    });

    let (resolution, ticket) = navigation();
    tracing::debug!(action = ?resolution.action, "navigation resolved");
    let page: Option<(Route, NavTicket)> = resolution.route().cloned().zip(ticket);

    rsx! {
        Navbar { chrome: resolution.chrome, active: resolution.active_link }
        main {
            class: "content",
            for (route, ticket) in page {
                RoutePage { key: "{ticket.generation()}", route, ticket }
            }
        }
    }
}

/// Forward every `hashchange` into the shell's coroutine.
fn listen_for_hash_changes(tx: UnboundedSender<String>) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            tracing::error!("no window, hash routing disabled");
            return;
        };
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            if let Err(e) = tx.unbounded_send(browser::current_fragment()) {
                tracing::warn!("dropping fragment change: {e}");
            }
        }));
        if let Err(e) = window
            .add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref())
        {
            tracing::error!("failed to listen for hash changes: {e:?}");
        }
        // The shell lives as long as the page.
        callback.forget();
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        drop(tx);
    }
}
