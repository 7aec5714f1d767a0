use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use navigation::Route;

use crate::browser;
use crate::context::use_app;

/// Ends the session and reloads on the login page.
#[component]
pub fn LogoutPage() -> Element {
    let app = use_app();

    // Outlives the page, which unmounts on the next fragment change.
    use_hook(move || {
        let api = app.api.clone();
        spawn_forever(async move {
            api.logout().await;
            browser::navigate_to(&Route::Login);
            browser::reload();
        });
    });

    rsx! {
        p { class: "status-message", "Logging out..." }
    }
}
