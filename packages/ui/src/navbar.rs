use dioxus::prelude::*;
use navigation::{NavChrome, NavLink, Route};

use crate::browser;
use crate::icons::FaMagnifyingGlass;
use crate::Icon;

/// The top bar: one link group for the session state, the search bar for
/// signed-in users, and the active link highlighted.
#[component]
pub fn Navbar(chrome: NavChrome, active: Option<NavLink>) -> Element {
    let mut query = use_signal(String::new);

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        let q = query().trim().to_string();
        if q.is_empty() {
            return;
        }
        browser::navigate_to(&Route::Search { query: Some(q) });
    };

    rsx! {
        nav {
            class: "navbar",
            a { class: "brand", href: "#feed", "Shelfmark" }
            ul {
                class: if chrome.auth_links { "nav-links auth-links" } else { "nav-links public-links" },
                for link in chrome.visible_links().iter().copied() {
                    li {
                        key: "{link.route_name()}",
                        a {
                            class: if active == Some(link) { "nav-link active" } else { "nav-link" },
                            href: link.href(),
                            "{link.label()}"
                        }
                    }
                }
            }
            if chrome.search_bar {
                form {
                    class: "search-bar",
                    onsubmit: handle_search,
                    input {
                        r#type: "search",
                        placeholder: "Search books and movies",
                        value: query(),
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
