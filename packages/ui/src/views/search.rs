use api::ContentSummary;
use dioxus::prelude::*;
use navigation::NavTicket;

use super::Load;
use crate::content_card::ContentGrid;
use crate::context::use_app;

#[component]
pub fn SearchPage(query: Option<String>, ticket: NavTicket) -> Element {
    let app = use_app();
    let term = query.clone().unwrap_or_default().trim().to_string();
    let mut results = use_signal(|| Load::<Vec<ContentSummary>>::Loading);

    let loader_term = term.clone();
    let _loader = use_resource(move || {
        let api = app.api.clone();
        let term = loader_term.clone();
        let ticket = ticket.clone();
        async move {
            if term.is_empty() {
                results.set(Load::Ready(Vec::new()));
                return;
            }
            let found = api.search(&term).await;
            if ticket.is_cancelled() {
                return;
            }
            match found {
                Ok(found) => results.set(Load::Ready(found)),
                Err(e) => {
                    tracing::error!(term = %term, "search failed: {e}");
                    results.set(Load::Failed(format!("Search failed: {}", e.user_message())));
                }
            }
        }
    });

    let body = match results() {
        Load::Loading => rsx! { p { class: "status-message", "Searching..." } },
        Load::Failed(message) => rsx! { p { class: "status-message status-error", "{message}" } },
        Load::Ready(_) if term.is_empty() => rsx! {
            p { class: "info-message", "Type something in the search bar." }
        },
        Load::Ready(items) => rsx! {
            ContentGrid { items, empty: format!("Nothing found for \"{term}\".") }
        },
    };

    rsx! {
        section {
            class: "search-page",
            if term.is_empty() {
                h2 { "Search" }
            } else {
                h2 { "Results for \"{term}\"" }
            }
            {body}
        }
    }
}
