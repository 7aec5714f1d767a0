use api::ContentSummary;
use dioxus::prelude::*;
use navigation::{DiscoverMode, DiscoverQuery, NavTicket, Route};

use super::Load;
use crate::browser;
use crate::content_card::ContentGrid;
use crate::context::use_app;
use crate::present::{filters_from_form, year_options, GENRES};

const SHOWCASES: [(&str, &str); 2] = [("popular", "Popular"), ("top_rated", "Top rated")];

/// Curated showcases and filtered discovery.
#[component]
pub fn DiscoverPage(query: DiscoverQuery, ticket: NavTicket) -> Element {
    let app = use_app();
    let mut results = use_signal(|| Load::<Vec<ContentSummary>>::Loading);

    let (initial_showcase, initial_filters) = match &query.mode {
        DiscoverMode::Showcase { kind } => (kind.clone(), Default::default()),
        DiscoverMode::Filter(filters) => (String::new(), filters.clone()),
    };
    let mut showcase = use_signal(|| initial_showcase.clone());
    let mut genre = use_signal(|| initial_filters.genre.clone().unwrap_or_default());
    let mut year = use_signal(|| initial_filters.year.clone().unwrap_or_default());
    let mut min_score = use_signal(|| initial_filters.min_score.clone().unwrap_or_default());

    let loader_mode = query.mode.clone();
    let _loader = use_resource(move || {
        let api = app.api.clone();
        let mode = loader_mode.clone();
        let ticket = ticket.clone();
        async move {
            let found = match &mode {
                DiscoverMode::Showcase { kind } => api.discover(kind).await,
                DiscoverMode::Filter(filters) => {
                    let params = filters.to_params();
                    api.filter(params.iter()).await
                }
            };
            if ticket.is_cancelled() {
                return;
            }
            match found {
                Ok(found) => results.set(Load::Ready(found)),
                Err(e) => {
                    tracing::error!(?mode, "discover failed: {e}");
                    results.set(Load::Failed(format!(
                        "Could not load content: {}",
                        e.user_message()
                    )));
                }
            }
        }
    });

    let handle_showcase = move |evt: FormEvent| {
        let kind = evt.value();
        showcase.set(kind.clone());
        browser::navigate_to(&Route::Discover(DiscoverQuery::showcase(kind)));
    };

    let mut form_error = use_signal(|| Option::<String>::None);
    let handle_filter = move |evt: FormEvent| {
        evt.prevent_default();
        let filters = filters_from_form(&genre(), &year(), &min_score());
        let Some(query) = DiscoverQuery::filter(filters) else {
            form_error.set(Some("Choose at least one filter.".to_string()));
            return;
        };
        form_error.set(None);
        browser::navigate_to(&Route::Discover(query));
    };

    let years = year_options(browser::current_year());
    let heading = match &query.mode {
        DiscoverMode::Showcase { kind } => SHOWCASES
            .iter()
            .find(|(value, _)| *value == kind.as_str())
            .map(|(_, label)| label.to_string())
            .unwrap_or_else(|| kind.clone()),
        DiscoverMode::Filter(_) => "Filtered results".to_string(),
    };

    let body = match results() {
        Load::Loading => rsx! { p { class: "status-message", "Loading..." } },
        Load::Failed(message) => rsx! { p { class: "status-message status-error", "{message}" } },
        Load::Ready(items) => rsx! {
            ContentGrid { items, empty: "No content matches.".to_string() }
        },
    };

    rsx! {
        section {
            class: "discover-page",
            h2 { "Discover" }
            div {
                class: "discover-controls",
                label { "Showcase" }
                select {
                    value: showcase(),
                    onchange: handle_showcase,
                    if showcase().is_empty() {
                        option { value: "", selected: true, "Choose..." }
                    }
                    for (value, label) in SHOWCASES {
                        option { key: "{value}", value: "{value}", selected: showcase() == value, "{label}" }
                    }
                }
            }
            form {
                class: "filter-form",
                onsubmit: handle_filter,
                label { "Genre" }
                select {
                    value: genre(),
                    onchange: move |evt: FormEvent| genre.set(evt.value()),
                    option { value: "", "Any genre" }
                    for (value, label) in GENRES {
                        option { key: "{value}", value: "{value}", selected: genre() == value, "{label}" }
                    }
                }
                label { "Year" }
                select {
                    value: year(),
                    onchange: move |evt: FormEvent| year.set(evt.value()),
                    option { value: "", "Any year" }
                    for y in years {
                        option { key: "{y}", value: "{y}", selected: year() == y.to_string(), "{y}" }
                    }
                }
                label { "Minimum score" }
                input {
                    r#type: "number",
                    min: "0",
                    max: "10",
                    step: "0.1",
                    value: min_score(),
                    oninput: move |evt: FormEvent| min_score.set(evt.value()),
                }
                button { r#type: "submit", "Filter" }
            }
            if let Some(message) = form_error() {
                p { class: "status-message status-error", "{message}" }
            }
            h3 { "{heading}" }
            {body}
        }
    }
}
