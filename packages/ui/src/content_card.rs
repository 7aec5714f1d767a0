use api::{ContentKind, ContentSummary};
use dioxus::prelude::*;

use crate::context::use_app;
use crate::present::creator_line;

/// Poster, title and creator of a book or movie, linking to its page.
///
/// `kind` is used when the record does not name its own kind.
#[component]
pub fn ContentCard(content: ContentSummary, #[props(default)] kind: Option<ContentKind>) -> Element {
    let app = use_app();
    let mut image_failed = use_signal(|| false);
    let placeholder = app.config.ui.placeholder_image.clone();
    let kind = content.kind().or(kind);
    let href = content.href(kind).unwrap_or_else(|| "#feed".to_string());
    let image = if image_failed() {
        placeholder.clone()
    } else {
        content.image_or(&placeholder).to_string()
    };
    let creator = creator_line(kind, content.creator());

    rsx! {
        div {
            class: "content-card",
            a {
                href: "{href}",
                img {
                    src: "{image}",
                    alt: "{content.title} cover",
                    onerror: move |_| image_failed.set(true),
                }
            }
            h3 {
                a { href: "{href}", "{content.title}" }
            }
            p { "{creator}" }
        }
    }
}

/// A grid of content cards, or `empty` when there is nothing to show.
#[component]
pub fn ContentGrid(items: Vec<ContentSummary>, empty: String) -> Element {
    if items.is_empty() {
        return rsx! {
            p { class: "info-message", "{empty}" }
        };
    }
    rsx! {
        div {
            class: "content-grid",
            for content in items {
                ContentCard { key: "{content.id}", content }
            }
        }
    }
}
