use api::{ListItem, UserList};
use dioxus::prelude::*;
use navigation::{NavTicket, Route};

use super::Load;
use crate::browser;
use crate::content_card::ContentCard;
use crate::context::use_app;
use crate::icons::FaTrashCan;
use crate::status::{Status, StatusLine};
use crate::Icon;

/// One list and its items.
#[component]
pub fn ListDetailPage(id: String, ticket: NavTicket) -> Element {
    let app = use_app();
    let mut list = use_signal(|| Load::<UserList>::Loading);
    let mut refresh = use_signal(|| 0u32);
    let mut status = use_signal(|| Option::<Status>::None);

    let loader_api = app.api.clone();
    let loader_id = id.clone();
    let _loader = use_resource(move || {
        let _ = refresh();
        let api = loader_api.clone();
        let id = loader_id.clone();
        let ticket = ticket.clone();
        async move {
            let result = api.list_detail(&id).await;
            if ticket.is_cancelled() {
                return;
            }
            match result {
                Ok(detail) => list.set(Load::Ready(detail)),
                Err(e) => {
                    tracing::error!(list_id = %id, "loading list failed: {e}");
                    list.set(Load::Failed(format!("Could not load the list: {}", e.user_message())));
                }
            }
        }
    });

    let remove_api = app.api.clone();
    let handle_remove = use_callback(move |item: ListItem| {
        let title = item
            .content_details
            .as_ref()
            .map(|content| content.title.clone())
            .unwrap_or_else(|| "this item".to_string());
        if !browser::confirm(&format!("Remove {title} from the list?")) {
            return;
        }
        let api = remove_api.clone();
        spawn(async move {
            match api.remove_list_item(item.id).await {
                Ok(()) => {
                    status.set(Some(Status::success(format!("Removed {title}."))));
                    refresh += 1;
                }
                Err(e) => {
                    tracing::warn!(item_id = item.id, "removing list item failed: {e}");
                    status.set(Some(Status::failure("Could not remove the item", &e)));
                }
            }
        });
    });

    let body = match list() {
        Load::Loading => rsx! { p { class: "status-message", "Loading list..." } },
        Load::Failed(message) => rsx! { p { class: "status-message status-error", "{message}" } },
        Load::Ready(detail) => rsx! {
            h2 { "{detail.name}" }
            if detail.items.is_empty() {
                p { class: "info-message", "This list is empty." }
            } else {
                div {
                    class: "content-grid",
                    for item in detail.items.clone() {
                        div {
                            key: "{item.id}",
                            class: "list-item",
                            if let Some(content) = item.content_details.clone() {
                                ContentCard { content }
                            }
                            button {
                                class: "danger-btn",
                                onclick: move |_| handle_remove.call(item.clone()),
                                Icon { icon: FaTrashCan, width: 14, height: 14 }
                                " Remove from list"
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section {
            class: "list-detail-page",
            a { class: "back-link", href: Route::Library.href(), "← Back to library" }
            {body}
            StatusLine { status: status() }
        }
    }
}
