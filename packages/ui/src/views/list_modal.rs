use api::{ContentKind, ListMembership};
use dioxus::prelude::*;

use super::{Load, ModalOverlay};
use crate::browser;
use crate::context::use_app;
use crate::status::{Status, StatusLine};

/// Add or remove one book or movie from each of the viewer's suitable lists.
#[component]
pub fn ListMembershipModal(
    kind: ContentKind,
    content_id: i64,
    on_close: EventHandler<()>,
) -> Element {
    let app = use_app();
    let clear_after = app.config.ui.status_clear_ms;
    let mut memberships = use_signal(|| Load::<Vec<ListMembership>>::Loading);
    let mut status = use_signal(|| Option::<Status>::None);
    let mut pending = use_signal(|| Option::<i64>::None);

    let loader_api = app.api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        async move {
            match api.list_membership(kind, content_id).await {
                Ok(found) => memberships.set(Load::Ready(found)),
                Err(e) => {
                    tracing::error!(content_id, "loading list membership failed: {e}");
                    memberships.set(Load::Failed(format!(
                        "Could not load your lists: {}",
                        e.user_message()
                    )));
                }
            }
        }
    });

    let toggle_api = app.api.clone();
    let handle_toggle = use_callback(move |membership: ListMembership| {
        if pending().is_some() {
            return;
        }
        let api = toggle_api.clone();
        let list_id = membership.list.id;
        pending.set(Some(list_id));
        spawn(async move {
            let result = if membership.contains {
                api.remove_from_list(list_id, content_id).await.map(|_| false)
            } else {
                api.add_to_list(list_id, kind, content_id).await.map(|_| true)
            };
            match result {
                Ok(contains) => {
                    if let Load::Ready(found) = &mut *memberships.write() {
                        if let Some(entry) = found.iter_mut().find(|m| m.list.id == list_id) {
                            entry.contains = contains;
                        }
                    }
                    let message = if contains {
                        format!("Added to {}.", membership.list.name)
                    } else {
                        format!("Removed from {}.", membership.list.name)
                    };
                    status.set(Some(Status::success(message)));
                }
                Err(e) => {
                    tracing::warn!(list_id, content_id, "list membership change failed: {e}");
                    status.set(Some(Status::failure("Could not update the list", &e)));
                }
            }
            pending.set(None);
            let shown = status();
            browser::sleep_ms(clear_after).await;
            if status() == shown {
                status.set(None);
            }
        });
    });

    let body = match memberships() {
        Load::Loading => rsx! { p { class: "status-message", "Loading lists..." } },
        Load::Failed(message) => rsx! { p { class: "status-message status-error", "{message}" } },
        Load::Ready(found) if found.is_empty() => rsx! {
            p { class: "info-message", "You have no lists for this kind of content." }
        },
        Load::Ready(found) => rsx! {
            ul {
                class: "membership-list",
                for membership in found {
                    li {
                        key: "{membership.list.id}",
                        span { "{membership.list.name}" }
                        button {
                            class: if membership.contains { "danger-btn" } else { "primary-btn" },
                            disabled: pending() == Some(membership.list.id),
                            onclick: {
                                let membership = membership.clone();
                                move |_| handle_toggle.call(membership.clone())
                            },
                            if membership.contains { "Remove" } else { "Add" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        ModalOverlay {
            title: "Add to list".to_string(),
            on_close: move |_| on_close.call(()),
            {body}
            StatusLine { status: status() }
        }
    }
}
