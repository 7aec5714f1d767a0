use api::UserList;
use dioxus::prelude::*;
use navigation::NavTicket;

use super::{Load, ModalOverlay};
use crate::context::use_app;
use crate::icons::FaPlus;
use crate::status::{Status, StatusLine};
use crate::Icon;

/// The viewer's lists.
#[component]
pub fn LibraryPage(ticket: NavTicket) -> Element {
    let app = use_app();
    let mut lists = use_signal(|| Load::<Vec<UserList>>::Loading);
    let mut refresh = use_signal(|| 0u32);
    let mut creating = use_signal(|| false);

    let _loader = use_resource(move || {
        let _ = refresh();
        let api = app.api.clone();
        let ticket = ticket.clone();
        async move {
            let result = api.lists().await;
            if ticket.is_cancelled() {
                return;
            }
            match result {
                Ok(page) => lists.set(Load::Ready(page.results)),
                Err(e) => {
                    tracing::error!("loading lists failed: {e}");
                    lists.set(Load::Failed(format!("Could not load your lists: {}", e.user_message())));
                }
            }
        }
    });

    let body = match lists() {
        Load::Loading => rsx! { p { class: "status-message", "Loading lists..." } },
        Load::Failed(message) => rsx! { p { class: "status-message status-error", "{message}" } },
        Load::Ready(lists) if lists.is_empty() => rsx! {
            p { class: "info-message", "You have no lists yet." }
        },
        Load::Ready(lists) => rsx! {
            ul {
                class: "list-grid",
                for list in lists {
                    li {
                        key: "{list.id}",
                        class: if list.is_predefined { "list-card predefined" } else { "list-card" },
                        a { href: list.href(), "{list.name}" }
                        span { class: "item-count", " ({list.item_count()} items)" }
                    }
                }
            }
        },
    };

    rsx! {
        section {
            class: "library-page",
            div {
                class: "page-header",
                h2 { "My library" }
                button {
                    class: "primary-btn",
                    onclick: move |_| creating.set(true),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    " New list"
                }
            }
            {body}
            if creating() {
                CreateListDialog {
                    on_close: move |_| creating.set(false),
                    on_created: move |_| {
                        creating.set(false);
                        refresh += 1;
                    },
                }
            }
        }
    }
}

#[component]
fn CreateListDialog(on_close: EventHandler<()>, on_created: EventHandler<()>) -> Element {
    let app = use_app();
    let mut name = use_signal(String::new);
    let mut status = use_signal(|| Option::<Status>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let list_name = name().trim().to_string();
        if list_name.is_empty() {
            status.set(Some(Status::error("Give the list a name.")));
            return;
        }
        let api = app.api.clone();
        saving.set(true);
        spawn(async move {
            match api.create_list(&list_name).await {
                Ok(list) => {
                    tracing::info!(list_id = list.id, "list created");
                    on_created.call(());
                }
                Err(e) => {
                    tracing::warn!("creating list failed: {e}");
                    status.set(Some(Status::failure("Could not create the list", &e)));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        ModalOverlay {
            title: "New list".to_string(),
            on_close: move |_| on_close.call(()),
            form {
                class: "create-list-form",
                onsubmit: handle_submit,
                input {
                    r#type: "text",
                    placeholder: "List name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                button { r#type: "submit", disabled: saving(), "Create" }
            }
            StatusLine { status: status() }
        }
    }
}
