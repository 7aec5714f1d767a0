use api::ProfileUpdate;
use dioxus::prelude::*;
use navigation::{NavTicket, Route};

use super::Load;
use crate::browser;
use crate::context::use_app;
use crate::status::{Status, StatusLine};

/// Edit form for the viewer's own profile, prefilled from the backend.
#[component]
pub fn ProfileUpdatePage(user_id: i64, ticket: NavTicket) -> Element {
    let app = use_app();
    let delay = app.config.ui.redirect_delay_ms;
    let mut form = use_signal(|| Load::<ProfileUpdate>::Loading);
    let mut status = use_signal(|| Option::<Status>::None);
    let mut saving = use_signal(|| false);

    let loader_api = app.api.clone();
    let loader_ticket = ticket.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        let ticket = loader_ticket.clone();
        async move {
            let result = api.profile(user_id).await;
            if ticket.is_cancelled() {
                return;
            }
            match result {
                Ok(found) => form.set(Load::Ready(ProfileUpdate::from(&found.user_details))),
                Err(e) => {
                    tracing::error!(user_id, "loading profile for editing failed: {e}");
                    form.set(Load::Failed(format!(
                        "Could not load your profile: {}",
                        e.user_message()
                    )));
                }
            }
        }
    });

    let save_api = app.api.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Load::Ready(update) = form() else {
            return;
        };
        if saving() {
            return;
        }
        let api = save_api.clone();
        let ticket = ticket.clone();
        saving.set(true);
        spawn(async move {
            match api.update_profile(user_id, &update).await {
                Ok(_) => {
                    tracing::info!(user_id, "profile updated");
                    status.set(Some(Status::success("Profile saved.")));
                    browser::sleep_ms(delay).await;
                    if ticket.is_current() {
                        browser::navigate_to(&Route::Profile {
                            user_id: user_id.to_string(),
                        });
                    }
                }
                Err(e) => {
                    tracing::warn!(user_id, "profile update failed: {e}");
                    status.set(Some(Status::failure("Could not save the profile", &e)));
                }
            }
            saving.set(false);
        });
    };

    let values = match form() {
        Load::Loading => return rsx! { p { class: "status-message", "Loading profile..." } },
        Load::Failed(message) => {
            return rsx! { p { class: "status-message status-error", "{message}" } }
        }
        Load::Ready(values) => values,
    };

    // Field edits go straight into the loaded form.
    let mut edit = move |apply: fn(&mut ProfileUpdate, String), value: String| {
        if let Load::Ready(update) = &mut *form.write() {
            apply(update, value);
        }
    };

    rsx! {
        section {
            class: "profile-update-page",
            h2 { "Edit profile" }
            form {
                class: "profile-form",
                onsubmit: handle_submit,
                label { "Avatar URL" }
                input {
                    r#type: "url",
                    value: values.avatar_url,
                    oninput: move |evt: FormEvent| edit(|u, v| u.avatar_url = v, evt.value()),
                }
                label { "First name" }
                input {
                    r#type: "text",
                    value: values.first_name,
                    oninput: move |evt: FormEvent| edit(|u, v| u.first_name = v, evt.value()),
                }
                label { "Last name" }
                input {
                    r#type: "text",
                    value: values.last_name,
                    oninput: move |evt: FormEvent| edit(|u, v| u.last_name = v, evt.value()),
                }
                label { "E-mail" }
                input {
                    r#type: "email",
                    value: values.email,
                    oninput: move |evt: FormEvent| edit(|u, v| u.email = v, evt.value()),
                }
                label { "Username" }
                input {
                    r#type: "text",
                    value: values.username,
                    oninput: move |evt: FormEvent| edit(|u, v| u.username = v, evt.value()),
                }
                label { "Bio" }
                textarea {
                    rows: 4,
                    value: values.bio,
                    oninput: move |evt: FormEvent| edit(|u, v| u.bio = v, evt.value()),
                }
                button { r#type: "submit", disabled: saving(), "Save" }
                a { href: Route::Profile { user_id: user_id.to_string() }.href(), "Cancel" }
            }
            StatusLine { status: status() }
        }
    }
}
