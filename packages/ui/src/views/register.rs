use api::RegisterRequest;
use dioxus::prelude::*;
use navigation::Route;

use crate::browser;
use crate::context::use_app;
use crate::status::{Status, StatusLine};

#[component]
pub fn RegisterPage() -> Element {
    let app = use_app();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut password2 = use_signal(String::new);
    let mut status = use_signal(|| Option::<Status>::None);
    let mut busy = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let request = RegisterRequest::new(
            username().trim(),
            email().trim(),
            first_name().trim(),
            last_name().trim(),
            &password(),
            &password2(),
        );
        if !request.passwords_match() {
            status.set(Some(Status::error("Passwords do not match.")));
            return;
        }
        let api = app.api.clone();
        let delay = app.config.ui.redirect_delay_ms;
        busy.set(true);
        status.set(Some(Status::info("Creating your account...")));
        spawn(async move {
            match api.register(&request).await {
                Ok(_) => {
                    tracing::info!(username = %request.username, "registered");
                    status.set(Some(Status::success(
                        "Registration complete. You can log in now.",
                    )));
                    browser::sleep_ms(delay).await;
                    browser::navigate_to(&Route::Login);
                }
                Err(e) => {
                    tracing::warn!("registration failed: {e}");
                    status.set(Some(Status::failure("Registration failed", &e)));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        section {
            class: "auth-page",
            h2 { "Create an account" }
            form {
                class: "auth-form",
                onsubmit: handle_submit,
                label { "Username" }
                input {
                    r#type: "text",
                    required: true,
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                label { "E-mail" }
                input {
                    r#type: "email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                label { "First name" }
                input {
                    r#type: "text",
                    value: first_name(),
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }
                label { "Last name" }
                input {
                    r#type: "text",
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }
                label { "Password" }
                input {
                    r#type: "password",
                    required: true,
                    autocomplete: "new-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                label { "Repeat password" }
                input {
                    r#type: "password",
                    required: true,
                    autocomplete: "new-password",
                    value: password2(),
                    oninput: move |evt: FormEvent| password2.set(evt.value()),
                }
                button { r#type: "submit", disabled: busy(), "Register" }
            }
            StatusLine { status: status() }
            p {
                class: "auth-links",
                "Already registered? "
                a { href: Route::Login.href(), "Log in" }
            }
        }
    }
}
