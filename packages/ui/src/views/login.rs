use dioxus::prelude::*;
use navigation::Route;

use crate::browser;
use crate::context::use_app;
use crate::status::{Status, StatusLine};

#[component]
pub fn LoginPage() -> Element {
    let app = use_app();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut status = use_signal(|| Option::<Status>::None);
    let mut busy = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let api = app.api.clone();
        let (user, pass) = (username().trim().to_string(), password());
        if user.is_empty() || pass.is_empty() {
            status.set(Some(Status::error("Enter your username and password.")));
            return;
        }
        busy.set(true);
        status.set(Some(Status::info("Logging in...")));
        spawn(async move {
            match api.login(&user, &pass).await {
                Ok(_) => {
                    status.set(None);
                    browser::navigate_to(&Route::Feed);
                }
                Err(e) => {
                    tracing::warn!("login failed: {e}");
                    status.set(Some(Status::failure("Login failed", &e)));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        section {
            class: "auth-page",
            h2 { "Log in" }
            form {
                class: "auth-form",
                onsubmit: handle_submit,
                label { "Username" }
                input {
                    r#type: "text",
                    autocomplete: "username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                label { "Password" }
                input {
                    r#type: "password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button { r#type: "submit", disabled: busy(), "Log in" }
            }
            StatusLine { status: status() }
            p {
                class: "auth-links",
                a { href: Route::Register.href(), "Create an account" }
                " · "
                a { href: Route::ResetPassword.href(), "Forgot your password?" }
            }
        }
    }
}
