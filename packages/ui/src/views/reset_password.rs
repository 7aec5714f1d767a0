use api::PasswordResetConfirm;
use dioxus::prelude::*;
use navigation::Route;

use crate::browser;
use crate::context::use_app;
use crate::status::{Status, StatusLine};

/// Request a reset e-mail, then set a new password with the `uid` and
/// `token` from the mailed link.
#[component]
pub fn ResetPasswordPage() -> Element {
    let app = use_app();
    let api = app.api.clone();
    let delay = app.config.ui.redirect_delay_ms;

    let mut email = use_signal(String::new);
    let mut request_status = use_signal(|| Option::<Status>::None);

    let mut uid = use_signal(String::new);
    let mut token = use_signal(String::new);
    let mut new_password1 = use_signal(String::new);
    let mut new_password2 = use_signal(String::new);
    let mut confirm_status = use_signal(|| Option::<Status>::None);

    let request_api = api.clone();
    let handle_request = move |evt: FormEvent| {
        evt.prevent_default();
        let address = email().trim().to_string();
        if address.is_empty() {
            request_status.set(Some(Status::error("Enter the e-mail address of your account.")));
            return;
        }
        let api = request_api.clone();
        request_status.set(Some(Status::info("Sending...")));
        spawn(async move {
            match api.request_password_reset(&address).await {
                Ok(detail) => request_status.set(Some(Status::success(
                    detail.unwrap_or_else(|| "Check your inbox for the reset link.".to_string()),
                ))),
                Err(e) => {
                    tracing::warn!("password reset request failed: {e}");
                    request_status.set(Some(Status::failure("Could not send the reset e-mail", &e)));
                }
            }
        });
    };

    let handle_confirm = move |evt: FormEvent| {
        evt.prevent_default();
        let confirm = PasswordResetConfirm {
            uid: uid().trim().to_string(),
            token: token().trim().to_string(),
            new_password1: new_password1(),
            new_password2: new_password2(),
        };
        if confirm.new_password1 != confirm.new_password2 {
            confirm_status.set(Some(Status::error("Passwords do not match.")));
            return;
        }
        let api = api.clone();
        confirm_status.set(Some(Status::info("Saving...")));
        spawn(async move {
            match api.confirm_password_reset(&confirm).await {
                Ok(detail) => {
                    confirm_status.set(Some(Status::success(
                        detail.unwrap_or_else(|| "Your password has been changed.".to_string()),
                    )));
                    browser::sleep_ms(delay).await;
                    browser::navigate_to(&Route::Login);
                }
                Err(e) => {
                    tracing::warn!("password reset confirmation failed: {e}");
                    confirm_status.set(Some(Status::failure("Could not reset the password", &e)));
                }
            }
        });
    };

    rsx! {
        section {
            class: "auth-page",
            h2 { "Reset your password" }
            form {
                class: "auth-form",
                onsubmit: handle_request,
                label { "E-mail" }
                input {
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                button { r#type: "submit", "Send reset link" }
            }
            StatusLine { status: request_status() }

            h3 { "Already have a reset code?" }
            form {
                class: "auth-form",
                onsubmit: handle_confirm,
                label { "UID" }
                input {
                    r#type: "text",
                    value: uid(),
                    oninput: move |evt: FormEvent| uid.set(evt.value()),
                }
                label { "Token" }
                input {
                    r#type: "text",
                    value: token(),
                    oninput: move |evt: FormEvent| token.set(evt.value()),
                }
                label { "New password" }
                input {
                    r#type: "password",
                    autocomplete: "new-password",
                    value: new_password1(),
                    oninput: move |evt: FormEvent| new_password1.set(evt.value()),
                }
                label { "Repeat new password" }
                input {
                    r#type: "password",
                    autocomplete: "new-password",
                    value: new_password2(),
                    oninput: move |evt: FormEvent| new_password2.set(evt.value()),
                }
                button { r#type: "submit", "Change password" }
            }
            StatusLine { status: confirm_status() }
            p {
                class: "auth-links",
                a { href: Route::Login.href(), "Back to login" }
            }
        }
    }
}
