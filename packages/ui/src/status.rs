//! Transient status messages shown next to forms and lists.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Status {
    pub level: StatusLevel,
    pub message: String,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            message: message.into(),
        }
    }

    /// `"<context>: <error text>"` as an error status.
    pub fn failure(context: &str, error: &api::ApiError) -> Self {
        Self::error(format!("{context}: {}", error.user_message()))
    }

    fn class(&self) -> &'static str {
        match self.level {
            StatusLevel::Info => "status-message",
            StatusLevel::Success => "status-message status-success",
            StatusLevel::Error => "status-message status-error",
        }
    }
}

/// Renders `status` when set.
#[component]
pub fn StatusLine(status: Option<Status>) -> Element {
    let Some(status) = status else {
        return rsx! {};
    };
    rsx! {
        p { class: status.class(), "{status.message}" }
    }
}
