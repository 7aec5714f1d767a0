//! Password reset by e-mail.

use serde_json::Value;
use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{PasswordResetConfirm, PasswordResetRequest};

impl<S: SessionStore> ApiClient<S> {
    /// Ask the backend to mail a reset link. Returns the backend's message.
    pub async fn request_password_reset(&self, email: &str) -> Result<Option<String>, ApiError> {
        let body = PasswordResetRequest {
            email: email.trim().to_string(),
        };
        let response: Value = self.post_public("auth/password/reset/", &body).await?;
        Ok(detail_message(&response))
    }

    /// Set a new password with the `uid` and `token` from the reset link.
    pub async fn confirm_password_reset(
        &self,
        confirm: &PasswordResetConfirm,
    ) -> Result<Option<String>, ApiError> {
        let response: Value = self
            .post_public("auth/password/reset/confirm/", confirm)
            .await?;
        Ok(detail_message(&response))
    }
}

fn detail_message(response: &Value) -> Option<String> {
    response
        .get("detail")
        .and_then(Value::as_str)
        .map(str::to_string)
}
