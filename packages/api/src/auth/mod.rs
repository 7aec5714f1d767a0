//! Login, logout and registration.
//!
//! Login is the only place a session starts: the token and the user id found
//! in the response are written to the [`store::Session`] the client was built
//! with. Logout clears the local session before it calls the backend.

mod password;

use reqwest::Method;
use serde_json::Value;
use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest};

impl<S: SessionStore> ApiClient<S> {
    /// Log in and store the session.
    ///
    /// Returns the user id when the response carried one.
    pub async fn login(&self, username: &str, password: &str) -> Result<Option<i64>, ApiError> {
        let response: LoginResponse = self
            .post_public("auth/login/", &LoginRequest { username, password })
            .await?;
        let user_id = response.user_id();
        self.session().save_login(&response.key, user_id);
        tracing::info!(user_id = ?user_id, "logged in");
        Ok(user_id)
    }

    /// End the session locally, then invalidate the token remotely. Remote
    /// failures are logged and ignored.
    pub async fn logout(&self) {
        let token = self.session().token();
        self.session().clear();
        tracing::info!("logged out");

        let Some(token) = token else {
            return;
        };
        if let Err(e) = self
            .send::<Value>(Method::POST, "auth/logout/", None, Some(&token))
            .await
        {
            tracing::warn!("remote logout failed: {e}");
        }
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<Value, ApiError> {
        self.post_public("auth/register/", request).await
    }
}
