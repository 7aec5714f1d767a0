//! Request and response bodies of the `auth/` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::id_from_value;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response of `POST auth/login/`.
///
/// The backend has shipped several shapes for the user id over time, so all
/// of them are accepted and [`LoginResponse::user_id`] picks the first one
/// present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub key: String,
    #[serde(default)]
    pub user: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub username: Option<String>,
}

impl LoginResponse {
    /// The logged-in user's id: `user.pk`, then `id`, then `user_id`.
    /// Zero counts as missing.
    // TODO: drop the fallbacks once the backend settles on `user_id`.
    pub fn user_id(&self) -> Option<i64> {
        let from_user = self
            .user
            .as_ref()
            .and_then(|user| user.get("pk"))
            .and_then(id_from_value);
        [
            from_user,
            self.id.as_ref().and_then(id_from_value),
            self.user_id.as_ref().and_then(id_from_value),
        ]
        .into_iter()
        .flatten()
        .find(|id| *id != 0)
    }
}

/// Body of `POST auth/register/`. The backend validates `password1` and
/// `password2`; `password` carries the same value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub password1: String,
    pub password2: String,
}

impl RegisterRequest {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password: impl Into<String>,
        confirmation: impl Into<String>,
    ) -> Self {
        let password = password.into();
        Self {
            username: username.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            password1: password.clone(),
            password,
            password2: confirmation.into(),
        }
    }

    pub fn passwords_match(&self) -> bool {
        self.password1 == self.password2
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PasswordResetConfirm {
    pub uid: String,
    pub token: String,
    pub new_password1: String,
    pub new_password2: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: Value) -> LoginResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_user_id_prefers_nested_pk() {
        let login = response(json!({"key": "t", "user": {"pk": 3}, "id": 4, "user_id": 5}));
        assert_eq!(login.user_id(), Some(3));
    }

    #[test]
    fn test_user_id_falls_back_in_order() {
        assert_eq!(response(json!({"key": "t", "id": 4, "user_id": 5})).user_id(), Some(4));
        assert_eq!(response(json!({"key": "t", "user_id": "5"})).user_id(), Some(5));
        assert_eq!(
            response(json!({"key": "t", "user": {"pk": 0}, "user_id": 5})).user_id(),
            Some(5)
        );
    }

    #[test]
    fn test_user_id_missing() {
        assert_eq!(response(json!({"key": "t"})).user_id(), None);
        assert_eq!(response(json!({"key": "t", "user": null, "id": null})).user_id(), None);
    }

    #[test]
    fn test_register_request_mirrors_password() {
        let request = RegisterRequest::new("u", "u@example.com", "U", "V", "secret", "secret");
        assert_eq!(request.password, "secret");
        assert_eq!(request.password1, "secret");
        assert!(request.passwords_match());
        assert!(!RegisterRequest::new("u", "e", "f", "l", "a", "b").passwords_match());
    }
}
