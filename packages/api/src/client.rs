//! The HTTP core shared by every endpoint.

use std::collections::HashSet;
use std::ops::ControlFlow;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::{Session, SessionStore};

use crate::error::ApiError;
use crate::models::Paginated;

/// JSON client for the catalogue backend.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference counted and
/// the session is a handle onto the shared store.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: String,
    session: Session<S>,
}

impl<S: SessionStore> ApiClient<S> {
    /// `base_url` is the API root, e.g. `http://127.0.0.1:8000/api/`.
    pub fn new(base_url: impl Into<String>, session: Session<S>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint. Absolute inputs (pagination cursors)
    /// pass through untouched.
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("{}{}", self.base_url, endpoint.trim_start_matches('/'))
        }
    }

    /// Endpoint with URL-encoded query parameters appended.
    pub(crate) fn with_query<'a>(
        endpoint: &str,
        params: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        if query.is_empty() {
            endpoint.to_string()
        } else {
            format!("{endpoint}?{query}")
        }
    }

    /// Send one request and decode the JSON response.
    ///
    /// With `auth` set, the stored token is attached as
    /// `Authorization: Token <token>`; a missing token fails before any I/O.
    /// `204 No Content` and empty bodies decode as `{}`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        auth: bool,
    ) -> Result<T, ApiError> {
        let token = if auth {
            Some(self.session.token().ok_or(ApiError::Unauthenticated)?)
        } else {
            None
        };
        self.send(method, endpoint, body, token.as_deref()).await
    }

    /// Like [`ApiClient::request`], with the token given explicitly instead
    /// of read from the session.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Token {token}"));
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        tracing::debug!(%method, %url, "api request");
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(%method, %url, status = status.as_u16(), "api request failed");
            return Err(error_from_response(status, &text));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(serde_json::from_value(Value::Object(Default::default()))?);
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(serde_json::from_value(Value::Object(Default::default()))?);
        }
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(Method::GET, endpoint, None, true).await
    }

    /// Walk a paginated collection, following `next` until `visit` breaks or
    /// the pages run out. A cursor seen twice ends the walk.
    pub(crate) async fn walk_pages<T, B>(
        &self,
        endpoint: &str,
        mut visit: impl FnMut(T) -> ControlFlow<B>,
    ) -> Result<Option<B>, ApiError>
    where
        T: DeserializeOwned,
    {
        let mut seen = HashSet::new();
        let mut next = Some(endpoint.to_string());
        while let Some(cursor) = next.take() {
            if !seen.insert(cursor.clone()) {
                tracing::warn!(%cursor, "pagination cursor repeated, stopping");
                break;
            }
            let page: Paginated<T> = self.get(&cursor).await?;
            for item in page.results {
                if let ControlFlow::Break(found) = visit(item) {
                    return Ok(Some(found));
                }
            }
            next = page.next.filter(|next| !next.is_empty());
        }
        Ok(None)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, endpoint, Some(serde_json::to_value(body)?), true)
            .await
    }

    /// POST with no body, for action endpoints such as likes.
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(Method::POST, endpoint, None, true).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PATCH, endpoint, Some(serde_json::to_value(body)?), true)
            .await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<(), ApiError> {
        self.request::<Value>(Method::DELETE, endpoint, None, true)
            .await
            .map(|_| ())
    }

    /// POST without credentials, for the login and registration forms.
    pub async fn post_public<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, endpoint, Some(serde_json::to_value(body)?), false)
            .await
    }
}

fn error_from_response(status: StatusCode, body: &str) -> ApiError {
    match serde_json::from_str::<Value>(body) {
        Ok(payload) if payload.is_object() || payload.is_array() => ApiError::Payload(payload),
        _ => ApiError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn client() -> ApiClient<MemoryStore> {
        ApiClient::new("http://localhost:8000/api", Session::new(MemoryStore::new()))
    }

    #[test]
    fn test_url_joining() {
        let client = client();
        assert_eq!(client.base_url(), "http://localhost:8000/api/");
        assert_eq!(client.url("feed/"), "http://localhost:8000/api/feed/");
        assert_eq!(client.url("/lists/3/"), "http://localhost:8000/api/lists/3/");
        assert_eq!(
            client.url("http://localhost:8000/api/feed/?page=2"),
            "http://localhost:8000/api/feed/?page=2"
        );
    }

    #[test]
    fn test_with_query() {
        assert_eq!(
            ApiClient::<MemoryStore>::with_query("search/", [("q", "war & peace")]),
            "search/?q=war+%26+peace"
        );
        assert_eq!(ApiClient::<MemoryStore>::with_query("filter/", []), "filter/");
    }

    #[test]
    fn test_error_from_response() {
        assert!(matches!(
            error_from_response(StatusCode::BAD_REQUEST, r#"{"error":"bad"}"#),
            ApiError::Payload(_)
        ));
        assert!(matches!(
            error_from_response(StatusCode::NOT_FOUND, "<html>nope</html>"),
            ApiError::Status { status: 404, .. }
        ));
        assert!(matches!(
            error_from_response(StatusCode::BAD_GATEWAY, ""),
            ApiError::Status { status: 502, .. }
        ));
    }
}
