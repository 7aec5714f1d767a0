//! Search, discovery, content detail, ratings and reviews.

use std::fmt::Display;

use serde_json::{json, Value};
use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ContentDetail, ContentKind, ContentSummary};

impl<S: SessionStore> ApiClient<S> {
    pub async fn search(&self, query: &str) -> Result<Vec<ContentSummary>, ApiError> {
        self.get(&Self::with_query("search/", [("q", query)])).await
    }

    /// The `popular` or `top_rated` showcase.
    pub async fn discover(&self, showcase: &str) -> Result<Vec<ContentSummary>, ApiError> {
        self.get(&Self::with_query("discover/", [("type", showcase)]))
            .await
    }

    /// Content matching every given filter. Pairs are sent in order.
    pub async fn filter<'a>(
        &self,
        filters: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Vec<ContentSummary>, ApiError> {
        self.get(&Self::with_query("filter/", filters)).await
    }

    pub async fn content_detail(
        &self,
        kind: &str,
        id: impl Display,
    ) -> Result<ContentDetail, ApiError> {
        self.get(&format!("content/{}/{id}/", kind.to_lowercase()))
            .await
    }

    /// Rate 1–10. Rating again replaces the previous score.
    pub async fn rate(&self, kind: ContentKind, id: i64, score: u8) -> Result<Value, ApiError> {
        let body = json!({
            "score": score,
            "content_type": kind.as_str(),
            "object_id": id,
        });
        self.post("ratings/", &body).await
    }

    pub async fn create_review(
        &self,
        kind: ContentKind,
        id: i64,
        text: &str,
    ) -> Result<Value, ApiError> {
        let body = json!({
            "text": text,
            "content_type": kind.as_str(),
            "object_id": id,
        });
        self.post("reviews/", &body).await
    }

    pub async fn update_review(&self, review_id: i64, text: &str) -> Result<Value, ApiError> {
        self.patch(&format!("reviews/{review_id}/"), &json!({ "text": text }))
            .await
    }

    pub async fn delete_review(&self, review_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("reviews/{review_id}/")).await
    }
}
