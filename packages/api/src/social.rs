//! Feed, likes, replies and follows.

use std::ops::ControlFlow;

use serde_json::{json, Value};
use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Activity, Follow, Paginated};

impl<S: SessionStore> ApiClient<S> {
    /// One page of the feed. `cursor` is the `next` URL of the previous page.
    pub async fn feed(&self, cursor: Option<&str>) -> Result<Paginated<Activity>, ApiError> {
        self.get(cursor.unwrap_or("feed/")).await
    }

    /// Toggle the viewer's like on a rating or review.
    pub async fn like(&self, object_id: i64) -> Result<Value, ApiError> {
        self.post_empty(&format!("reviews/{object_id}/like/")).await
    }

    /// Reply to a rating or review. `target` is `rating` or `review`.
    pub async fn reply(&self, target: &str, object_id: i64, text: &str) -> Result<Value, ApiError> {
        let body = json!({
            "text": text,
            "object_id": object_id,
            "content_type": target,
        });
        self.post("replies/", &body).await
    }

    pub async fn follows(&self) -> Result<Paginated<Follow>, ApiError> {
        self.get("follows/").await
    }

    pub async fn follow(&self, user_id: i64) -> Result<Follow, ApiError> {
        self.post("follows/", &json!({ "following": user_id })).await
    }

    /// Stop following `user_id`.
    ///
    /// Follow records are addressed by their own id, so every page of the
    /// viewer's records is searched first. Returns `false` when there was
    /// nothing to delete.
    pub async fn unfollow(&self, user_id: i64) -> Result<bool, ApiError> {
        let record = self
            .walk_pages("follows/", |follow: Follow| {
                if follow.following == Some(user_id) {
                    ControlFlow::Break(follow.id)
                } else {
                    ControlFlow::Continue(())
                }
            })
            .await?;
        let Some(record) = record else {
            tracing::info!(user_id, "no follow record to delete");
            return Ok(false);
        };
        self.delete(&format!("follows/{record}/")).await?;
        Ok(true)
    }
}
