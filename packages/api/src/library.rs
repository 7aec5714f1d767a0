//! User lists and list membership.

use std::fmt::Display;
use std::ops::ControlFlow;

use serde_json::json;
use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ContentKind, ListItem, Paginated, UserList};

/// One of the viewer's lists as seen from a single piece of content.
#[derive(Debug, Clone, PartialEq)]
pub struct ListMembership {
    pub list: UserList,
    /// Whether the list already holds the content.
    pub contains: bool,
}

impl<S: SessionStore> ApiClient<S> {
    pub async fn lists(&self) -> Result<Paginated<UserList>, ApiError> {
        self.get("lists/").await
    }

    pub async fn create_list(&self, name: &str) -> Result<UserList, ApiError> {
        let body = json!({ "name": name.trim(), "is_public": true });
        self.post("lists/", &body).await
    }

    pub async fn list_detail(&self, id: impl Display) -> Result<UserList, ApiError> {
        self.get(&format!("lists/{id}/")).await
    }

    pub async fn add_to_list(
        &self,
        list_id: i64,
        kind: ContentKind,
        content_id: i64,
    ) -> Result<ListItem, ApiError> {
        let body = json!({
            "list": list_id,
            "content_type": kind.as_str(),
            "object_id": content_id,
        });
        self.post("listitems/", &body).await
    }

    pub async fn remove_list_item(&self, item_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("listitems/{item_id}/")).await
    }

    /// Remove `content_id` from a list, looking up its item first.
    pub async fn remove_from_list(&self, list_id: i64, content_id: i64) -> Result<(), ApiError> {
        let list = self.list_detail(list_id).await?;
        let item = list.find_item(content_id).ok_or_else(|| {
            ApiError::NotFound("this content is not in the list".to_string())
        })?;
        self.remove_list_item(item.id).await
    }

    /// The viewer's lists suited to `kind`, across every page, each with its
    /// items loaded and whether it holds `content_id`.
    pub async fn list_membership(
        &self,
        kind: ContentKind,
        content_id: i64,
    ) -> Result<Vec<ListMembership>, ApiError> {
        let mut suited = Vec::new();
        self.walk_pages("lists/", |list: UserList| {
            if list.suits(kind) {
                suited.push(list.id);
            }
            ControlFlow::<()>::Continue(())
        })
        .await?;

        let mut memberships = Vec::new();
        for id in suited {
            let list = self.list_detail(id).await?;
            let contains = list.contains(content_id);
            memberships.push(ListMembership { list, contains });
        }
        Ok(memberships)
    }
}
