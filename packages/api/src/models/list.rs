//! User lists and their items.

use serde::Deserialize;

use super::content::{ContentKind, ContentSummary};
use super::{lenient_id, lenient_id_or_zero, string_or_empty, vec_or_empty};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListItem {
    #[serde(default, deserialize_with = "lenient_id_or_zero")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_id")]
    pub list: Option<i64>,
    #[serde(default)]
    pub content_details: Option<ContentSummary>,
    #[serde(default)]
    pub added_at: Option<String>,
}

impl ListItem {
    pub fn content_id(&self) -> Option<i64> {
        self.content_details.as_ref().map(|content| content.id)
    }
}

/// A user list. `items` is only populated by the detail endpoint and by list
/// collections that embed them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserList {
    #[serde(default, deserialize_with = "lenient_id_or_zero")]
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub is_predefined: bool,
    #[serde(default, deserialize_with = "vec_or_empty")]
    pub items: Vec<ListItem>,
}

impl UserList {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The item holding `content_id`, if any.
    pub fn find_item(&self, content_id: i64) -> Option<&ListItem> {
        self.items
            .iter()
            .find(|item| item.content_id() == Some(content_id))
    }

    pub fn contains(&self, content_id: i64) -> bool {
        self.find_item(content_id).is_some()
    }

    /// Whether the list is meant for `kind`, judged by its name.
    ///
    /// Book lists may not mention watching or movies; movie lists may not
    /// mention reading or books. Names are compared case-insensitively, in
    /// English and Turkish.
    pub fn suits(&self, kind: ContentKind) -> bool {
        // `İ` lowercases to `i` plus a combining dot.
        let name = self.name.to_lowercase().replace('\u{307}', "");
        let excluded: &[&str] = match kind {
            ContentKind::Book => &["izle", "movie"],
            ContentKind::Movie => &["oku", "kitap", "book"],
        };
        !excluded.iter().any(|word| name.contains(word))
    }

    pub fn href(&self) -> String {
        format!("#list/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn named(name: &str) -> UserList {
        UserList {
            name: name.into(),
            ..UserList::default()
        }
    }

    #[test]
    fn test_suits_by_name() {
        assert!(!named("İzlenecekler").suits(ContentKind::Book));
        assert!(!named("Movie night").suits(ContentKind::Book));
        assert!(named("Favorites").suits(ContentKind::Book));
        assert!(!named("Okunacaklar").suits(ContentKind::Movie));
        assert!(!named("KITAP kulübü").suits(ContentKind::Movie));
        assert!(!named("Books 2024").suits(ContentKind::Movie));
        assert!(named("Watch later").suits(ContentKind::Movie));
    }

    #[test]
    fn test_find_item_by_content() {
        let list: UserList = serde_json::from_value(json!({
            "id": 3,
            "name": "Favorites",
            "items": [
                {"id": 10, "list": 3, "content_details": {"id": 42, "title": "Heat"}},
                {"id": 11, "list": 3, "content_details": null}
            ]
        }))
        .unwrap();
        assert_eq!(list.item_count(), 2);
        assert_eq!(list.find_item(42).map(|item| item.id), Some(10));
        assert!(!list.contains(7));
        assert_eq!(list.href(), "#list/3");
    }
}
