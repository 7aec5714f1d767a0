//! Wire models for the catalogue backend.
//!
//! The backend is loose about shapes: optional fields go missing, ids arrive
//! as numbers or numeric strings, and nested objects can be `null`. Every
//! model here decodes leniently so one odd record never fails a whole page.

mod activity;
mod auth;
mod content;
mod list;
mod user;

pub use activity::{Activity, ActivityDetails, ActivityKind};
pub use auth::{LoginRequest, LoginResponse, PasswordResetConfirm, PasswordResetRequest, RegisterRequest};
pub use content::{ContentDetail, ContentKind, ContentSummary, Reply, Review};
pub use list::{ListItem, UserList};
pub use user::{Follow, ProfileResponse, ProfileStats, ProfileStatus, ProfileUpdate, UserDetails, UserSummary};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One page of a paginated collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paginated<T> {
    #[serde(default)]
    pub results: Vec<T>,
    /// Absolute URL of the next page.
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            next: None,
            count: None,
        }
    }
}

impl<T> Paginated<T> {
    pub fn has_more(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.is_empty())
    }
}

/// Reads an id that may be a number, a numeric string, or absent.
pub(crate) fn id_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(id_from_value))
}

pub(crate) fn lenient_id_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_id(deserializer).map(|id| id.unwrap_or_default())
}

/// Strings that may be `null`.
pub(crate) fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Collections that may be `null`.
pub(crate) fn vec_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paginated_decodes_missing_fields() {
        let page: Paginated<Value> = serde_json::from_value(json!({})).unwrap();
        assert!(page.results.is_empty());
        assert!(!page.has_more());

        let page: Paginated<Value> =
            serde_json::from_value(json!({"results": [1, 2], "next": "http://x/feed/?page=2"}))
                .unwrap();
        assert_eq!(page.results.len(), 2);
        assert!(page.has_more());
    }

    #[test]
    fn test_id_from_value() {
        assert_eq!(id_from_value(&json!(12)), Some(12));
        assert_eq!(id_from_value(&json!(" 12 ")), Some(12));
        assert_eq!(id_from_value(&json!("abc")), None);
        assert_eq!(id_from_value(&Value::Null), None);
    }
}
