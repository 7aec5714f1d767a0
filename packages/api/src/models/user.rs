//! User-facing account and profile records.

use serde::{Deserialize, Serialize};

use super::{lenient_id, lenient_id_or_zero, string_or_empty};

/// The compact user reference embedded in activities, reviews and replies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default, deserialize_with = "lenient_id_or_zero")]
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserSummary {
    pub fn profile_href(&self) -> String {
        format!("#profile/{}", self.id)
    }
}

/// The `user_details` object of a profile response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDetails {
    #[serde(default, deserialize_with = "lenient_id_or_zero")]
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub last_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl UserDetails {
    /// `First Last (@username)`, with placeholders for blank parts.
    pub fn display_name(&self) -> String {
        let first = if self.first_name.is_empty() {
            "Unnamed"
        } else {
            &self.first_name
        };
        let username = if self.username.is_empty() {
            "user"
        } else {
            &self.username
        };
        let full = format!("{first} {}", self.last_name);
        format!("{} (@{username})", full.trim_end())
    }

    /// The avatar to show, falling back to `default` when unset or blank.
    pub fn avatar_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.avatar_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(default)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileStats {
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
}

/// The viewer's relation to the profile owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileStatus {
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub is_following: bool,
}

/// Response of `GET profile/user/<id>/`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub user_details: UserDetails,
    #[serde(default)]
    pub stats: ProfileStats,
    #[serde(default)]
    pub profile_status: ProfileStatus,
}

/// Body of `PATCH profile/user/<id>/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub avatar_url: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub bio: String,
}

impl From<&UserDetails> for ProfileUpdate {
    fn from(details: &UserDetails) -> Self {
        Self {
            avatar_url: details.avatar_url.clone().unwrap_or_default(),
            first_name: details.first_name.clone(),
            last_name: details.last_name.clone(),
            email: details.email.clone(),
            username: details.username.clone(),
            bio: details.bio.clone().unwrap_or_default(),
        }
    }
}

/// A follow record owned by the current user.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Follow {
    #[serde(default, deserialize_with = "lenient_id_or_zero")]
    pub id: i64,
    /// Id of the followed user.
    #[serde(default, deserialize_with = "lenient_id")]
    pub following: Option<i64>,
    #[serde(default)]
    pub following_details: Option<UserSummary>,
}
