//! Feed activities.

use serde::Deserialize;

use super::content::{ContentKind, ContentSummary, Reply, Review};
use super::user::UserSummary;
use super::{lenient_id, lenient_id_or_zero, string_or_empty, vec_or_empty};

/// What an activity records. Wire values are `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Rating,
    Review,
    ListAdd,
    Follow,
}

impl ActivityKind {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(ActivityKind::Rating),
            2 => Some(ActivityKind::Review),
            3 => Some(ActivityKind::ListAdd),
            4 => Some(ActivityKind::Follow),
            _ => None,
        }
    }

    /// Ratings and reviews can be liked and replied to.
    pub fn is_interactive(&self) -> bool {
        matches!(self, ActivityKind::Rating | ActivityKind::Review)
    }

    /// `content_type` sent when replying to the activity's object.
    pub fn reply_target(&self) -> Option<&'static str> {
        match self {
            ActivityKind::Rating => Some("rating"),
            ActivityKind::Review => Some("review"),
            _ => None,
        }
    }
}

/// The `content_object_details` of an activity. Which fields are present
/// depends on the activity kind.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActivityDetails {
    /// `Book`, `Movie` or `User`.
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub content_data: Option<ContentSummary>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub score: Option<i64>,
    #[serde(default)]
    pub likes_count: Option<i64>,
    #[serde(default)]
    pub is_liked: Option<bool>,
    #[serde(default, deserialize_with = "vec_or_empty")]
    pub replies: Vec<Reply>,
    #[serde(default)]
    pub review_details: Option<Review>,
    #[serde(default)]
    pub review_excerpt: Option<String>,
    #[serde(default)]
    pub list_name: Option<String>,
    #[serde(default)]
    pub followed_user: Option<UserSummary>,
}

impl ActivityDetails {
    pub fn content_kind(&self) -> Option<ContentKind> {
        self.content_type.as_deref().and_then(ContentKind::parse)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "lenient_id_or_zero")]
    pub id: i64,
    #[serde(default)]
    pub user: UserSummary,
    #[serde(default, deserialize_with = "lenient_id_or_zero")]
    pub activity_type: i64,
    #[serde(default)]
    pub activity_type_display: Option<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub created_at: String,
    #[serde(default)]
    pub content_object_details: Option<ActivityDetails>,
    /// Id of the rating, review, list item or follow behind the activity.
    #[serde(default, deserialize_with = "lenient_id")]
    pub object_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub interaction_id: Option<i64>,
}

impl Activity {
    pub fn kind(&self) -> Option<ActivityKind> {
        ActivityKind::from_code(self.activity_type)
    }

    /// The rating or review this activity can be liked or replied through.
    pub fn interaction_target(&self) -> Option<i64> {
        self.object_id.filter(|id| *id != 0)
    }

    /// The book or movie the activity is about.
    pub fn content(&self) -> Option<&ContentSummary> {
        let details = self.content_object_details.as_ref()?;
        let content = match self.kind()? {
            ActivityKind::Review => details
                .review_details
                .as_ref()
                .and_then(|review| review.content_data.as_ref())
                .or(details.content_data.as_ref()),
            ActivityKind::Rating | ActivityKind::ListAdd => details.content_data.as_ref(),
            ActivityKind::Follow => None,
        }?;
        (content.id != 0).then_some(content)
    }

    /// Replies shown under the card.
    pub fn replies(&self) -> &[Reply] {
        let Some(details) = self.content_object_details.as_ref() else {
            return &[];
        };
        match self.kind() {
            Some(ActivityKind::Review) => details
                .review_details
                .as_ref()
                .map(|review| review.replies.as_slice())
                .unwrap_or(&[]),
            Some(ActivityKind::Rating) => &details.replies,
            _ => &[],
        }
    }

    /// Like count and whether the viewer has liked it.
    pub fn like_state(&self) -> (i64, bool) {
        let Some(details) = self.content_object_details.as_ref() else {
            return (0, false);
        };
        match self.kind() {
            Some(ActivityKind::Review) => details
                .review_details
                .as_ref()
                .map(|review| {
                    (
                        review.likes_count.unwrap_or(0),
                        review.is_liked.unwrap_or(false),
                    )
                })
                .unwrap_or((0, false)),
            _ => (
                details.likes_count.unwrap_or(0),
                details.is_liked.unwrap_or(false),
            ),
        }
    }

    /// Whether the activity has everything its card needs.
    ///
    /// Activities without details, or non-follow activities without an object
    /// id, are skipped; so are content activities whose content is missing and
    /// reviews without review details.
    pub fn is_renderable(&self) -> bool {
        let Some(kind) = self.kind() else {
            return false;
        };
        let Some(details) = self.content_object_details.as_ref() else {
            return false;
        };
        if kind != ActivityKind::Follow && self.interaction_target().is_none() {
            return false;
        }
        match kind {
            ActivityKind::Rating | ActivityKind::ListAdd => self.content().is_some(),
            ActivityKind::Review => details.review_details.is_some() && self.content().is_some(),
            ActivityKind::Follow => true,
        }
    }
}
