//! Pure presentation helpers: everything the pages compute from API data
//! before rendering it.

use api::{Activity, ActivityKind, ContentKind, UserSummary};
use navigation::Filters;

/// Review excerpts in feed cards are cut at this many characters.
pub const EXCERPT_CHARS: usize = 200;

/// How many years back the discover year selector reaches.
pub const YEAR_OPTIONS: usize = 20;

/// Discover genre choices as `(value sent to the backend, label)`.
pub const GENRES: [(&str, &str); 19] = [
    ("aksiyon", "Action"),
    ("macera", "Adventure"),
    ("bilim kurgu", "Science fiction"),
    ("fantastik", "Fantasy"),
    ("romantik", "Romance"),
    ("drama", "Drama"),
    ("korku", "Horror"),
    ("komedi", "Comedy"),
    ("suç", "Crime"),
    ("gizem", "Mystery"),
    ("gerilim", "Thriller"),
    ("tarih", "History"),
    ("biyografi", "Biography"),
    ("savaş", "War"),
    ("müzikal", "Musical"),
    ("animasyon", "Animation"),
    ("belgesel", "Documentary"),
    ("western", "Western"),
    ("aile", "Family"),
];

/// The first `max_chars` characters of `text`, with `...` when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Like count and state after the viewer toggles their like.
pub fn toggle_like(count: i64, liked: bool) -> (i64, bool) {
    if liked {
        ((count - 1).max(0), false)
    } else {
        (count + 1, true)
    }
}

pub fn likes_label(count: i64) -> String {
    if count == 1 {
        "1 like".to_string()
    } else {
        format!("{count} likes")
    }
}

/// What the header line of a feed card says the user did.
#[derive(Clone, Debug, PartialEq)]
pub enum ActivityAction {
    Rated { score: Option<i64> },
    Reviewed { excerpt: String },
    AddedToList { list_name: String },
    Followed { user: Option<UserSummary> },
}

impl ActivityAction {
    /// `None` for activities the feed skips.
    pub fn of(activity: &Activity) -> Option<Self> {
        if !activity.is_renderable() {
            return None;
        }
        let details = activity.content_object_details.as_ref()?;
        let action = match activity.kind()? {
            ActivityKind::Rating => ActivityAction::Rated {
                score: details.score,
            },
            ActivityKind::Review => {
                let review = details.review_details.as_ref();
                let text = review
                    .map(|review| review.text.as_str())
                    .filter(|text| !text.is_empty())
                    .or(details.review_excerpt.as_deref())
                    .unwrap_or_default();
                ActivityAction::Reviewed {
                    excerpt: excerpt(text, EXCERPT_CHARS),
                }
            }
            ActivityKind::ListAdd => ActivityAction::AddedToList {
                list_name: details.list_name.clone().unwrap_or_default(),
            },
            ActivityKind::Follow => ActivityAction::Followed {
                user: details
                    .followed_user
                    .clone()
                    .filter(|user| user.id != 0),
            },
        };
        Some(action)
    }
}

/// The feed's renderable activities, in order.
pub fn renderable(activities: &[Activity]) -> Vec<Activity> {
    activities
        .iter()
        .filter(|activity| activity.is_renderable())
        .cloned()
        .collect()
}

/// Link for an entry in a profile's activity list: `(title, href)`.
///
/// Follows point at the followed user's profile, everything else at the
/// content page.
pub fn profile_activity_link(activity: &Activity) -> Option<(String, String)> {
    let details = activity.content_object_details.as_ref()?;
    if let Some(user) = details.followed_user.as_ref().filter(|user| user.id != 0) {
        return Some((format!("@{}", user.username), user.profile_href()));
    }
    let content = details.content_data.as_ref();
    let title = content
        .map(|content| content.title.clone())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| "Untitled".to_string());
    let id = content
        .map(|content| content.id)
        .filter(|id| *id != 0)
        .or(activity.object_id)?;
    let kind = details.content_type.as_deref().unwrap_or("unknown");
    let href = if kind.eq_ignore_ascii_case("user") {
        format!("#profile/{id}")
    } else {
        format!("#content/{}/{id}", kind.to_lowercase())
    };
    Some((title, href))
}

/// The years offered by the discover filter, newest first.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (0..YEAR_OPTIONS as i32).map(|back| current_year - back).collect()
}

/// Filters from the raw discover form values. Blank values are dropped and
/// the minimum score is kept only when it is a number from 0 to 10.
pub fn filters_from_form(genre: &str, year: &str, min_score: &str) -> Filters {
    let non_empty = |value: &str| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    };
    Filters {
        genre: non_empty(genre),
        year: non_empty(year),
        min_score: non_empty(min_score)
            .filter(|score| score.parse::<f64>().is_ok_and(|s| (0.0..=10.0).contains(&s))),
    }
}

/// Label for the creator line of a content card.
pub fn creator_line(kind: Option<ContentKind>, creator: Option<&str>) -> String {
    let label = kind.map(|kind| kind.creator_label()).unwrap_or("Creator");
    format!("{label}: {}", creator.unwrap_or("Unknown"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn activity(value: serde_json::Value) -> Activity {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_excerpt_cuts_on_characters() {
        assert_eq!(excerpt("short", 200), "short");
        let long = "ş".repeat(201);
        let cut = excerpt(&long, 200);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
        assert_eq!(excerpt(&"a".repeat(200), 200).len(), 200);
    }

    #[test]
    fn test_toggle_like() {
        assert_eq!(toggle_like(3, false), (4, true));
        assert_eq!(toggle_like(3, true), (2, false));
        assert_eq!(toggle_like(0, true), (0, false));
        assert_eq!(likes_label(1), "1 like");
        assert_eq!(likes_label(0), "0 likes");
    }

    #[test]
    fn test_actions_for_each_kind() {
        let rating = activity(json!({
            "activity_type": 1, "object_id": 3,
            "content_object_details": {"content_data": {"id": 8, "title": "Alien"}, "score": 9}
        }));
        assert_eq!(
            ActivityAction::of(&rating),
            Some(ActivityAction::Rated { score: Some(9) })
        );

        let review = activity(json!({
            "activity_type": 2, "object_id": 3,
            "content_object_details": {
                "content_data": {"id": 8, "title": "Alien"},
                "review_details": {"id": 3, "text": ""},
                "review_excerpt": "From the excerpt"
            }
        }));
        assert_eq!(
            ActivityAction::of(&review),
            Some(ActivityAction::Reviewed { excerpt: "From the excerpt".into() })
        );

        let list_add = activity(json!({
            "activity_type": 3, "object_id": 3,
            "content_object_details": {"content_data": {"id": 8, "title": "Alien"}, "list_name": "Favorites"}
        }));
        assert_eq!(
            ActivityAction::of(&list_add),
            Some(ActivityAction::AddedToList { list_name: "Favorites".into() })
        );

        let follow = activity(json!({
            "activity_type": 4, "content_object_details": {"followed_user": null}
        }));
        assert_eq!(
            ActivityAction::of(&follow),
            Some(ActivityAction::Followed { user: None })
        );
    }

    #[test]
    fn test_invalid_activities_are_dropped() {
        let activities = vec![
            activity(json!({"activity_type": 1, "object_id": 3})),
            activity(json!({"activity_type": 4, "content_object_details": {}})),
        ];
        let kept = renderable(&activities);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].kind(), Some(ActivityKind::Follow));
        assert_eq!(ActivityAction::of(&activities[0]), None);
    }

    #[test]
    fn test_profile_activity_links() {
        let rating = activity(json!({
            "activity_type": 1, "object_id": 3,
            "content_object_details": {"content_type": "Movie", "content_data": {"id": 8, "title": "Alien"}}
        }));
        assert_eq!(
            profile_activity_link(&rating),
            Some(("Alien".into(), "#content/movie/8".into()))
        );

        let follow = activity(json!({
            "activity_type": 4, "object_id": 12,
            "content_object_details": {"followed_user": {"id": 5, "username": "can"}}
        }));
        assert_eq!(
            profile_activity_link(&follow),
            Some(("@can".into(), "#profile/5".into()))
        );

        let bare = activity(json!({"activity_type": 1, "object_id": 3}));
        assert_eq!(profile_activity_link(&bare), None);
    }

    #[test]
    fn test_year_options() {
        let years = year_options(2024);
        assert_eq!(years.len(), 20);
        assert_eq!(years[0], 2024);
        assert_eq!(years[19], 2005);
    }

    #[test]
    fn test_filters_from_form() {
        let filters = filters_from_form(" drama ", "", "7");
        assert_eq!(filters.genre.as_deref(), Some("drama"));
        assert_eq!(filters.year, None);
        assert_eq!(filters.min_score.as_deref(), Some("7"));

        assert_eq!(filters_from_form("", "", "11").min_score, None);
        assert_eq!(filters_from_form("", "", "abc").min_score, None);
        assert!(filters_from_form("", " ", "").is_empty());
    }

    #[test]
    fn test_creator_line() {
        assert_eq!(
            creator_line(Some(ContentKind::Book), Some("Orhan Pamuk")),
            "Author: Orhan Pamuk"
        );
        assert_eq!(creator_line(Some(ContentKind::Movie), None), "Director: Unknown");
    }
}
