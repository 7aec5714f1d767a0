//! Books, movies, and the reviews attached to them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::user::UserSummary;
use super::{lenient_id, lenient_id_or_zero, string_or_empty, vec_or_empty};

/// The two catalogue kinds. Paths and request bodies use the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Book,
    Movie,
}

impl ContentKind {
    /// Case-insensitive; `None` for anything but `book` and `movie`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "book" => Some(ContentKind::Book),
            "movie" => Some(ContentKind::Movie),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Book => "book",
            ContentKind::Movie => "movie",
        }
    }

    /// Label for the creator line of a content card.
    pub fn creator_label(&self) -> &'static str {
        match self {
            ContentKind::Book => "Author",
            ContentKind::Movie => "Director",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalogue entry as it appears in search results, lists and activities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSummary {
    #[serde(default, deserialize_with = "lenient_id_or_zero")]
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub title: String,
    /// `Book`/`Movie` in any case; absent on some nested payloads.
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub director_name: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl ContentSummary {
    pub fn kind(&self) -> Option<ContentKind> {
        self.content_type.as_deref().and_then(ContentKind::parse)
    }

    /// Poster for movies, cover for books, `placeholder` otherwise.
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        non_blank(&self.poster_path)
            .or_else(|| non_blank(&self.cover_url))
            .unwrap_or(placeholder)
    }

    /// Authors for books, director for movies.
    pub fn creator(&self) -> Option<&str> {
        non_blank(&self.authors)
            .or_else(|| non_blank(&self.director_name))
            .or_else(|| non_blank(&self.director))
    }

    /// `#content/<kind>/<id>`, using `fallback` when the record carries no kind.
    pub fn href(&self, fallback: Option<ContentKind>) -> Option<String> {
        let kind = self.kind().or(fallback)?;
        Some(format!("#content/{kind}/{}", self.id))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// A reply under a rating or review.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Reply {
    #[serde(default, deserialize_with = "lenient_id_or_zero")]
    pub id: i64,
    #[serde(default)]
    pub user: UserSummary,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub created_at: String,
}

/// A text review.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "lenient_id_or_zero")]
    pub id: i64,
    #[serde(default)]
    pub user: UserSummary,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub created_at: String,
    #[serde(default)]
    pub likes_count: Option<i64>,
    #[serde(default)]
    pub is_liked: Option<bool>,
    #[serde(default, deserialize_with = "vec_or_empty")]
    pub replies: Vec<Reply>,
    /// Present when the review is embedded in a feed activity.
    #[serde(default)]
    pub content_data: Option<ContentSummary>,
}

impl Review {
    pub fn is_written_by(&self, user_id: Option<i64>) -> bool {
        user_id.is_some_and(|id| id == self.user.id)
    }
}

/// Response of `GET content/<kind>/<id>/`. Books and movies share the record;
/// fields of the other kind stay empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContentDetail {
    #[serde(default, deserialize_with = "lenient_id_or_zero")]
    pub id: i64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub director_name: Option<String>,
    /// Comma separated.
    #[serde(default)]
    pub actors_list: Option<String>,
    /// Comma separated.
    #[serde(default)]
    pub genres_list: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub page_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub publication_year: Option<i64>,
    #[serde(default)]
    pub average_score: Option<f64>,
    /// The viewer's own score, 1–10.
    #[serde(default, deserialize_with = "lenient_id")]
    pub user_score: Option<i64>,
    #[serde(default, deserialize_with = "vec_or_empty")]
    pub reviews: Vec<Review>,
}

impl ContentDetail {
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        non_blank(&self.cover_url)
            .or_else(|| non_blank(&self.poster_path))
            .unwrap_or(placeholder)
    }

    pub fn summary_text(&self) -> Option<&str> {
        non_blank(&self.overview).or_else(|| non_blank(&self.description))
    }

    /// The first three names of the cast.
    pub fn leading_actors(&self) -> Option<String> {
        let actors = non_blank(&self.actors_list)?;
        Some(
            actors
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .take(3)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    /// Average score with two decimals, `None` when unrated.
    pub fn average_display(&self) -> Option<String> {
        self.average_score
            .filter(|score| *score > 0.0)
            .map(|score| format!("{score:.2}"))
    }
}
