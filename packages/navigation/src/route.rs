//! The pages the client can show.

use crate::fragment::QueryParams;

/// Showcase used by `#discover` when no `type` is given.
pub const DEFAULT_SHOWCASE: &str = "popular";

/// One variant per page renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    ResetPassword,
    Logout,
    Feed,
    Library,
    Discover(DiscoverQuery),
    /// Edit form for the current user's profile.
    ProfileUpdate { user_id: i64 },
    /// A user's profile. `me` has already been resolved to a concrete id.
    Profile { user_id: String },
    Search { query: Option<String> },
    Content { kind: String, id: String },
    ListDetail { id: String },
}

impl Route {
    /// The canonical fragment (without `#`) that resolves back to this route.
    pub fn to_fragment(&self) -> String {
        match self {
            Route::Login => "login".to_string(),
            Route::Register => "register".to_string(),
            Route::ResetPassword => "reset-password".to_string(),
            Route::Logout => "logout".to_string(),
            Route::Feed => "feed".to_string(),
            Route::Library => "library".to_string(),
            Route::Discover(query) => {
                let params = query.to_params();
                if params.is_empty() {
                    "discover".to_string()
                } else {
                    format!("discover?{}", params.to_query_string())
                }
            }
            Route::ProfileUpdate { .. } => "profile/me/update".to_string(),
            Route::Profile { user_id } => format!("profile/{user_id}"),
            Route::Search { query: Some(q) } => {
                format!("search?{}", QueryParams::default().with("q", q.as_str()).to_query_string())
            }
            Route::Search { query: None } => "search".to_string(),
            Route::Content { kind, id } => format!("content/{kind}/{id}"),
            Route::ListDetail { id } => format!("list/{id}"),
        }
    }

    /// The same fragment with a leading `#`, ready for an `href`.
    pub fn href(&self) -> String {
        format!("#{}", self.to_fragment())
    }

}

/// Parameters of the `#discover` page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoverQuery {
    pub mode: DiscoverMode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiscoverMode {
    /// Curated showcase, e.g. `popular` or `top_rated`.
    Showcase { kind: String },
    /// Content filtered by genre, year and minimum score.
    Filter(Filters),
}

/// Advanced discovery filters. Empty values are stored as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    pub genre: Option<String>,
    pub year: Option<String>,
    pub min_score: Option<String>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.year.is_none() && self.min_score.is_none()
    }

    /// Query parameters in the order the backend's `filter/` endpoint expects.
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::default();
        if let Some(genre) = &self.genre {
            params = params.with("genre", genre.as_str());
        }
        if let Some(min_score) = &self.min_score {
            params = params.with("min_score", min_score.as_str());
        }
        if let Some(year) = &self.year {
            params = params.with("year", year.as_str());
        }
        params
    }
}

impl DiscoverQuery {
    /// Decide the discover mode from the fragment's query parameters: any of
    /// `genre`, `year` or `min_score` selects filter mode.
    pub fn from_params(params: &QueryParams) -> Self {
        let filters = Filters {
            genre: params.get_non_empty("genre").map(str::to_string),
            year: params.get_non_empty("year").map(str::to_string),
            min_score: params.get_non_empty("min_score").map(str::to_string),
        };
        let mode = if filters.is_empty() {
            DiscoverMode::Showcase {
                kind: params
                    .get_non_empty("type")
                    .unwrap_or(DEFAULT_SHOWCASE)
                    .to_string(),
            }
        } else {
            DiscoverMode::Filter(filters)
        };
        Self { mode }
    }

    pub fn showcase(kind: impl Into<String>) -> Self {
        Self {
            mode: DiscoverMode::Showcase { kind: kind.into() },
        }
    }

    /// Filter mode for `filters`. `None` when no filter is set, since an
    /// empty filter query reads back as the default showcase.
    pub fn filter(filters: Filters) -> Option<Self> {
        (!filters.is_empty()).then(|| Self {
            mode: DiscoverMode::Filter(filters),
        })
    }

    fn to_params(&self) -> QueryParams {
        match &self.mode {
            DiscoverMode::Showcase { kind } => QueryParams::default().with("type", kind.as_str()),
            DiscoverMode::Filter(filters) => filters.to_params(),
        }
    }
}

impl Default for DiscoverQuery {
    fn default() -> Self {
        Self::showcase(DEFAULT_SHOWCASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_defaults_to_popular_showcase() {
        let query = DiscoverQuery::from_params(&QueryParams::parse(""));
        assert_eq!(query, DiscoverQuery::showcase("popular"));
    }

    #[test]
    fn test_discover_with_type() {
        let query = DiscoverQuery::from_params(&QueryParams::parse("type=top_rated"));
        assert_eq!(query, DiscoverQuery::showcase("top_rated"));
    }

    #[test]
    fn test_any_filter_selects_filter_mode() {
        let query = DiscoverQuery::from_params(&QueryParams::parse("type=popular&year=2020"));
        assert_eq!(
            query,
            DiscoverQuery::filter(Filters {
                year: Some("2020".into()),
                ..Filters::default()
            })
            .unwrap()
        );
    }

    #[test]
    fn test_empty_filter_values_are_ignored() {
        let query = DiscoverQuery::from_params(&QueryParams::parse("genre=&year=&min_score="));
        assert_eq!(query, DiscoverQuery::default());
    }

    #[test]
    fn test_no_filter_query_without_filters() {
        assert_eq!(DiscoverQuery::filter(Filters::default()), None);
    }

    #[test]
    fn test_fragments() {
        assert_eq!(Route::Feed.to_fragment(), "feed");
        assert_eq!(Route::ProfileUpdate { user_id: 3 }.to_fragment(), "profile/me/update");
        assert_eq!(
            Route::Content { kind: "book".into(), id: "12".into() }.href(),
            "#content/book/12"
        );
        assert_eq!(
            Route::Search { query: Some("dune & co".into()) }.to_fragment(),
            "search?q=dune+%26+co"
        );
        assert_eq!(
            DiscoverQuery::filter(Filters {
                genre: Some("drama".into()),
                year: Some("1999".into()),
                min_score: Some("8".into()),
            })
            .map(Route::Discover)
            .unwrap()
            .to_fragment(),
            "discover?genre=drama&min_score=8&year=1999"
        );
    }
}
