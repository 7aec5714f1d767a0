//! The declarative route table.
//!
//! Entries are evaluated top to bottom and the first matching pattern wins, so
//! `profile/me/update` must sit above the `profile/` prefix. A path no entry
//! matches is handled by the controller (redirect to the feed).

use store::SessionSnapshot;

use crate::controller::Action;
use crate::fragment::QueryParams;
use crate::route::{DiscoverQuery, Route};

/// How an entry matches a route path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Exact(&'static str),
    /// The given path, or the empty path (the home route).
    ExactOrEmpty(&'static str),
    Prefix(&'static str),
}

impl Pattern {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Pattern::Exact(p) => path == *p,
            Pattern::ExactOrEmpty(p) => path.is_empty() || path == *p,
            Pattern::Prefix(p) => path.starts_with(p),
        }
    }
}

type Builder = fn(&str, &QueryParams, &SessionSnapshot) -> Action;

/// A pattern and the function that turns a matching path into an action.
pub struct RouteEntry {
    pub name: &'static str,
    pub pattern: Pattern,
    build: Builder,
}

impl RouteEntry {
    const fn new(name: &'static str, pattern: Pattern, build: Builder) -> Self {
        Self {
            name,
            pattern,
            build,
        }
    }

    pub fn build(&self, path: &str, query: &QueryParams, session: &SessionSnapshot) -> Action {
        (self.build)(path, query, session)
    }
}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .finish()
    }
}

#[rustfmt::skip]
pub static ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry::new("login",          Pattern::Exact("login"),             |_, _, _| Action::Render(Route::Login)),
    RouteEntry::new("register",       Pattern::Exact("register"),          |_, _, _| Action::Render(Route::Register)),
    RouteEntry::new("reset-password", Pattern::Exact("reset-password"),    |_, _, _| Action::Render(Route::ResetPassword)),
    RouteEntry::new("logout",         Pattern::Exact("logout"),            |_, _, _| Action::Render(Route::Logout)),
    RouteEntry::new("feed",           Pattern::ExactOrEmpty("feed"),       |_, _, _| Action::Render(Route::Feed)),
    RouteEntry::new("library",        Pattern::Exact("library"),           |_, _, _| Action::Render(Route::Library)),
    RouteEntry::new("discover",       Pattern::Exact("discover"),          build_discover),
    RouteEntry::new("profile-update", Pattern::Exact("profile/me/update"), build_profile_update),
    RouteEntry::new("profile",        Pattern::Prefix("profile/"),         build_profile),
    RouteEntry::new("search",         Pattern::Exact("search"),            build_search),
    RouteEntry::new("content",        Pattern::Prefix("content/"),         build_content),
    RouteEntry::new("list",           Pattern::Prefix("list/"),            build_list),
];

/// First entry whose pattern matches `path`.
pub fn find(path: &str) -> Option<&'static RouteEntry> {
    ROUTE_TABLE.iter().find(|entry| entry.pattern.matches(path))
}

fn segment(path: &str, index: usize) -> Option<&str> {
    path.split('/').nth(index).filter(|s| !s.is_empty())
}

fn build_discover(_: &str, query: &QueryParams, _: &SessionSnapshot) -> Action {
    Action::Render(Route::Discover(DiscoverQuery::from_params(query)))
}

fn build_profile_update(_: &str, _: &QueryParams, session: &SessionSnapshot) -> Action {
    match session.user_id {
        Some(user_id) => Action::Render(Route::ProfileUpdate { user_id }),
        None => Action::Redirect(Route::Login),
    }
}

fn build_profile(path: &str, _: &QueryParams, session: &SessionSnapshot) -> Action {
    let target = match segment(path, 1) {
        Some("me") => session.user_id.map(|id| id.to_string()),
        other => other.map(str::to_string),
    };
    match target {
        Some(id) if !matches!(id.as_str(), "me" | "null" | "undefined") => {
            Action::Render(Route::Profile { user_id: id })
        }
        _ => Action::Redirect(Route::Login),
    }
}

fn build_search(_: &str, query: &QueryParams, _: &SessionSnapshot) -> Action {
    Action::Render(Route::Search {
        query: query.get("q").map(str::to_string),
    })
}

fn build_content(path: &str, _: &QueryParams, _: &SessionSnapshot) -> Action {
    match (segment(path, 1), segment(path, 2)) {
        (Some(kind), Some(id)) => Action::Render(Route::Content {
            kind: kind.to_string(),
            id: id.to_string(),
        }),
        _ => Action::Redirect(Route::Feed),
    }
}

fn build_list(path: &str, _: &QueryParams, _: &SessionSnapshot) -> Action {
    match segment(path, 1) {
        Some(id) => Action::Render(Route::ListDetail { id: id.to_string() }),
        None => Action::Redirect(Route::Feed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names_matching(path: &str) -> Vec<&'static str> {
        ROUTE_TABLE
            .iter()
            .filter(|e| e.pattern.matches(path))
            .map(|e| e.name)
            .collect()
    }

    #[test]
    fn test_profile_update_precedes_profile_prefix() {
        assert_eq!(names_matching("profile/me/update"), vec!["profile-update", "profile"]);
        assert_eq!(find("profile/me/update").unwrap().name, "profile-update");
    }

    #[test]
    fn test_empty_path_is_feed() {
        assert_eq!(find("").unwrap().name, "feed");
    }

    #[test]
    fn test_unknown_paths_match_nothing() {
        assert!(find("settings").is_none());
        assert!(find("feeds").is_none());
        assert!(find("profile").is_none());
    }

    #[test]
    fn test_entry_names_are_unique() {
        let mut names: Vec<_> = ROUTE_TABLE.iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ROUTE_TABLE.len());
    }

    #[test]
    fn test_profile_builder() {
        let session = SessionSnapshot::authenticated("t", Some(7));
        let query = QueryParams::default();
        let entry = find("profile/me").unwrap();

        assert_eq!(
            entry.build("profile/me", &query, &session),
            Action::Render(Route::Profile { user_id: "7".into() })
        );
        assert_eq!(
            entry.build("profile/null", &query, &session),
            Action::Redirect(Route::Login)
        );
        assert_eq!(
            entry.build("profile/", &query, &session),
            Action::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_content_builder_requires_type_and_id() {
        let session = SessionSnapshot::authenticated("t", None);
        let query = QueryParams::default();
        let entry = find("content/movie").unwrap();

        assert_eq!(
            entry.build("content/movie", &query, &session),
            Action::Redirect(Route::Feed)
        );
        assert_eq!(
            entry.build("content/book/3", &query, &session),
            Action::Render(Route::Content { kind: "book".into(), id: "3".into() })
        );
    }
}
