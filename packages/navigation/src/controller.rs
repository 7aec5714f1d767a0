//! The navigation controller: one fragment in, one decision out.

use store::SessionSnapshot;

use crate::fragment::Fragment;
use crate::links::{active_link, NavLink};
use crate::route::Route;
use crate::table;

/// Route paths reachable without a session.
pub const PUBLIC_PATHS: [&str; 3] = ["login", "register", "reset-password"];

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// What the shell should do with a fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Mount the page for this route.
    Render(Route),
    /// Replace the fragment with this route's and resolve again.
    Redirect(Route),
}

/// Visibility of the navigation bar regions.
///
/// Exactly one of the two link groups is visible; the search bar follows the
/// authenticated group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavChrome {
    pub auth_links: bool,
    pub search_bar: bool,
    pub public_links: bool,
}

impl NavChrome {
    pub fn for_session(authenticated: bool) -> Self {
        Self {
            auth_links: authenticated,
            search_bar: authenticated,
            public_links: !authenticated,
        }
    }

    /// Links to show, in display order.
    pub fn visible_links(&self) -> &'static [NavLink] {
        if self.auth_links {
            &NavLink::AUTHENTICATED
        } else {
            &NavLink::PUBLIC
        }
    }
}

/// Outcome of resolving one fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub chrome: NavChrome,
    pub action: Action,
    /// Link to highlight. `None` for redirects, which resolve again anyway.
    pub active_link: Option<NavLink>,
}

impl Resolution {
    pub fn route(&self) -> Option<&Route> {
        match &self.action {
            Action::Render(route) => Some(route),
            Action::Redirect(_) => None,
        }
    }
}

/// Resolve a fragment against the current session.
///
/// Order of work: navigation chrome from session presence, the session gate
/// (anything but [`PUBLIC_PATHS`] needs a token), then the first matching
/// [`table::ROUTE_TABLE`] entry. Unmatched paths redirect to the feed.
pub fn resolve(fragment: &str, session: &SessionSnapshot) -> Resolution {
    let fragment = Fragment::parse(fragment);
    let path = fragment.path();
    let authenticated = session.is_authenticated();
    let chrome = NavChrome::for_session(authenticated);

    if !authenticated && !is_public_path(path) {
        tracing::info!(path, "no session, redirecting to login");
        return Resolution {
            chrome,
            action: Action::Redirect(Route::Login),
            active_link: None,
        };
    }

    let action = match table::find(path) {
        Some(entry) => {
            tracing::debug!(path, entry = entry.name, "route matched");
            entry.build(path, &fragment.query(), session)
        }
        None => {
            tracing::info!(path, "unknown route, redirecting to feed");
            Action::Redirect(Route::Feed)
        }
    };

    let active_link = match action {
        Action::Render(_) => active_link(path),
        Action::Redirect(_) => None,
    };

    Resolution {
        chrome,
        action,
        active_link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{DiscoverQuery, Filters};

    fn signed_in() -> SessionSnapshot {
        SessionSnapshot::authenticated("token", Some(7))
    }

    fn signed_in_without_id() -> SessionSnapshot {
        SessionSnapshot::authenticated("token", None)
    }

    #[test]
    fn test_unknown_routes_redirect_to_feed() {
        for fragment in ["#nowhere", "#feed/extra", "#settings?x=1", "#Library", "#list"] {
            let resolution = resolve(fragment, &signed_in());
            assert_eq!(resolution.action, Action::Redirect(Route::Feed), "{fragment}");
            assert_eq!(resolution.active_link, None);
        }
    }

    #[test]
    fn test_protected_routes_require_session() {
        let anonymous = SessionSnapshot::anonymous();
        for fragment in [
            "", "#feed", "#library", "#logout", "#discover?genre=drama", "#profile/me",
            "#profile/me/update", "#search?q=x", "#content/movie/42", "#list/3", "#nowhere",
        ] {
            let resolution = resolve(fragment, &anonymous);
            assert_eq!(resolution.action, Action::Redirect(Route::Login), "{fragment}");
            assert!(resolution.route().is_none());
        }
    }

    #[test]
    fn test_public_routes_render_without_session() {
        let anonymous = SessionSnapshot::anonymous();
        assert_eq!(resolve("#login", &anonymous).action, Action::Render(Route::Login));
        assert_eq!(resolve("#register", &anonymous).action, Action::Render(Route::Register));
        assert_eq!(
            resolve("#reset-password", &anonymous).action,
            Action::Render(Route::ResetPassword)
        );
    }

    #[test]
    fn test_profile_me_resolves_like_explicit_id() {
        let me = resolve("#profile/me", &signed_in());
        let explicit = resolve("#profile/7", &signed_in());
        assert_eq!(me, explicit);
        assert_eq!(me.action, Action::Render(Route::Profile { user_id: "7".into() }));
        assert_eq!(me.active_link, Some(NavLink::Profile));
    }

    #[test]
    fn test_profile_me_without_user_id_redirects_to_login() {
        let resolution = resolve("#profile/me", &signed_in_without_id());
        assert_eq!(resolution.action, Action::Redirect(Route::Login));
    }

    #[test]
    fn test_profile_update_needs_user_id() {
        assert_eq!(
            resolve("#profile/me/update", &signed_in()).action,
            Action::Render(Route::ProfileUpdate { user_id: 7 })
        );
        assert_eq!(
            resolve("#profile/me/update", &signed_in_without_id()).action,
            Action::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_discover_modes() {
        assert_eq!(
            resolve("#discover?genre=drama", &signed_in()).action,
            Action::Render(Route::Discover(
                DiscoverQuery::filter(Filters {
                    genre: Some("drama".into()),
                    ..Filters::default()
                })
                .unwrap()
            ))
        );
        assert_eq!(
            resolve("#discover", &signed_in()).action,
            Action::Render(Route::Discover(DiscoverQuery::showcase("popular")))
        );
    }

    #[test]
    fn test_content_route() {
        let resolution = resolve("#content/movie/42", &signed_in_without_id());
        assert_eq!(
            resolution.action,
            Action::Render(Route::Content { kind: "movie".into(), id: "42".into() })
        );
        assert_eq!(resolution.active_link, Some(NavLink::Library));
    }

    #[test]
    fn test_search_query_is_optional() {
        assert_eq!(
            resolve("#search", &signed_in()).action,
            Action::Render(Route::Search { query: None })
        );
        assert_eq!(
            resolve("#search?q=dune", &signed_in()).action,
            Action::Render(Route::Search { query: Some("dune".into()) })
        );
    }

    #[test]
    fn test_empty_fragment_is_home() {
        let resolution = resolve("", &signed_in());
        assert_eq!(resolution.action, Action::Render(Route::Feed));
        assert_eq!(resolution.active_link, Some(NavLink::Feed));
    }

    #[test]
    fn test_exactly_one_link_group_visible() {
        let sessions = [SessionSnapshot::anonymous(), signed_in(), signed_in_without_id()];
        let fragments = ["", "#login", "#feed", "#profile/me", "#nowhere", "#logout"];
        for session in &sessions {
            for fragment in fragments {
                let chrome = resolve(fragment, session).chrome;
                assert!(chrome.auth_links ^ chrome.public_links);
                assert_eq!(chrome.search_bar, chrome.auth_links);
            }
        }
    }

    #[test]
    fn test_canonical_fragments_resolve_to_their_route() {
        let routes = [
            Route::Feed,
            Route::Library,
            Route::Discover(DiscoverQuery::showcase("top_rated")),
            Route::Profile { user_id: "12".into() },
            Route::Search { query: Some("a b".into()) },
            Route::Content { kind: "book".into(), id: "5".into() },
            Route::ListDetail { id: "9".into() },
        ];
        for route in routes {
            assert_eq!(resolve(&route.href(), &signed_in()).action, Action::Render(route));
        }
    }
}
