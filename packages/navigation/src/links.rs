//! Navigation bar links.

/// A link in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavLink {
    Feed,
    Discover,
    Library,
    Profile,
    Logout,
    Login,
    Register,
}

impl NavLink {
    /// Links shown while a session is active.
    pub const AUTHENTICATED: [NavLink; 5] = [
        NavLink::Feed,
        NavLink::Discover,
        NavLink::Library,
        NavLink::Profile,
        NavLink::Logout,
    ];

    /// Links shown without a session.
    pub const PUBLIC: [NavLink; 2] = [NavLink::Login, NavLink::Register];

    /// Fragment the link points at, without `#`.
    pub fn route_name(&self) -> &'static str {
        match self {
            NavLink::Feed => "feed",
            NavLink::Discover => "discover",
            NavLink::Library => "library",
            NavLink::Profile => "profile/me",
            NavLink::Logout => "logout",
            NavLink::Login => "login",
            NavLink::Register => "register",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.route_name())
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavLink::Feed => "Feed",
            NavLink::Discover => "Discover",
            NavLink::Library => "Library",
            NavLink::Profile => "Profile",
            NavLink::Logout => "Log out",
            NavLink::Login => "Log in",
            NavLink::Register => "Sign up",
        }
    }
}

/// The link to highlight for a route path.
///
/// Looser than route dispatch: every `profile/…` page lights up the profile
/// link, list and content pages belong to the library, and the home route is
/// the feed. Anything else matches a link by exact route name.
pub fn active_link(path: &str) -> Option<NavLink> {
    if path.starts_with("profile/") {
        Some(NavLink::Profile)
    } else if path.starts_with("list/") || path.starts_with("content/") {
        Some(NavLink::Library)
    } else if path.is_empty() || path == "feed" {
        Some(NavLink::Feed)
    } else {
        NavLink::AUTHENTICATED
            .iter()
            .chain(NavLink::PUBLIC.iter())
            .find(|link| link.route_name() == path)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_mapping() {
        assert_eq!(active_link("profile/12"), Some(NavLink::Profile));
        assert_eq!(active_link("profile/me/update"), Some(NavLink::Profile));
        assert_eq!(active_link("list/4"), Some(NavLink::Library));
        assert_eq!(active_link("content/book/4"), Some(NavLink::Library));
        assert_eq!(active_link(""), Some(NavLink::Feed));
        assert_eq!(active_link("feed"), Some(NavLink::Feed));
        assert_eq!(active_link("discover"), Some(NavLink::Discover));
        assert_eq!(active_link("login"), Some(NavLink::Login));
        assert_eq!(active_link("search"), None);
        assert_eq!(active_link("reset-password"), None);
    }

    #[test]
    fn test_hrefs() {
        assert_eq!(NavLink::Profile.href(), "#profile/me");
        assert_eq!(NavLink::Logout.href(), "#logout");
    }
}
