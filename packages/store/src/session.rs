//! # Session persistence
//!
//! The client keeps exactly two values between page loads: the opaque session
//! token returned by the backend on login, and the numeric id of the logged-in
//! user. Both live in a key/value [`SessionStore`] (browser `localStorage` on
//! the web, an in-memory map everywhere else).
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"auth_token"`) | session token, sent as `Authorization: Token <token>` |
//! | [`USER_ID_KEY`] (`"user_id"`) | current user id, stored as a decimal string |
//!
//! The presence of a token is the only signal of "authenticated". [`Session`]
//! wraps a store with typed accessors, and [`SessionSnapshot`] is the
//! read-only copy the router works from.

/// Storage key for the session token.
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key for the current user id.
pub const USER_ID_KEY: &str = "user_id";

/// A string key/value store that survives page reloads.
///
/// Implementations never fail loudly: an unavailable backend reads as empty
/// and ignores writes.
pub trait SessionStore: Clone + 'static {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Point-in-time view of the session, as consumed by the router.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user_id: Option<i64>,
}

impl SessionSnapshot {
    /// A snapshot for a logged-in user.
    pub fn authenticated(token: impl Into<String>, user_id: Option<i64>) -> Self {
        Self {
            token: Some(token.into()),
            user_id,
        }
    }

    /// A snapshot with no session at all.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Typed accessor over a [`SessionStore`].
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored session token, if any. Empty strings count as absent.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The stored current-user id, if it parses as an integer.
    pub fn user_id(&self) -> Option<i64> {
        self.store
            .get(USER_ID_KEY)
            .and_then(|raw| raw.trim().parse::<i64>().ok())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a successful login. The user id is optional because not every
    /// login response carries one.
    pub fn save_login(&self, token: &str, user_id: Option<i64>) {
        self.store.set(TOKEN_KEY, token);
        match user_id {
            Some(id) => self.store.set(USER_ID_KEY, &id.to_string()),
            None => {
                tracing::warn!("login response carried no user id; profile shortcuts disabled");
                self.store.remove(USER_ID_KEY);
            }
        }
    }

    /// Forget both the token and the user id.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_ID_KEY);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            token: self.token(),
            user_id: self.user_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_fresh_session_is_anonymous() {
        let session = Session::new(MemoryStore::new());
        assert!(!session.is_authenticated());
        assert_eq!(session.snapshot(), SessionSnapshot::anonymous());
    }

    #[test]
    fn test_save_login_and_clear() {
        let session = Session::new(MemoryStore::new());

        session.save_login("abc123", Some(7));
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("abc123"));
        assert_eq!(session.user_id(), Some(7));
        assert_eq!(
            session.snapshot(),
            SessionSnapshot::authenticated("abc123", Some(7))
        );

        session.clear();
        assert!(session.token().is_none());
        assert!(session.user_id().is_none());
    }

    #[test]
    fn test_login_without_user_id_drops_stale_id() {
        let session = Session::new(MemoryStore::new());
        session.save_login("first", Some(3));
        session.save_login("second", None);

        assert_eq!(session.token().as_deref(), Some("second"));
        assert!(session.user_id().is_none());
    }

    #[test]
    fn test_unparsable_user_id_reads_as_none() {
        let store = MemoryStore::new();
        store.set(USER_ID_KEY, "null");
        let session = Session::new(store.clone());
        assert!(session.user_id().is_none());

        store.set(USER_ID_KEY, " 42 ");
        assert_eq!(session.user_id(), Some(42));
    }

    #[test]
    fn test_empty_token_is_not_a_session() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "");
        let session = Session::new(store);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clones_share_the_store() {
        let session = Session::new(MemoryStore::new());
        let other = session.clone();
        session.save_login("shared", None);
        assert_eq!(other.token().as_deref(), Some("shared"));
    }
}
