//! # API crate: typed REST client for the Shelfmark backend
//!
//! Every page of the front end talks to the backend through [`ApiClient`]. The
//! client owns the HTTP connection pool and a [`store::Session`] handle, so an
//! authenticated call picks up the stored token on its own and a login writes
//! the new one back.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | URL building, authentication header, JSON encoding and decoding, error mapping |
//! | [`error`] | [`ApiError`] and the message shown to users |
//! | [`models`] | Lenient wire models (activities, content, lists, profiles, auth bodies) |
//! | `auth` | Login, logout, registration, password reset |
//! | `social` | Feed pages, likes, replies, follows |
//! | `catalog` | Search, discovery, content detail, ratings, reviews |
//! | `library` | Lists, list items, list membership for a piece of content |
//! | `profile` | Profiles, their activities, profile updates |
//!
//! All calls are `async` and run on whatever executor drives them: the browser
//! event loop on the web, tokio in tests.

mod auth;
mod catalog;
pub mod client;
pub mod error;
mod library;
pub mod models;
mod profile;
mod social;

pub use client::ApiClient;
pub use error::ApiError;
pub use library::ListMembership;
pub use models::{
    Activity, ActivityDetails, ActivityKind, ContentDetail, ContentKind, ContentSummary, Follow,
    ListItem, Paginated, PasswordResetConfirm, ProfileResponse, ProfileUpdate, RegisterRequest, Reply, Review, UserDetails,
    UserList, UserSummary,
};
