//! # Navigation: hash-fragment routing for the Shelfmark client
//!
//! Everything that decides *what* the client shows lives here, free of any DOM
//! or Dioxus dependency so it can be tested in isolation.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`fragment`] | Splits `#path?query` and decodes query parameters |
//! | [`route`] | The [`Route`] enum, one variant per page, and its canonical fragment |
//! | [`table`] | The priority-ordered [`ROUTE_TABLE`] that maps paths to routes |
//! | [`controller`] | [`resolve`]: session gate, navigation chrome, dispatch, active link |
//! | [`links`] | Navigation bar links and the active-link mapping |
//! | [`ticket`] | [`Navigator`] / [`NavTicket`] for superseding in-flight page loads |
//!
//! The web shell calls [`resolve`] on every `hashchange`, writes the fragment
//! back when the result is a redirect, and otherwise mounts the page for the
//! resolved [`Route`] together with a fresh [`NavTicket`].

pub mod controller;
pub mod fragment;
pub mod links;
pub mod route;
pub mod table;
pub mod ticket;

pub use controller::{is_public_path, resolve, Action, NavChrome, Resolution, PUBLIC_PATHS};
pub use fragment::{Fragment, QueryParams};
pub use links::{active_link, NavLink};
pub use route::{DiscoverMode, DiscoverQuery, Filters, Route, DEFAULT_SHOWCASE};
pub use table::{Pattern, RouteEntry, ROUTE_TABLE};
pub use ticket::{NavTicket, Navigator};
