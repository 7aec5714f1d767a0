//! Shared UI for the Shelfmark client: the application context, the
//! navigation bar and one page component per route.

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod browser;
pub mod present;
pub mod views;

mod content_card;
pub use content_card::{ContentCard, ContentGrid};

mod context;
pub use context::{use_app, AppContext, AppProvider, PlatformStore};

mod navbar;
pub use navbar::Navbar;

mod status;
pub use status::{Status, StatusLevel, StatusLine};

pub use views::RoutePage;
