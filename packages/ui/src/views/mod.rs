//! Page renderers, one per [`Route`].
//!
//! Every page receives the [`NavTicket`] of the navigation that mounted it and
//! drops whatever it fetched once the ticket is no longer current.

use dioxus::prelude::*;
use navigation::{NavTicket, Route};

mod content;
mod discover;
mod feed;
mod library;
mod list_detail;
mod list_modal;
mod login;
mod logout;
mod modal_overlay;
mod profile;
mod profile_update;
mod register;
mod reset_password;
mod search;

pub use content::ContentPage;
pub use discover::DiscoverPage;
pub use feed::FeedPage;
pub use library::LibraryPage;
pub use list_detail::ListDetailPage;
pub use list_modal::ListMembershipModal;
pub use login::LoginPage;
pub use logout::LogoutPage;
pub use modal_overlay::ModalOverlay;
pub use profile::ProfilePage;
pub use profile_update::ProfileUpdatePage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
pub use search::SearchPage;

/// State of a page's initial load.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Load<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// Mounts the page for `route`.
#[component]
pub fn RoutePage(route: Route, ticket: NavTicket) -> Element {
    tracing::debug!(generation = ticket.generation(), ?route, "mounting page");
    match route {
        Route::Login => rsx! { LoginPage {} },
        Route::Register => rsx! { RegisterPage {} },
        Route::ResetPassword => rsx! { ResetPasswordPage {} },
        Route::Logout => rsx! { LogoutPage {} },
        Route::Feed => rsx! { FeedPage { ticket } },
        Route::Library => rsx! { LibraryPage { ticket } },
        Route::Discover(query) => rsx! { DiscoverPage { query, ticket } },
        Route::ProfileUpdate { user_id } => rsx! { ProfileUpdatePage { user_id, ticket } },
        Route::Profile { user_id } => rsx! { ProfilePage { user_id, ticket } },
        Route::Search { query } => rsx! { SearchPage { query, ticket } },
        Route::Content { kind, id } => rsx! { ContentPage { kind, id, ticket } },
        Route::ListDetail { id } => rsx! { ListDetailPage { id, ticket } },
    }
}
