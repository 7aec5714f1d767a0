use api::{Activity, ProfileResponse};
use dioxus::prelude::*;
use navigation::{NavTicket, Route};

use super::Load;
use crate::context::use_app;
use crate::icons::{FaPen, FaUserMinus, FaUserPlus};
use crate::present::profile_activity_link;
use crate::status::{Status, StatusLine};
use crate::Icon;

#[component]
pub fn ProfilePage(user_id: String, ticket: NavTicket) -> Element {
    let app = use_app();
    let default_avatar = app.config.ui.default_avatar_url.clone();
    let mut profile = use_signal(|| Load::<ProfileResponse>::Loading);
    let mut activities = use_signal(Vec::<Activity>::new);
    let mut refresh = use_signal(|| 0u32);
    let mut status = use_signal(|| Option::<Status>::None);
    let mut busy = use_signal(|| false);

    let loader_api = app.api.clone();
    let loader_id = user_id.clone();
    let _loader = use_resource(move || {
        let _ = refresh();
        let api = loader_api.clone();
        let id = loader_id.clone();
        let ticket = ticket.clone();
        async move {
            let result = api.profile(&id).await;
            if ticket.is_cancelled() {
                return;
            }
            match result {
                Ok(found) => profile.set(Load::Ready(found)),
                Err(e) => {
                    tracing::error!(user_id = %id, "loading profile failed: {e}");
                    profile.set(Load::Failed(format!(
                        "Could not load the profile: {}",
                        e.user_message()
                    )));
                    return;
                }
            }
            match api.profile_activities(&id).await {
                Ok(page) if ticket.is_current() => activities.set(page.results),
                Ok(_) => {}
                Err(e) => tracing::warn!(user_id = %id, "loading profile activities failed: {e}"),
            }
        }
    });

    let follow_api = app.api.clone();
    let handle_follow = use_callback(move |(target, following): (i64, bool)| {
        if busy() {
            return;
        }
        let api = follow_api.clone();
        busy.set(true);
        spawn(async move {
            let result = if following {
                api.unfollow(target).await.map(|removed| {
                    if removed {
                        "Unfollowed."
                    } else {
                        "You were not following this user."
                    }
                })
            } else {
                api.follow(target).await.map(|_| "Following.")
            };
            match result {
                Ok(message) => {
                    status.set(Some(Status::success(message)));
                    refresh += 1;
                }
                Err(e) => {
                    tracing::warn!(target, "follow change failed: {e}");
                    status.set(Some(Status::failure("Could not update the follow", &e)));
                }
            }
            busy.set(false);
        });
    });

    let found = match profile() {
        Load::Loading => return rsx! { p { class: "status-message", "Loading profile..." } },
        Load::Failed(message) => {
            return rsx! { p { class: "status-message status-error", "{message}" } }
        }
        Load::Ready(found) => found,
    };
    let details = found.user_details.clone();
    let avatar = details.avatar_or(&default_avatar).to_string();
    let links: Vec<(String, String)> = activities()
        .iter()
        .filter_map(profile_activity_link)
        .collect();
    let is_following = found.profile_status.is_following;
    let target = details.id;

    rsx! {
        section {
            class: "profile-page",
            div {
                class: "profile-header",
                img { class: "avatar", src: "{avatar}", alt: "{details.username}" }
                div {
                    h2 { "{details.display_name()}" }
                    if !details.email.is_empty() {
                        p { class: "email", "{details.email}" }
                    }
                    p {
                        class: "stats",
                        "{found.stats.followers} followers · {found.stats.following} following"
                    }
                    p {
                        class: "bio",
                        {details.bio.clone().filter(|bio| !bio.trim().is_empty()).unwrap_or_else(|| "No bio yet.".to_string())}
                    }
                    if found.profile_status.is_owner {
                        a {
                            class: "primary-btn",
                            href: Route::ProfileUpdate { user_id: target }.href(),
                            Icon { icon: FaPen, width: 14, height: 14 }
                            " Edit profile"
                        }
                    } else {
                        button {
                            class: if is_following { "danger-btn" } else { "primary-btn" },
                            disabled: busy(),
                            onclick: move |_| handle_follow.call((target, is_following)),
                            if is_following {
                                Icon { icon: FaUserMinus, width: 14, height: 14 }
                                " Unfollow"
                            } else {
                                Icon { icon: FaUserPlus, width: 14, height: 14 }
                                " Follow"
                            }
                        }
                    }
                    StatusLine { status: status() }
                }
            }
            h3 { "Recent activity" }
            if links.is_empty() {
                p { class: "info-message", "Nothing here yet." }
            } else {
                ul {
                    class: "profile-activities",
                    for (index, (title, href)) in links.into_iter().enumerate() {
                        li {
                            key: "{index}",
                            a { href: "{href}", "{title}" }
                        }
                    }
                }
            }
        }
    }
}
