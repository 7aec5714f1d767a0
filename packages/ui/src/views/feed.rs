use api::{Activity, Reply};
use dioxus::prelude::*;
use navigation::NavTicket;

use super::{Load, ModalOverlay};
use crate::context::use_app;
use crate::icons::{FaHeart, FaReply};
use crate::present::{likes_label, renderable, toggle_like, ActivityAction};
use crate::status::{Status, StatusLine};
use crate::Icon;

/// Activities from followed users, newest first, one page at a time.
#[component]
pub fn FeedPage(ticket: NavTicket) -> Element {
    let app = use_app();
    let mut activities = use_signal(Vec::<Activity>::new);
    let mut next = use_signal(|| Option::<String>::None);
    let mut load = use_signal(|| Load::<()>::Loading);
    let mut loading_more = use_signal(|| false);
    let mut more_status = use_signal(|| Option::<Status>::None);
    let mut refresh = use_signal(|| 0u32);
    let mut reply_to = use_signal(|| Option::<(&'static str, i64)>::None);

    let loader_api = app.api.clone();
    let loader_ticket = ticket.clone();
    let _loader = use_resource(move || {
        let _ = refresh();
        let api = loader_api.clone();
        let ticket = loader_ticket.clone();
        async move {
            let page = api.feed(None).await;
            if ticket.is_cancelled() {
                tracing::debug!("feed load superseded");
                return;
            }
            match page {
                Ok(page) => {
                    activities.set(renderable(&page.results));
                    next.set(page.next);
                    load.set(Load::Ready(()));
                }
                Err(e) => {
                    tracing::error!("feed load failed: {e}");
                    load.set(Load::Failed(format!("Could not load the feed: {}", e.user_message())));
                }
            }
        }
    });

    let more_api = app.api.clone();
    let handle_more = move |_: MouseEvent| {
        let Some(cursor) = next() else {
            return;
        };
        if loading_more() {
            return;
        }
        let api = more_api.clone();
        let ticket = ticket.clone();
        loading_more.set(true);
        spawn(async move {
            let page = api.feed(Some(&cursor)).await;
            if ticket.is_current() {
                match page {
                    Ok(page) => {
                        activities.write().extend(renderable(&page.results));
                        next.set(page.next);
                        more_status.set(None);
                    }
                    Err(e) => {
                        tracing::error!("next feed page failed: {e}");
                        more_status.set(Some(Status::failure("Could not load more", &e)));
                    }
                }
            }
            loading_more.set(false);
        });
    };

    let body = match load() {
        Load::Loading => rsx! { p { class: "status-message", "Loading feed..." } },
        Load::Failed(message) => rsx! { p { class: "status-message status-error", "{message}" } },
        Load::Ready(()) if activities.read().is_empty() => rsx! {
            p { class: "info-message", "Your feed is empty. Follow people to see what they are reading and watching." }
        },
        Load::Ready(()) => rsx! {
            div {
                class: "feed",
                for activity in activities() {
                    ActivityCard {
                        key: "{activity.id}-{activity.activity_type}",
                        activity,
                        on_reply: move |target| reply_to.set(Some(target)),
                    }
                }
            }
            if next().is_some() {
                button {
                    class: "load-more",
                    disabled: loading_more(),
                    onclick: handle_more,
                    if loading_more() { "Loading..." } else { "Load more" }
                }
            }
            StatusLine { status: more_status() }
        },
    };

    rsx! {
        section {
            class: "feed-page",
            h2 { "Feed" }
            {body}
            if let Some((target, object_id)) = reply_to() {
                ReplyModal {
                    target,
                    object_id,
                    on_close: move |_| reply_to.set(None),
                    on_sent: move |_| {
                        reply_to.set(None);
                        refresh += 1;
                    },
                }
            }
        }
    }
}

/// One feed entry.
#[component]
fn ActivityCard(activity: Activity, on_reply: EventHandler<(&'static str, i64)>) -> Element {
    let app = use_app();
    let (initial_count, initial_liked) = activity.like_state();
    let mut likes = use_signal(|| initial_count);
    let mut liked = use_signal(|| initial_liked);
    let mut liking = use_signal(|| false);
    let mut like_status = use_signal(|| Option::<Status>::None);

    let Some(action) = ActivityAction::of(&activity) else {
        return rsx! {};
    };
    let kind = activity.kind();
    let target = activity.interaction_target();
    let content = activity.content().cloned();
    let content_link = content.as_ref().map(|content| {
        let href = content
            .href(activity.content_object_details.as_ref().and_then(|d| d.content_kind()))
            .unwrap_or_else(|| "#feed".to_string());
        (content.title.clone(), href)
    });
    let replies: Vec<Reply> = activity.replies().to_vec();
    let interactive = kind.is_some_and(|kind| kind.is_interactive());
    let reply_target = kind.and_then(|kind| kind.reply_target());

    let handle_like = move |_: MouseEvent| {
        let Some(object_id) = target else {
            return;
        };
        if liking() {
            return;
        }
        let api = app.api.clone();
        liking.set(true);
        spawn(async move {
            match api.like(object_id).await {
                Ok(_) => {
                    let (count, state) = toggle_like(likes(), liked());
                    likes.set(count);
                    liked.set(state);
                    like_status.set(None);
                }
                Err(e) => {
                    tracing::warn!(object_id, "like failed: {e}");
                    like_status.set(Some(Status::failure("Could not update the like", &e)));
                }
            }
            liking.set(false);
        });
    };

    let summary = match action.clone() {
        ActivityAction::Rated { score } => rsx! {
            span { " rated " }
            ContentLink { link: content_link.clone() }
            if let Some(score) = score {
                span { class: "score", " {score}/10" }
            }
        },
        ActivityAction::Reviewed { .. } => rsx! {
            span { " reviewed " }
            ContentLink { link: content_link.clone() }
        },
        ActivityAction::AddedToList { list_name } => rsx! {
            span { " added " }
            ContentLink { link: content_link.clone() }
            span { " to " }
            strong { "{list_name}" }
        },
        ActivityAction::Followed { user: Some(followed) } => rsx! {
            span { " started following " }
            a { href: followed.profile_href(), "@{followed.username}" }
        },
        ActivityAction::Followed { user: None } => rsx! {
            span { " started following someone" }
        },
    };

    let user = activity.user.clone();
    rsx! {
        article {
            class: "activity-card",
            header {
                a { class: "activity-user", href: user.profile_href(), "@{user.username}" }
                {summary}
            }
            if let ActivityAction::Reviewed { excerpt } = &action {
                blockquote { class: "review-excerpt", "{excerpt}" }
            }
            if !activity.created_at.is_empty() {
                time { class: "activity-date", "{activity.created_at}" }
            }
            if interactive {
                div {
                    class: "activity-actions",
                    button {
                        class: if liked() { "like-btn liked" } else { "like-btn" },
                        disabled: liking(),
                        onclick: handle_like,
                        Icon { icon: FaHeart, width: 14, height: 14 }
                        " {likes_label(likes())}"
                    }
                    if let (Some(reply_target), Some(object_id)) = (reply_target, target) {
                        button {
                            class: "reply-btn",
                            onclick: move |_| on_reply.call((reply_target, object_id)),
                            Icon { icon: FaReply, width: 14, height: 14 }
                            " Reply"
                        }
                    }
                }
                StatusLine { status: like_status() }
            }
            if !replies.is_empty() {
                ul {
                    class: "replies",
                    for reply in replies {
                        li {
                            key: "{reply.id}",
                            a { href: reply.user.profile_href(), "@{reply.user.username}" }
                            ": {reply.text}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContentLink(link: Option<(String, String)>) -> Element {
    match link {
        Some((title, href)) => rsx! { a { class: "content-link", href: "{href}", "{title}" } },
        None => rsx! { span { "something" } },
    }
}

/// Reply form for a rating or review.
#[component]
fn ReplyModal(
    target: &'static str,
    object_id: i64,
    on_close: EventHandler<()>,
    on_sent: EventHandler<()>,
) -> Element {
    let app = use_app();
    let mut text = use_signal(String::new);
    let mut status = use_signal(|| Option::<Status>::None);
    let mut sending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let body = text().trim().to_string();
        if body.is_empty() {
            status.set(Some(Status::error("Write something first.")));
            return;
        }
        let api = app.api.clone();
        sending.set(true);
        spawn(async move {
            match api.reply(target, object_id, &body).await {
                Ok(_) => {
                    tracing::info!(target, object_id, "reply sent");
                    on_sent.call(());
                }
                Err(e) => {
                    tracing::warn!(target, object_id, "reply failed: {e}");
                    status.set(Some(Status::failure("Could not send the reply", &e)));
                }
            }
            sending.set(false);
        });
    };

    let title = if target == "review" {
        "Reply to review"
    } else {
        "Reply to rating"
    };

    rsx! {
        ModalOverlay {
            title: title.to_string(),
            on_close: move |_| on_close.call(()),
            form {
                class: "reply-form",
                onsubmit: handle_submit,
                textarea {
                    rows: 4,
                    placeholder: "Your reply",
                    value: text(),
                    oninput: move |evt: FormEvent| text.set(evt.value()),
                }
                button { r#type: "submit", disabled: sending(), "Send" }
            }
            StatusLine { status: status() }
        }
    }
}
