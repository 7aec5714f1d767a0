use api::{ContentDetail, ContentKind, Review};
use dioxus::prelude::*;
use navigation::NavTicket;

use super::{ListMembershipModal, Load};
use crate::browser;
use crate::context::use_app;
use crate::icons::{FaPen, FaPlus, FaTrashCan};
use crate::status::{Status, StatusLine};
use crate::Icon;

/// A book or movie with its ratings and reviews.
#[component]
pub fn ContentPage(kind: String, id: String, ticket: NavTicket) -> Element {
    let app = use_app();
    let placeholder = app.config.ui.placeholder_image.clone();
    let viewer = app.session().user_id();
    let content_kind = ContentKind::parse(&kind);
    let mut detail = use_signal(|| Load::<ContentDetail>::Loading);
    let mut refresh = use_signal(|| 0u32);
    let mut show_lists = use_signal(|| false);
    let mut image_failed = use_signal(|| false);

    let loader_api = app.api.clone();
    let (loader_kind, loader_id) = (kind.clone(), id.clone());
    let _loader = use_resource(move || {
        let _ = refresh();
        let api = loader_api.clone();
        let (kind, id) = (loader_kind.clone(), loader_id.clone());
        let ticket = ticket.clone();
        async move {
            let result = api.content_detail(&kind, &id).await;
            if ticket.is_cancelled() {
                return;
            }
            match result {
                Ok(found) => detail.set(Load::Ready(found)),
                Err(e) => {
                    tracing::error!(%kind, %id, "loading content failed: {e}");
                    detail.set(Load::Failed(format!(
                        "Could not load this content: {}",
                        e.user_message()
                    )));
                }
            }
        }
    });

    let content = match detail() {
        Load::Loading => return rsx! { p { class: "status-message", "Loading..." } },
        Load::Failed(message) => {
            return rsx! { p { class: "status-message status-error", "{message}" } }
        }
        Load::Ready(content) => content,
    };

    let image = if image_failed() {
        placeholder.clone()
    } else {
        content.image_or(&placeholder).to_string()
    };
    let average = content
        .average_display()
        .map(|average| format!("Average score: {average}/10"))
        .unwrap_or_else(|| "Not rated yet".to_string());
    let facts = match content_kind {
        Some(ContentKind::Movie) => rsx! {
            MovieFacts { content: content.clone() }
        },
        Some(ContentKind::Book) => rsx! {
            BookFacts { content: content.clone() }
        },
        None => rsx! {},
    };

    rsx! {
        section {
            class: "content-page",
            div {
                class: "content-header",
                img {
                    class: "content-cover",
                    src: "{image}",
                    alt: "{content.title}",
                    onerror: move |_| image_failed.set(true),
                }
                div {
                    class: "content-info",
                    h2 { "{content.title}" }
                    {facts}
                    if let Some(summary) = content.summary_text() {
                        p { class: "overview", "{summary}" }
                    }
                    p { class: "average", "{average}" }
                }
            }
            if let Some(kind) = content_kind {
                div {
                    class: "content-actions",
                    RatingForm {
                        kind,
                        content_id: content.id,
                        current: content.user_score,
                        on_rated: move |_| refresh += 1,
                    }
                    button {
                        class: "primary-btn",
                        onclick: move |_| show_lists.set(true),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        " Add to list"
                    }
                }
                if show_lists() {
                    ListMembershipModal {
                        kind,
                        content_id: content.id,
                        on_close: move |_| show_lists.set(false),
                    }
                }
                Reviews {
                    kind,
                    content_id: content.id,
                    reviews: content.reviews.clone(),
                    viewer,
                    on_changed: move |_| refresh += 1,
                }
            }
        }
    }
}

#[component]
fn MovieFacts(content: ContentDetail) -> Element {
    rsx! {
        dl {
            class: "content-facts",
            dt { "Director" }
            dd { {content.director_name.clone().unwrap_or_else(|| "Unknown".to_string())} }
            if let Some(actors) = content.leading_actors() {
                dt { "Starring" }
                dd { "{actors}" }
            }
            if let Some(genres) = content.genres_list.clone() {
                dt { "Genres" }
                dd { "{genres}" }
            }
            if let Some(release) = content.release_date.clone() {
                dt { "Release date" }
                dd { "{release}" }
            }
        }
    }
}

#[component]
fn BookFacts(content: ContentDetail) -> Element {
    rsx! {
        dl {
            class: "content-facts",
            dt { "Authors" }
            dd { {content.authors.clone().unwrap_or_else(|| "Unknown".to_string())} }
            if let Some(genres) = content.genres_list.clone() {
                dt { "Genres" }
                dd { "{genres}" }
            }
            if let Some(year) = content.publication_year {
                dt { "Published" }
                dd { "{year}" }
            }
            if let Some(pages) = content.page_count {
                dt { "Pages" }
                dd { "{pages}" }
            }
        }
    }
}

/// Score picker, 1 to 10. Preselects the viewer's previous score.
#[component]
fn RatingForm(
    kind: ContentKind,
    content_id: i64,
    current: Option<i64>,
    on_rated: EventHandler<()>,
) -> Element {
    let app = use_app();
    let mut score = use_signal(|| {
        current
            .filter(|score| (1..=10).contains(score))
            .map(|score| score.to_string())
            .unwrap_or_default()
    });
    let mut status = use_signal(|| Option::<Status>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Ok(value) = score().parse::<u8>() else {
            status.set(Some(Status::error("Pick a score from 1 to 10.")));
            return;
        };
        let api = app.api.clone();
        spawn(async move {
            match api.rate(kind, content_id, value).await {
                Ok(_) => {
                    status.set(Some(Status::success(format!("Rated {value}/10."))));
                    on_rated.call(());
                }
                Err(e) => {
                    tracing::warn!(content_id, "rating failed: {e}");
                    status.set(Some(Status::failure("Could not save the rating", &e)));
                }
            }
        });
    };

    rsx! {
        form {
            class: "rating-form",
            onsubmit: handle_submit,
            label { "Your score" }
            select {
                value: score(),
                onchange: move |evt: FormEvent| score.set(evt.value()),
                option { value: "", "-" }
                for value in 1..=10u8 {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: score() == value.to_string(),
                        "{value}"
                    }
                }
            }
            button { r#type: "submit", "Rate" }
            StatusLine { status: status() }
        }
    }
}

/// The review list plus the form for a new review.
#[component]
fn Reviews(
    kind: ContentKind,
    content_id: i64,
    reviews: Vec<Review>,
    viewer: Option<i64>,
    on_changed: EventHandler<()>,
) -> Element {
    let app = use_app();
    let mut draft = use_signal(String::new);
    let mut editing = use_signal(|| Option::<(i64, String)>::None);
    let mut status = use_signal(|| Option::<Status>::None);

    let create_api = app.api.clone();
    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let text = draft().trim().to_string();
        if text.is_empty() {
            status.set(Some(Status::error("Write your review first.")));
            return;
        }
        let api = create_api.clone();
        spawn(async move {
            match api.create_review(kind, content_id, &text).await {
                Ok(_) => {
                    draft.set(String::new());
                    status.set(Some(Status::success("Review posted.")));
                    on_changed.call(());
                }
                Err(e) => {
                    tracing::warn!(content_id, "posting review failed: {e}");
                    status.set(Some(Status::failure("Could not post the review", &e)));
                }
            }
        });
    };

    let update_api = app.api.clone();
    let handle_update = use_callback(move |evt: FormEvent| {
        evt.prevent_default();
        let Some((review_id, text)) = editing() else {
            return;
        };
        let api = update_api.clone();
        spawn(async move {
            match api.update_review(review_id, text.trim()).await {
                Ok(_) => {
                    editing.set(None);
                    status.set(Some(Status::success("Review updated.")));
                    on_changed.call(());
                }
                Err(e) => {
                    tracing::warn!(review_id, "updating review failed: {e}");
                    status.set(Some(Status::failure("Could not update the review", &e)));
                }
            }
        });
    });

    let delete_api = app.api.clone();
    let handle_delete = use_callback(move |review_id: i64| {
        if !browser::confirm("Delete this review?") {
            return;
        }
        let api = delete_api.clone();
        spawn(async move {
            match api.delete_review(review_id).await {
                Ok(()) => {
                    status.set(Some(Status::success("Review deleted.")));
                    on_changed.call(());
                }
                Err(e) => {
                    tracing::warn!(review_id, "deleting review failed: {e}");
                    status.set(Some(Status::failure("Could not delete the review", &e)));
                }
            }
        });
    });

    let editing_id = editing().map(|(id, _)| id);

    rsx! {
        section {
            class: "reviews",
            h3 { "Reviews" }
            StatusLine { status: status() }
            if reviews.is_empty() {
                p { class: "info-message", "No reviews yet." }
            }
            for review in reviews {
                article {
                    key: "{review.id}",
                    class: "review",
                    header {
                        a { href: review.user.profile_href(), "@{review.user.username}" }
                        if !review.created_at.is_empty() {
                            time { " {review.created_at}" }
                        }
                    }
                    if editing_id == Some(review.id) {
                        form {
                            class: "review-edit-form",
                            onsubmit: move |evt: FormEvent| handle_update.call(evt),
                            textarea {
                                rows: 4,
                                value: editing().map(|(_, text)| text).unwrap_or_default(),
                                oninput: move |evt: FormEvent| {
                                    let id = review.id;
                                    editing.set(Some((id, evt.value())));
                                },
                            }
                            button { r#type: "submit", "Save" }
                            button {
                                r#type: "button",
                                onclick: move |_| editing.set(None),
                                "Cancel"
                            }
                        }
                    } else {
                        p { "{review.text}" }
                    }
                    if review.is_written_by(viewer) && editing_id != Some(review.id) {
                        div {
                            class: "review-actions",
                            button {
                                onclick: {
                                    let (id, text) = (review.id, review.text.clone());
                                    move |_| editing.set(Some((id, text.clone())))
                                },
                                Icon { icon: FaPen, width: 12, height: 12 }
                                " Edit"
                            }
                            button {
                                class: "danger-btn",
                                onclick: move |_| handle_delete.call(review.id),
                                Icon { icon: FaTrashCan, width: 12, height: 12 }
                                " Delete"
                            }
                        }
                    }
                }
            }
            form {
                class: "review-form",
                onsubmit: handle_create,
                textarea {
                    rows: 4,
                    placeholder: "Write a review",
                    value: draft(),
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                }
                button { r#type: "submit", "Post review" }
            }
        }
    }
}
