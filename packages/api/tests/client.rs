use api::{ActivityKind, ApiClient, ApiError, ContentKind, RegisterRequest};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::{json, Value};
use store::{MemoryStore, Session, SessionSnapshot};

fn client(server: &ServerGuard) -> ApiClient<MemoryStore> {
    ApiClient::new(
        format!("{}/api/", server.url()),
        Session::new(MemoryStore::new()),
    )
}

fn signed_in(server: &ServerGuard) -> ApiClient<MemoryStore> {
    let client = client(server);
    client.session().save_login("abc123", Some(7));
    client
}

#[tokio::test]
async fn test_login_stores_token_and_user_id() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/api/auth/login/")
        .match_body(Matcher::Json(json!({"username": "deniz", "password": "pw"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"key": "tok", "user_id": 12, "username": "deniz"}"#)
        .create_async()
        .await;

    let client = client(&server);
    let user_id = client.login("deniz", "pw").await.unwrap();
    m.assert_async().await;

    assert_eq!(user_id, Some(12));
    assert_eq!(client.session().token().as_deref(), Some("tok"));
    assert_eq!(client.session().user_id(), Some(12));
}

#[tokio::test]
async fn test_login_without_user_id_keeps_token_only() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/login/")
        .with_status(200)
        .with_body(r#"{"key": "tok"}"#)
        .create_async()
        .await;

    let client = client(&server);
    assert_eq!(client.login("deniz", "pw").await.unwrap(), None);
    assert!(client.session().is_authenticated());
    assert_eq!(client.session().user_id(), None);
}

#[tokio::test]
async fn test_login_failure_surfaces_backend_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/login/")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "Invalid username or password."}"#)
        .create_async()
        .await;

    let client = client(&server);
    let err = client.login("deniz", "wrong").await.unwrap_err();
    assert_eq!(err.user_message(), "Invalid username or password.");
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_authenticated_call_without_token_fails_before_request() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", "/api/feed/")
        .expect(0)
        .create_async()
        .await;

    let client = client(&server);
    let err = client.feed(None).await.unwrap_err();
    m.assert_async().await;
    assert!(matches!(err, ApiError::Unauthenticated));
}

#[tokio::test]
async fn test_feed_sends_token_and_follows_cursor() {
    let mut server = Server::new_async().await;
    let next = format!("{}/api/feed/?page=2", server.url());
    let first = server
        .mock("GET", "/api/feed/")
        .match_query(Matcher::Missing)
        .match_header("authorization", "Token abc123")
        .with_status(200)
        .with_body(
            json!({
                "next": next,
                "results": [{
                    "id": 1,
                    "user": {"id": 2, "username": "ece"},
                    "activity_type": 1,
                    "object_id": 5,
                    "content_object_details": {
                        "content_type": "Book",
                        "content_data": {"id": 9, "title": "Dune"},
                        "score": 8
                    }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let second = server
        .mock("GET", "/api/feed/")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_body(r#"{"results": [], "next": null}"#)
        .create_async()
        .await;

    let client = signed_in(&server);
    let page = client.feed(None).await.unwrap();
    first.assert_async().await;
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].kind(), Some(ActivityKind::Rating));
    assert!(page.has_more());

    let page = client.feed(page.next.as_deref()).await.unwrap();
    second.assert_async().await;
    assert!(page.results.is_empty());
    assert!(!page.has_more());
}

#[tokio::test]
async fn test_no_content_decodes_as_empty_object() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/api/reviews/4/")
        .with_status(204)
        .create_async()
        .await;
    server
        .mock("POST", "/api/reviews/4/like/")
        .with_status(204)
        .create_async()
        .await;

    let client = signed_in(&server);
    client.delete_review(4).await.unwrap();
    assert_eq!(client.like(4).await.unwrap(), json!({}));
}

#[tokio::test]
async fn test_missing_path_gets_hint() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/lists/")
        .with_status(404)
        .with_body("<h1>Not Found</h1>")
        .create_async()
        .await;

    let client = signed_in(&server);
    let err = client.lists().await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(err.user_message().ends_with("Please check the API path."));
}

#[tokio::test]
async fn test_logout_clears_session_even_when_backend_fails() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/api/auth/logout/")
        .match_header("authorization", "Token abc123")
        .with_status(500)
        .create_async()
        .await;

    let client = signed_in(&server);
    client.logout().await;
    m.assert_async().await;
    assert_eq!(client.session().snapshot(), SessionSnapshot::anonymous());
}

#[tokio::test]
async fn test_abandoned_logout_still_clears_session() {
    let server = Server::new_async().await;
    let client = signed_in(&server);

    tokio::select! {
        biased;
        _ = client.logout() => {}
        _ = std::future::ready(()) => {}
    }
    assert_eq!(client.session().snapshot(), SessionSnapshot::anonymous());
}

#[tokio::test]
async fn test_logout_without_session_skips_backend() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/api/auth/logout/")
        .expect(0)
        .create_async()
        .await;

    let client = client(&server);
    client.logout().await;
    m.assert_async().await;
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_register_sends_both_password_fields() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/api/auth/register/")
        .match_body(Matcher::PartialJson(json!({
            "username": "can",
            "password1": "secret",
            "password2": "secret"
        })))
        .with_status(201)
        .with_body(r#"{"user": {"username": "can"}, "token": "t"}"#)
        .create_async()
        .await;

    let client = client(&server);
    let request = RegisterRequest::new("can", "can@example.com", "Can", "Yılmaz", "secret", "secret");
    client.register(&request).await.unwrap();
    m.assert_async().await;
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_unfollow_deletes_matching_record() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/follows/")
        .with_status(200)
        .with_body(r#"{"results": [{"id": 31, "following": 4}, {"id": 32, "following": "9"}]}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/follows/32/")
        .with_status(204)
        .create_async()
        .await;

    let client = signed_in(&server);
    assert!(client.unfollow(9).await.unwrap());
    delete.assert_async().await;
}

#[tokio::test]
async fn test_unfollow_without_record_is_a_no_op() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/follows/")
        .with_status(200)
        .with_body(r#"{"results": []}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = signed_in(&server);
    assert!(!client.unfollow(9).await.unwrap());
    delete.assert_async().await;
}

#[tokio::test]
async fn test_unfollow_searches_later_pages() {
    let mut server = Server::new_async().await;
    let next = format!("{}/api/follows/?page=2", server.url());
    server
        .mock("GET", "/api/follows/")
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_body(json!({"results": [{"id": 31, "following": 4}], "next": next}).to_string())
        .create_async()
        .await;
    let second = server
        .mock("GET", "/api/follows/")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_body(r#"{"results": [{"id": 32, "following": 9}], "next": null}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/follows/32/")
        .with_status(204)
        .create_async()
        .await;

    let client = signed_in(&server);
    assert!(client.unfollow(9).await.unwrap());
    second.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_unfollow_stops_paging_once_found() {
    let mut server = Server::new_async().await;
    let next = format!("{}/api/follows/?page=2", server.url());
    server
        .mock("GET", "/api/follows/")
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_body(json!({"results": [{"id": 31, "following": 4}], "next": next}).to_string())
        .create_async()
        .await;
    let second = server
        .mock("GET", "/api/follows/")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .expect(0)
        .create_async()
        .await;
    server
        .mock("DELETE", "/api/follows/31/")
        .with_status(204)
        .create_async()
        .await;

    let client = signed_in(&server);
    assert!(client.unfollow(4).await.unwrap());
    second.assert_async().await;
}

#[tokio::test]
async fn test_repeated_cursor_ends_the_walk() {
    let mut server = Server::new_async().await;
    let same = format!("{}/api/follows/?page=2", server.url());
    server
        .mock("GET", "/api/follows/")
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_body(json!({"results": [], "next": same}).to_string())
        .create_async()
        .await;
    let looping = server
        .mock("GET", "/api/follows/")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_body(json!({"results": [], "next": same}).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = signed_in(&server);
    assert!(!client.unfollow(9).await.unwrap());
    looping.assert_async().await;
}

#[tokio::test]
async fn test_search_encodes_query() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", "/api/search/")
        .match_query(Matcher::UrlEncoded("q".into(), "war & peace".into()))
        .with_status(200)
        .with_body(r#"[{"id": 1, "title": "War and Peace", "content_type": "Book"}]"#)
        .create_async()
        .await;

    let client = signed_in(&server);
    let results = client.search("war & peace").await.unwrap();
    m.assert_async().await;
    assert_eq!(results[0].kind(), Some(ContentKind::Book));
}

#[tokio::test]
async fn test_filter_sends_only_given_pairs() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("GET", "/api/filter/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("genre".into(), "drama".into()),
            Matcher::UrlEncoded("year".into(), "2020".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = signed_in(&server);
    let results = client
        .filter([("genre", "drama"), ("year", "2020")])
        .await
        .unwrap();
    m.assert_async().await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_rate_posts_lowercase_kind() {
    let mut server = Server::new_async().await;
    let m = server
        .mock("POST", "/api/ratings/")
        .match_body(Matcher::Json(json!({
            "score": 9, "content_type": "movie", "object_id": 42
        })))
        .with_status(201)
        .with_body(r#"{"id": 1, "score": 9}"#)
        .create_async()
        .await;

    let client = signed_in(&server);
    client.rate(ContentKind::Movie, 42, 9).await.unwrap();
    m.assert_async().await;
}

#[tokio::test]
async fn test_list_membership_filters_and_flags_lists() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/lists/")
        .with_status(200)
        .with_body(
            json!({"results": [
                {"id": 1, "name": "Okunacaklar"},
                {"id": 2, "name": "Watch later"},
                {"id": 3, "name": "Favorites"}
            ]})
            .to_string(),
        )
        .create_async()
        .await;
    let skipped = server
        .mock("GET", "/api/lists/1/")
        .expect(0)
        .create_async()
        .await;
    server
        .mock("GET", "/api/lists/2/")
        .with_status(200)
        .with_body(
            json!({"id": 2, "name": "Watch later", "items": [
                {"id": 20, "content_details": {"id": 42, "title": "Heat"}}
            ]})
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/api/lists/3/")
        .with_status(200)
        .with_body(r#"{"id": 3, "name": "Favorites", "items": []}"#)
        .create_async()
        .await;

    let client = signed_in(&server);
    let memberships = client.list_membership(ContentKind::Movie, 42).await.unwrap();
    skipped.assert_async().await;

    let flags: Vec<(i64, bool)> = memberships
        .iter()
        .map(|membership| (membership.list.id, membership.contains))
        .collect();
    assert_eq!(flags, vec![(2, true), (3, false)]);
}

#[tokio::test]
async fn test_list_membership_includes_later_pages() {
    let mut server = Server::new_async().await;
    let next = format!("{}/api/lists/?page=2", server.url());
    server
        .mock("GET", "/api/lists/")
        .match_query(Matcher::Missing)
        .with_status(200)
        .with_body(json!({"results": [{"id": 1, "name": "Favorites"}], "next": next}).to_string())
        .create_async()
        .await;
    server
        .mock("GET", "/api/lists/")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_body(r#"{"results": [{"id": 2, "name": "Weekend"}], "next": null}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/lists/1/")
        .with_status(200)
        .with_body(r#"{"id": 1, "name": "Favorites", "items": []}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/lists/2/")
        .with_status(200)
        .with_body(
            json!({"id": 2, "name": "Weekend", "items": [
                {"id": 20, "content_details": {"id": 42, "title": "Heat"}}
            ]})
            .to_string(),
        )
        .create_async()
        .await;

    let client = signed_in(&server);
    let memberships = client.list_membership(ContentKind::Movie, 42).await.unwrap();
    let flags: Vec<(i64, bool)> = memberships
        .iter()
        .map(|membership| (membership.list.id, membership.contains))
        .collect();
    assert_eq!(flags, vec![(1, false), (2, true)]);
}

#[tokio::test]
async fn test_remove_from_list_deletes_the_item() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/lists/2/")
        .with_status(200)
        .with_body(
            json!({"id": 2, "name": "Watch later", "items": [
                {"id": 20, "content_details": {"id": 42, "title": "Heat"}}
            ]})
            .to_string(),
        )
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/listitems/20/")
        .with_status(204)
        .create_async()
        .await;

    let client = signed_in(&server);
    client.remove_from_list(2, 42).await.unwrap();
    delete.assert_async().await;

    let err = client.remove_from_list(2, 7).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn test_profile_decodes_nested_shape() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/profile/user/7/")
        .with_status(200)
        .with_body(
            json!({
                "user_details": {"id": 7, "username": "deniz", "first_name": "Deniz"},
                "stats": {"followers": 3, "following": 5},
                "profile_status": {"is_owner": true, "is_following": false}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = signed_in(&server);
    let profile = client.profile("7").await.unwrap();
    assert_eq!(profile.user_details.username, "deniz");
    assert_eq!(profile.stats.following, 5);
    assert!(profile.profile_status.is_owner);
}

#[tokio::test]
async fn test_structured_validation_errors() {
    let mut server = Server::new_async().await;
    server
        .mock("PATCH", "/api/profile/user/7/")
        .with_status(400)
        .with_body(r#"{"email": ["Enter a valid email address."]}"#)
        .create_async()
        .await;

    let client = signed_in(&server);
    let err = client
        .update_profile(7, &api::ProfileUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "email: Enter a valid email address.");
    let ApiError::Payload(payload) = err else {
        panic!("expected a payload error");
    };
    assert_eq!(payload["email"], Value::from(vec!["Enter a valid email address."]));
}
