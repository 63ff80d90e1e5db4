//! Post endpoint tests: CRUD, likes and comments

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::{register_unique_user, register_user, send, test_app, TestUser};
use crate::{assert_error_message, assert_status};

async fn create_post(app: &axum::Router, user: &TestUser, text: &str) -> Value {
    let response = send(
        app,
        Method::POST,
        "/api/posts",
        Some(&user.token),
        Some(json!({ "text": text })),
    )
    .await;
    assert_status!(response, StatusCode::OK);
    response.body
}

fn post_id(post: &Value) -> String {
    post["id"].as_str().expect("post id").to_string()
}

#[tokio::test]
async fn test_create_post_snapshots_author() {
    let app = test_app();
    let user = register_user(&app, "Ann", "a@x.com", "secret1").await;

    let post = create_post(&app, &user, "hello").await;

    assert_eq!(post["text"], "hello");
    assert_eq!(post["user"], user.id.to_string());
    assert_eq!(post["name"], "Ann");
    assert_eq!(post["likes"], json!([]));
    assert_eq!(post["comment"], json!([]));
    assert!(post["avatar"].as_str().unwrap().starts_with("//www.gravatar.com/avatar/"));
    assert!(post["date"].is_string());
}

#[tokio::test]
async fn test_create_post_requires_text() {
    let app = test_app();
    let user = register_unique_user(&app, "Ann").await;

    let response = send(&app, Method::POST, "/api/posts", Some(&user.token), Some(json!({ "text": "" }))).await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"][0]["field"], "text");
    assert_eq!(response.body["errors"][0]["message"], "Text is required");
}

#[tokio::test]
async fn test_post_routes_require_token() {
    let app = test_app();
    let id = Uuid::new_v4();

    let cases = [
        (Method::GET, "/api/posts".to_string()),
        (Method::POST, "/api/posts".to_string()),
        (Method::GET, format!("/api/posts/{}", id)),
        (Method::DELETE, format!("/api/posts/{}", id)),
        (Method::PUT, format!("/api/posts/like/{}", id)),
        (Method::PUT, format!("/api/posts/unlike/{}", id)),
        (Method::POST, format!("/api/posts/comment/{}", id)),
        (Method::DELETE, format!("/api/posts/comment/{}/{}", id, Uuid::new_v4())),
    ];

    for (method, uri) in cases {
        let response = send(&app, method.clone(), &uri, None, Some(json!({ "text": "x" }))).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
    }
}

#[tokio::test]
async fn test_list_posts_newest_first() {
    let app = test_app();
    let user = register_unique_user(&app, "Ann").await;

    let first = create_post(&app, &user, "first").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = create_post(&app, &user, "second").await;

    let response = send(&app, Method::GET, "/api/posts", Some(&user.token), None).await;

    assert_status!(response, StatusCode::OK);
    let ids: Vec<String> = response.body.as_array().unwrap().iter().map(post_id).collect();
    assert_eq!(ids, vec![post_id(&second), post_id(&first)]);
}

#[tokio::test]
async fn test_get_post_by_id() {
    let app = test_app();
    let user = register_unique_user(&app, "Ann").await;
    let post = create_post(&app, &user, "hello").await;

    let response = send(&app, Method::GET, &format!("/api/posts/{}", post_id(&post)), Some(&user.token), None).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body, post);
}

#[tokio::test]
async fn test_malformed_and_unknown_ids_look_the_same() {
    let app = test_app();
    let user = register_unique_user(&app, "Ann").await;

    let malformed = send(&app, Method::GET, "/api/posts/not-a-uuid", Some(&user.token), None).await;
    let unknown = send(&app, Method::GET, &format!("/api/posts/{}", Uuid::new_v4()), Some(&user.token), None).await;

    assert_status!(malformed, StatusCode::NOT_FOUND);
    assert_error_message!(malformed, "Post not found");
    assert_eq!(malformed.body, unknown.body);
}

#[tokio::test]
async fn test_delete_post_by_author() {
    let app = test_app();
    let user = register_unique_user(&app, "Ann").await;
    let post = create_post(&app, &user, "hello").await;
    let uri = format!("/api/posts/{}", post_id(&post));

    let response = send(&app, Method::DELETE, &uri, Some(&user.token), None).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body, json!({ "msg": "Post removed" }));

    let again = send(&app, Method::GET, &uri, Some(&user.token), None).await;
    assert_status!(again, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_post_by_other_user_is_forbidden() {
    let app = test_app();
    let author = register_unique_user(&app, "Ann").await;
    let other = register_unique_user(&app, "Bob").await;
    let post = create_post(&app, &author, "hello").await;
    let uri = format!("/api/posts/{}", post_id(&post));

    let response = send(&app, Method::DELETE, &uri, Some(&other.token), None).await;

    assert_status!(response, StatusCode::FORBIDDEN);
    assert_error_message!(response, "User not authorized");

    let still_there = send(&app, Method::GET, &uri, Some(&author.token), None).await;
    assert_status!(still_there, StatusCode::OK);
}

#[tokio::test]
async fn test_like_then_unlike_round_trip() {
    let app = test_app();
    let user = register_unique_user(&app, "Ann").await;
    let post = create_post(&app, &user, "hello").await;
    let id = post_id(&post);

    let liked = send(&app, Method::PUT, &format!("/api/posts/like/{}", id), Some(&user.token), None).await;
    assert_status!(liked, StatusCode::OK);
    assert_eq!(liked.body, json!([{ "user": user.id.to_string() }]));

    let unliked = send(&app, Method::PUT, &format!("/api/posts/unlike/{}", id), Some(&user.token), None).await;
    assert_status!(unliked, StatusCode::OK);
    assert_eq!(unliked.body, post["likes"]);
}

#[tokio::test]
async fn test_like_twice_is_rejected() {
    let app = test_app();
    let user = register_unique_user(&app, "Ann").await;
    let post = create_post(&app, &user, "hello").await;
    let uri = format!("/api/posts/like/{}", post_id(&post));

    send(&app, Method::PUT, &uri, Some(&user.token), None).await;
    let response = send(&app, Method::PUT, &uri, Some(&user.token), None).await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_error_message!(response, "Post already liked");

    let stored = send(&app, Method::GET, &format!("/api/posts/{}", post_id(&post)), Some(&user.token), None).await;
    assert_eq!(stored.body["likes"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_likes_are_most_recent_first() {
    let app = test_app();
    let ann = register_unique_user(&app, "Ann").await;
    let bob = register_unique_user(&app, "Bob").await;
    let post = create_post(&app, &ann, "hello").await;
    let uri = format!("/api/posts/like/{}", post_id(&post));

    send(&app, Method::PUT, &uri, Some(&ann.token), None).await;
    let response = send(&app, Method::PUT, &uri, Some(&bob.token), None).await;

    assert_eq!(
        response.body,
        json!([{ "user": bob.id.to_string() }, { "user": ann.id.to_string() }])
    );
}

#[tokio::test]
async fn test_unlike_without_like() {
    let app = test_app();
    let user = register_unique_user(&app, "Ann").await;
    let post = create_post(&app, &user, "hello").await;

    let response = send(&app, Method::PUT, &format!("/api/posts/unlike/{}", post_id(&post)), Some(&user.token), None).await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_error_message!(response, "Post has not yet been liked");
}

#[tokio::test]
async fn test_like_unknown_post() {
    let app = test_app();
    let user = register_unique_user(&app, "Ann").await;

    let response = send(&app, Method::PUT, &format!("/api/posts/like/{}", Uuid::new_v4()), Some(&user.token), None).await;

    assert_status!(response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_comment_is_prepended_with_author_snapshot() {
    let app = test_app();
    let ann = register_unique_user(&app, "Ann").await;
    let bob = register_unique_user(&app, "Bob").await;
    let post = create_post(&app, &ann, "hello").await;
    let uri = format!("/api/posts/comment/{}", post_id(&post));

    send(&app, Method::POST, &uri, Some(&ann.token), Some(json!({ "text": "first" }))).await;
    let response = send(&app, Method::POST, &uri, Some(&bob.token), Some(json!({ "text": "second" }))).await;

    assert_status!(response, StatusCode::OK);
    let comments = response.body.as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["text"], "second");
    assert_eq!(comments[0]["name"], "Bob");
    assert_eq!(comments[0]["user"], bob.id.to_string());
    assert_eq!(comments[1]["text"], "first");
    assert!(comments[0]["id"].is_string());
}

#[tokio::test]
async fn test_comment_requires_text() {
    let app = test_app();
    let user = register_unique_user(&app, "Ann").await;
    let post = create_post(&app, &user, "hello").await;

    let response = send(
        &app,
        Method::POST,
        &format!("/api/posts/comment/{}", post_id(&post)),
        Some(&user.token),
        Some(json!({})),
    )
    .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"][0]["message"], "Text is required");
}

#[tokio::test]
async fn test_comment_on_unknown_post_changes_nothing() {
    let app = test_app();
    let user = register_unique_user(&app, "Ann").await;
    create_post(&app, &user, "hello").await;

    let response = send(
        &app,
        Method::POST,
        &format!("/api/posts/comment/{}", Uuid::new_v4()),
        Some(&user.token),
        Some(json!({ "text": "lost" })),
    )
    .await;

    assert_status!(response, StatusCode::NOT_FOUND);
    assert_error_message!(response, "Post not found");

    let posts = send(&app, Method::GET, "/api/posts", Some(&user.token), None).await;
    assert_eq!(posts.body[0]["comment"], json!([]));
}

#[tokio::test]
async fn test_uncomment_removes_only_the_requested_comment() {
    let app = test_app();
    let user = register_unique_user(&app, "Ann").await;
    let post = create_post(&app, &user, "hello").await;
    let id = post_id(&post);
    let uri = format!("/api/posts/comment/{}", id);

    send(&app, Method::POST, &uri, Some(&user.token), Some(json!({ "text": "older" }))).await;
    let both = send(&app, Method::POST, &uri, Some(&user.token), Some(json!({ "text": "newer" }))).await;
    let older_id = both.body[1]["id"].as_str().unwrap().to_string();

    let response = send(
        &app,
        Method::DELETE,
        &format!("/api/posts/comment/{}/{}", id, older_id),
        Some(&user.token),
        None,
    )
    .await;

    assert_status!(response, StatusCode::OK);
    let remaining = response.body.as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["text"], "newer");
}

#[tokio::test]
async fn test_uncomment_by_other_user_is_forbidden() {
    let app = test_app();
    let ann = register_unique_user(&app, "Ann").await;
    let bob = register_unique_user(&app, "Bob").await;
    let post = create_post(&app, &ann, "hello").await;
    let id = post_id(&post);

    let added = send(
        &app,
        Method::POST,
        &format!("/api/posts/comment/{}", id),
        Some(&ann.token),
        Some(json!({ "text": "mine" })),
    )
    .await;
    let comment_id = added.body[0]["id"].as_str().unwrap().to_string();

    let response = send(
        &app,
        Method::DELETE,
        &format!("/api/posts/comment/{}/{}", id, comment_id),
        Some(&bob.token),
        None,
    )
    .await;

    assert_status!(response, StatusCode::FORBIDDEN);
    assert_error_message!(response, "User not authorized");

    let stored = send(&app, Method::GET, &format!("/api/posts/{}", id), Some(&ann.token), None).await;
    assert_eq!(stored.body["comment"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_uncomment_unknown_comment() {
    let app = test_app();
    let user = register_unique_user(&app, "Ann").await;
    let post = create_post(&app, &user, "hello").await;
    let id = post_id(&post);

    for comment_id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let response = send(
            &app,
            Method::DELETE,
            &format!("/api/posts/comment/{}/{}", id, comment_id),
            Some(&user.token),
            None,
        )
        .await;

        assert_status!(response, StatusCode::NOT_FOUND);
        assert_error_message!(response, "Comment does not exist");
    }
}
