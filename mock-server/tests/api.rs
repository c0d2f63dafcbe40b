use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, seed_post, Db, NEW_PAGE_MARKER};
use tower::ServiceExt;

async fn body_text(response: axum::response::Response) -> String {
    let bytes: bytes::Bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn delete_request(body: &str) -> Request<String> {
    Request::builder()
        .method("DELETE")
        .uri("/posts")
        .header(http::header::ACCEPT, "application/json, text/plain")
        .header(http::header::CONTENT_TYPE, "application/json;charset=UTF-8")
        .body(body.to_string())
        .unwrap()
}

// --- delete ---

#[tokio::test]
async fn delete_with_valid_signature_redirects_to_new() {
    let db = Db::default();
    let uuid = seed_post(&db, "Hello", "sig").await;

    let resp = app_with(db.clone())
        .oneshot(delete_request(&format!(r#"{{"uuid":"{uuid}","signature":"sig"}}"#)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[http::header::LOCATION], "/new");
    assert!(db.read().await.is_empty());
}

#[tokio::test]
async fn delete_with_wrong_signature_renders_error_page() {
    let db = Db::default();
    let uuid = seed_post(&db, "Hello", "sig").await;

    let resp = app_with(db.clone())
        .oneshot(delete_request(&format!(r#"{{"uuid":"{uuid}","signature":"forged"}}"#)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(resp).await.contains("could not verify signature"));
    assert_eq!(db.read().await.len(), 1);
}

#[tokio::test]
async fn delete_unknown_post_does_not_leak_existence() {
    let resp = app()
        .oneshot(delete_request(
            r#"{"uuid":"00000000-0000-0000-0000-000000000000","signature":"sig"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(resp).await.contains("could not verify signature"));
}

#[tokio::test]
async fn delete_missing_field_returns_400_page() {
    let resp = app().oneshot(delete_request(r#"{"uuid":"abc"}"#)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_text(resp).await;
    assert!(body.contains("<html>"));
    assert!(body.contains("One or more fields missing or incorrect"));
}

#[tokio::test]
async fn delete_malformed_json_returns_400_page() {
    let resp = app().oneshot(delete_request("not json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_twice_fails_the_second_time() {
    let db = Db::default();
    let uuid = seed_post(&db, "Hello", "sig").await;
    let body = format!(r#"{{"uuid":"{uuid}","signature":"sig"}}"#);

    let first = app_with(db.clone()).oneshot(delete_request(&body)).await.unwrap();
    let second = app_with(db.clone()).oneshot(delete_request(&body)).await.unwrap();

    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// --- pages ---

#[tokio::test]
async fn new_page_has_upload_widget() {
    let resp = app()
        .oneshot(Request::builder().uri("/new").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains(NEW_PAGE_MARKER));
    assert!(body.contains("file-post-upload"));
}

#[tokio::test]
async fn get_post_renders_title() {
    let db = Db::default();
    let uuid = seed_post(&db, "Pigeon", "sig").await;

    let resp = app_with(db)
        .oneshot(Request::builder().uri(format!("/posts/{uuid}")).body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("<h1>Pigeon</h1>"));
}

#[tokio::test]
async fn get_missing_post_returns_404_page() {
    let resp = app()
        .oneshot(Request::builder().uri("/posts/not-a-uuid").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_text(resp).await.contains("What you are looking for does not exist"));
}
