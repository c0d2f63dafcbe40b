use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};
use uuid::Uuid;

pub const NEW_PAGE_MARKER: &str = "<title>New post</title>";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub uuid: Uuid,
    pub title: String,
    pub signature: String,
}

#[derive(Debug, Deserialize)]
pub struct DeletePost {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub signature: String,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Post>>>;

pub fn app() -> Router {
    app_with(Db::default())
}

pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/posts", delete(delete_post))
        .route("/posts/{uuid}", get(get_post))
        .route("/new", get(new_page))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(db)).await
}

/// Insert a post that can be deleted with `signature`.
pub async fn seed_post(db: &Db, title: &str, signature: &str) -> Uuid {
    let post = Post {
        uuid: Uuid::new_v4(),
        title: title.to_string(),
        signature: signature.to_string(),
    };
    let uuid = post.uuid;
    db.write().await.insert(uuid, post);
    uuid
}

pub fn error_page(status: StatusCode, message: &str) -> Response {
    let markup = format!(
        "<!DOCTYPE html><html><head><title>Error</title></head>\
         <body><h1>{}</h1><p>{message}</p></body></html>",
        status.as_u16()
    );
    (status, Html(markup)).into_response()
}

const FIELDS_INVALID: &str = "One or more fields missing or incorrect";

async fn delete_post(
    State(db): State<Db>,
    payload: Result<Json<DeletePost>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) if !request.uuid.is_empty() && !request.signature.is_empty() => request,
        Ok(_) => return error_page(StatusCode::BAD_REQUEST, FIELDS_INVALID),
        Err(rejection) => {
            warn!(%rejection, "rejected delete body");
            return error_page(StatusCode::BAD_REQUEST, FIELDS_INVALID);
        }
    };

    let Ok(uuid) = request.uuid.parse::<Uuid>() else {
        return error_page(StatusCode::INTERNAL_SERVER_ERROR, "could not verify signature");
    };

    let mut posts = db.write().await;
    let verified = posts
        .get(&uuid)
        .is_some_and(|post| post.signature == request.signature);
    if !verified {
        return error_page(StatusCode::INTERNAL_SERVER_ERROR, "could not verify signature");
    }
    posts.remove(&uuid);
    info!(%uuid, "post deleted");
    Redirect::to("/new").into_response()
}

async fn get_post(State(db): State<Db>, Path(uuid): Path<String>) -> Response {
    let posts = db.read().await;
    match uuid.parse::<Uuid>().ok().and_then(|id| posts.get(&id)) {
        Some(post) => Html(format!(
            "<!DOCTYPE html><html><head><title>{0}</title></head><body><h1>{0}</h1></body></html>",
            post.title
        ))
        .into_response(),
        None => error_page(StatusCode::NOT_FOUND, "What you are looking for does not exist"),
    }
}

async fn new_page() -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html><head>{NEW_PAGE_MARKER}</head><body>\
         <div id=\"file-post-upload\" class=\"file has-name\">\
         <input class=\"file-input\" type=\"file\" name=\"body\">\
         <span class=\"file-name\">No file uploaded</span></div></body></html>"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_post_defaults_missing_fields() {
        let input: DeletePost = serde_json::from_str(r#"{"uuid":"abc"}"#).unwrap();
        assert_eq!(input.uuid, "abc");
        assert!(input.signature.is_empty());
    }

    #[test]
    fn delete_post_ignores_extra_fields() {
        let input: DeletePost =
            serde_json::from_str(r#"{"uuid":"abc","signature":"s","title":"t"}"#).unwrap();
        assert_eq!(input.signature, "s");
    }

    #[test]
    fn delete_post_rejects_non_string_values() {
        let result: Result<DeletePost, _> = serde_json::from_str(r#"{"uuid":1,"signature":"s"}"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn seed_post_is_stored() {
        let db = Db::default();
        let uuid = seed_post(&db, "Hello", "sig").await;
        let posts = db.read().await;
        assert_eq!(posts[&uuid].title, "Hello");
    }
}
