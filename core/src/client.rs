//! Stateless request builder and response interpreter for the posts endpoint.
//!
//! # Design
//! `PostsClient` holds only a `base_url`. The delete operation is split into
//! `build_delete_post`, which turns a `FormSnapshot` into an `HttpRequest`,
//! and `parse_delete_post`, which turns the host's `HttpResponse` into the
//! document to display. The endpoint path and headers are fixed.

use tracing::debug;

use crate::error::ClientError;
use crate::form::FormSnapshot;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, RedirectPolicy};
use crate::types::ResponseDocument;

pub const POSTS_PATH: &str = "/posts";
pub const ACCEPT: &str = "application/json, text/plain";
pub const CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Client for the posts endpoint.
///
/// An empty `base_url` yields origin-relative paths (`/posts`), which is what
/// the browser host uses.
#[derive(Debug, Clone, Default)]
pub struct PostsClient {
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_delete_post(&self, snapshot: &FormSnapshot) -> HttpRequest {
        let body = snapshot.to_json();
        debug!(fields = snapshot.len(), bytes = body.len(), "built delete request");
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}{POSTS_PATH}", self.base_url),
            headers: vec![
                ("Accept".to_string(), ACCEPT.to_string()),
                ("Content-Type".to_string(), CONTENT_TYPE.to_string()),
            ],
            body: Some(body),
            redirect: RedirectPolicy::Follow,
        }
    }

    /// Interpret the final response of a delete.
    ///
    /// Any response with a body becomes the next page, error statuses
    /// included. A non-2xx response with nothing to show is `Server`.
    pub fn parse_delete_post(
        &self,
        response: HttpResponse,
    ) -> Result<ResponseDocument, ClientError> {
        let success = (200..400).contains(&response.status);
        if !success && response.body.trim().is_empty() {
            return Err(ClientError::Server {
                status: response.status,
                body: response.body,
            });
        }
        debug!(status = response.status, bytes = response.body.len(), "received delete response");
        Ok(ResponseDocument {
            status: response.status,
            markup: response.body,
        })
    }
}
